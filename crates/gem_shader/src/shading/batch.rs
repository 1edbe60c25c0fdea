//! Batch evaluation over many shading points
//!
//! Each point is evaluated independently against the same read-only
//! constants, so batches split across the rayon pool with no locking. Output
//! slot `i` always holds the result for input `i`, and the parallel and
//! sequential paths produce bit-identical results.

use rayon::prelude::*;
use thiserror::Error;

use crate::core::BatchConfig;
use crate::material::MaterialConstants;

use super::compositor::{evaluate, SurfaceDescription, SurfaceInputs};

/// Batch evaluation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchError {
    /// Input and output slices differ in length
    #[error("Batch length mismatch: {inputs} inputs, {outputs} output slots")]
    LengthMismatch {
        /// Number of inputs
        inputs: usize,
        /// Number of output slots
        outputs: usize,
    },
}

fn runs_in_parallel(len: usize, config: &BatchConfig) -> bool {
    config.parallel && len >= config.min_chunk_len.max(1)
}

/// Evaluate every input, returning descriptions in input order
pub fn evaluate_batch(
    inputs: &[SurfaceInputs],
    constants: &MaterialConstants,
    config: &BatchConfig,
) -> Vec<SurfaceDescription> {
    if runs_in_parallel(inputs.len(), config) {
        log::debug!("Evaluating {} shading points in parallel", inputs.len());
        inputs
            .par_iter()
            .with_min_len(config.min_chunk_len.max(1))
            .map(|input| evaluate(input, constants))
            .collect()
    } else {
        log::debug!("Evaluating {} shading points sequentially", inputs.len());
        inputs.iter().map(|input| evaluate(input, constants)).collect()
    }
}

/// Evaluate into caller-owned output slots
///
/// Nothing is written when the slice lengths differ.
pub fn evaluate_into(
    inputs: &[SurfaceInputs],
    outputs: &mut [SurfaceDescription],
    constants: &MaterialConstants,
    config: &BatchConfig,
) -> Result<(), BatchError> {
    if inputs.len() != outputs.len() {
        return Err(BatchError::LengthMismatch {
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }

    if runs_in_parallel(inputs.len(), config) {
        log::trace!(
            "Splitting {} points into chunks of at least {}",
            inputs.len(),
            config.min_chunk_len
        );
        outputs
            .par_iter_mut()
            .zip(inputs.par_iter())
            .with_min_len(config.min_chunk_len.max(1))
            .for_each(|(out, input)| *out = evaluate(input, constants));
    } else {
        for (out, input) in outputs.iter_mut().zip(inputs) {
            *out = evaluate(input, constants);
        }
    }
    Ok(())
}
