//! Gem shading kernel
//!
//! Three independent signal generators feed one compositor:
//!
//! - [`pulse`]: time to a [0, 1] oscillation
//! - [`fresnel`]: normal and view direction to a [0, 1] rim weight
//! - [`noise`]: animated uv to a continuous pseudo-random scalar
//! - [`compositor`]: combines them with the base color into a [`SurfaceDescription`]
//!
//! Everything here is a pure function of its arguments. Time is always passed
//! in explicitly. [`batch`] runs the compositor over many points at once.

pub mod batch;
pub mod color;
pub mod compositor;
pub mod fresnel;
pub mod noise;
pub mod pulse;

pub use batch::{evaluate_batch, evaluate_into, BatchError};
pub use color::{linear_to_srgb, srgb_to_linear};
pub use compositor::{evaluate, evaluate_signals, ShadingSignals, SurfaceDescription, SurfaceInputs};
pub use fresnel::edge_highlight;
pub use noise::gradient_noise;
pub use pulse::pulsate;
