//! # Shading Configuration
//!
//! Typed configuration for hosts that drive the gem shader from a file:
//! the material constants, how batches are evaluated, and the log level.
//!
//! ```toml
//! log_level = "info"
//!
//! [material]
//! base_color_srgb = [0.7, 0.05, 0.05]
//! fresnel_power = 3.0
//!
//! [batch]
//! parallel = true
//! min_chunk_len = 1024
//! ```
//!
//! Every field is optional; missing ones fall back to the defaults.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::material::MaterialConstants;

/// # Batch Configuration
///
/// Controls how [`crate::shading::batch`] splits work across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Evaluate on the rayon thread pool when the batch is large enough
    pub parallel: bool,
    /// Smallest number of points handed to one worker, and the batch size
    /// below which evaluation stays on the calling thread
    pub min_chunk_len: usize,
}

impl BatchConfig {
    /// Create a batch configuration
    pub fn new() -> Self {
        Self {
            parallel: true,
            min_chunk_len: 1024,
        }
    }

    /// Force single-threaded evaluation
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::new()
        }
    }

    /// Set the minimum chunk length
    pub fn with_min_chunk_len(mut self, len: usize) -> Self {
        self.min_chunk_len = len;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_chunk_len == 0 {
            return Err(ConfigError::InvalidBatch("min_chunk_len must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Shading Configuration
///
/// Top-level configuration applications load from TOML or RON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Default log filter (`RUST_LOG` overrides it)
    pub log_level: String,
    /// Gem material constants
    pub material: MaterialConstants,
    /// Batch evaluation settings
    pub batch: BatchConfig,
}

impl ShadingConfig {
    /// Create a configuration with the given material and default settings
    pub fn new(material: MaterialConstants) -> Self {
        Self {
            log_level: "info".to_string(),
            material,
            batch: BatchConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set batch settings
    pub fn with_batch(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    /// Parsed log level filter
    pub fn log_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_filter()?;
        self.material.validate()?;
        self.batch.validate()?;
        Ok(())
    }

    /// Load from a TOML or RON file and validate the result
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::load_from_file(path)?;
        if let Err(err) = config.validate() {
            log::warn!("Rejected config {}: {}", path.display(), err);
            return Err(err);
        }
        log::info!("Loaded shading config from {}", path.display());
        Ok(config)
    }
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self::new(MaterialConstants::default())
    }
}

impl Config for ShadingConfig {}
