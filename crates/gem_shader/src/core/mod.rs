//! # Core Module
//!
//! Shared configuration types used by hosts embedding the shader.
//!
//! ## Organization
//!
//! - **Config**: Typed shading configuration (material, batch, logging)

pub mod config;

// Re-export commonly used config types
pub use config::{BatchConfig, ShadingConfig};
pub use crate::config::{Config, ConfigError};
