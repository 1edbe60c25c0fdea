//! # Gem Shader
//!
//! Procedural surface shading for a stylized, glowing gem material.
//!
//! ## Features
//!
//! - **Pure Kernel**: `evaluate` is a deterministic function of its inputs
//! - **Rim Glow**: View-angle edge highlight that breathes with a time pulse
//! - **Gradient Noise**: Hash-driven lattice noise with no lookup tables
//! - **Batch Evaluation**: Data-parallel shading of many points with rayon
//! - **Configurable**: Materials and batch settings from TOML or RON files
//!
//! ## Quick Start
//!
//! ```rust
//! use gem_shader::prelude::*;
//!
//! let constants = MaterialConstants::ruby();
//! let inputs = SurfaceInputs {
//!     normal_world: Vec3::new(0.0, 0.0, 1.0),
//!     view_direction_world: Vec3::new(0.0, 0.0, 1.0),
//!     uv: Vec2::new(0.25, 0.75),
//!     time: 1.5,
//!     ..Default::default()
//! };
//!
//! let surface = evaluate(&inputs, &constants);
//! assert_eq!(surface.smoothness, constants.smoothness);
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod material;
pub mod shading;

/// Common imports for shader users
pub mod prelude {
    pub use crate::{
        core::{BatchConfig, Config, ConfigError, ShadingConfig},
        foundation::math::{Vec2, Vec3},
        material::{GemMaterial, GemMaterialBuilder, GemMaterialUbo, MaterialConstants, MaterialError},
        shading::{
            evaluate, evaluate_batch, evaluate_into, evaluate_signals, BatchError, ShadingSignals,
            SurfaceDescription, SurfaceInputs,
        },
    };
}
