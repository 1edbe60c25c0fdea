//! Material system
//!
//! Gem material constants, validation, presets and GPU layout.

pub mod material;
pub mod material_builder;
pub mod material_params;
pub mod material_ubo;

// Re-export commonly used types
pub use material::GemMaterial;
pub use material_builder::GemMaterialBuilder;
pub use material_params::{MaterialConstants, MaterialError};
pub use material_ubo::GemMaterialUbo;
