//! Named gem material resource

use serde::{Deserialize, Serialize};

use super::{GemMaterialUbo, MaterialConstants};

/// A validated gem material with an optional debug name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GemMaterial {
    /// Optional name for debugging
    pub name: Option<String>,
    /// Shading constants
    pub constants: MaterialConstants,
}

impl GemMaterial {
    /// Wrap constants without a name
    pub fn new(constants: MaterialConstants) -> Self {
        Self { name: None, constants }
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for log output, falling back to a placeholder
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed gem>")
    }

    /// Pack the constants into the GPU uniform layout
    pub fn to_ubo(&self) -> GemMaterialUbo {
        GemMaterialUbo::from_constants(&self.constants)
    }
}
