//! Builder for gem materials
//!
//! Provides a builder pattern API for creating gem materials programmatically,
//! with presets for common gemstones.

use crate::foundation::math::{Vec2, Vec3};

use super::{GemMaterial, MaterialConstants, MaterialError};

/// Builder for creating gem materials
///
/// Unlike setters that clamp, out of range values are kept as given and
/// reported by [`GemMaterialBuilder::build`].
///
/// # Examples
/// ```
/// use gem_shader::material::GemMaterialBuilder;
///
/// let topaz = GemMaterialBuilder::new()
///     .base_color_hex(0xFFC87C)
///     .fresnel_power(2.5)
///     .noise_scale(4.0)
///     .name("Topaz")
///     .build()
///     .unwrap();
/// assert_eq!(topaz.name.as_deref(), Some("Topaz"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GemMaterialBuilder {
    constants: MaterialConstants,
    name: Option<String>,
}

impl GemMaterialBuilder {
    /// Create a new builder starting from the ruby reference constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing constants
    pub fn from_constants(constants: MaterialConstants) -> Self {
        Self { constants, name: None }
    }

    /// Set the base color (sRGB)
    pub fn base_color(mut self, color: Vec3) -> Self {
        self.constants.base_color_srgb = color;
        self
    }

    /// Set the base color from sRGB components (0-1 range)
    pub fn base_color_rgb(self, r: f32, g: f32, b: f32) -> Self {
        self.base_color(Vec3::new(r, g, b))
    }

    /// Set the base color from a hex color code
    pub fn base_color_hex(self, hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        self.base_color(Vec3::new(r, g, b))
    }

    /// Set smoothness (0.0 = rough, 1.0 = mirror)
    pub fn smoothness(mut self, smoothness: f32) -> Self {
        self.constants.smoothness = smoothness;
        self
    }

    /// Set metallic factor
    pub fn metallic(mut self, metallic: f32) -> Self {
        self.constants.metallic = metallic;
        self
    }

    /// Set ambient occlusion factor
    pub fn occlusion(mut self, occlusion: f32) -> Self {
        self.constants.occlusion = occlusion;
        self
    }

    /// Set edge highlight falloff exponent
    pub fn fresnel_power(mut self, power: f32) -> Self {
        self.constants.fresnel_power = power;
        self
    }

    /// Set noise lattice frequency
    pub fn noise_scale(mut self, scale: f32) -> Self {
        self.constants.noise_scale = scale;
        self
    }

    /// Set uv tiling factor
    pub fn uv_tiling(mut self, tiling: f32) -> Self {
        self.constants.uv_tiling = tiling;
        self
    }

    /// Set noise scroll velocity (uv units per second)
    pub fn scroll_speed(mut self, speed: Vec2) -> Self {
        self.constants.scroll_speed = speed;
        self
    }

    /// Set material name for debugging
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validate and build the final material
    pub fn build(self) -> Result<GemMaterial, MaterialError> {
        if let Err(err) = self.constants.validate() {
            log::warn!(
                "Rejected gem material '{}': {}",
                self.name.as_deref().unwrap_or("<unnamed gem>"),
                err
            );
            return Err(err);
        }

        let material = GemMaterial::new(self.constants);
        Ok(match self.name {
            Some(name) => material.with_name(name),
            None => material,
        })
    }

    // ===== GEM PRESETS =====

    /// Deep red ruby with a tight rim and slow horizontal drift
    pub fn ruby() -> Self {
        Self::from_constants(MaterialConstants::ruby()).name("Ruby")
    }

    /// Green emerald: softer rim, coarser noise drifting diagonally
    pub fn emerald() -> Self {
        Self::new()
            .base_color_rgb(0.05, 0.6, 0.25)
            .smoothness(0.85)
            .fresnel_power(2.0)
            .noise_scale(4.0)
            .uv_tiling(2.0)
            .scroll_speed(Vec2::new(0.05, 0.05))
            .name("Emerald")
    }

    /// Blue sapphire: very sharp rim, fine noise scrolling upward
    pub fn sapphire() -> Self {
        Self::new()
            .base_color_rgb(0.06, 0.2, 0.75)
            .smoothness(0.95)
            .fresnel_power(5.0)
            .noise_scale(8.0)
            .uv_tiling(3.0)
            .scroll_speed(Vec2::new(0.0, 0.15))
            .name("Sapphire")
    }

    /// Purple amethyst: broad rim, slightly rougher facets
    pub fn amethyst() -> Self {
        Self::new()
            .base_color_rgb(0.55, 0.25, 0.7)
            .smoothness(0.75)
            .fresnel_power(1.5)
            .noise_scale(5.0)
            .uv_tiling(2.5)
            .scroll_speed(Vec2::new(-0.08, 0.02))
            .name("Amethyst")
    }

    /// Look up a preset by its lowercase name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "ruby" => Some(Self::ruby()),
            "emerald" => Some(Self::emerald()),
            "sapphire" => Some(Self::sapphire()),
            "amethyst" => Some(Self::amethyst()),
            _ => None,
        }
    }

    /// Names accepted by [`GemMaterialBuilder::preset`]
    pub const PRESET_NAMES: [&'static str; 4] = ["ruby", "emerald", "sapphire", "amethyst"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_defaults_to_ruby() {
        let material = GemMaterialBuilder::new().build().unwrap();
        assert_eq!(material.constants, MaterialConstants::ruby());
        assert!(material.name.is_none());
    }

    #[test]
    fn test_hex_color() {
        let material = GemMaterialBuilder::new().base_color_hex(0xFF8000).build().unwrap();
        let color = material.constants.base_color_srgb;
        assert_relative_eq!(color.x, 1.0);
        assert_relative_eq!(color.y, 128.0 / 255.0);
        assert_relative_eq!(color.z, 0.0);
    }

    #[test]
    fn test_build_rejects_invalid_values() {
        let result = GemMaterialBuilder::new().smoothness(1.5).build();
        assert!(matches!(result, Err(MaterialError::OutOfRange { field: "smoothness", .. })));

        let result = GemMaterialBuilder::new().noise_scale(-2.0).build();
        assert!(matches!(result, Err(MaterialError::NotPositive { field: "noise_scale", .. })));
    }

    #[test]
    fn test_all_presets_build() {
        for name in GemMaterialBuilder::PRESET_NAMES {
            let material = GemMaterialBuilder::preset(name)
                .unwrap_or_else(|| panic!("missing preset {name}"))
                .build()
                .unwrap();
            assert_eq!(material.display_name().to_lowercase(), name);
        }
        assert!(GemMaterialBuilder::preset("diamond").is_none());
    }

    #[test]
    fn test_ruby_preset_matches_reference_constants() {
        let ruby = GemMaterialBuilder::ruby().build().unwrap();
        assert_eq!(ruby.constants, MaterialConstants::ruby());
        assert_eq!(ruby.name.as_deref(), Some("Ruby"));
    }
}
