//! Gem material uniform block for GPU data transfer
//!
//! Mirrors `MaterialConstants` in a std140-compatible layout so a GPU port of
//! the kernel can read the same constants the CPU evaluator uses.

use bytemuck::{Pod, Zeroable};

use super::MaterialConstants;

/// Gem material uniform data for GPU
///
/// Layout must match the corresponding GLSL uniform block:
///
/// ```glsl
/// layout(set = 1, binding = 0) uniform GemMaterial {
///     vec4 base_color_smoothness;
///     vec4 metallic_occlusion_fresnel_noise;
///     vec4 tiling_scroll;
///     vec4 reserved;
/// };
/// ```
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GemMaterialUbo {
    /// Base color (sRGB) RGB + smoothness
    pub base_color_smoothness: [f32; 4],
    /// Metallic, occlusion, fresnel power, noise scale
    pub metallic_occlusion_fresnel_noise: [f32; 4],
    /// UV tiling, scroll speed x, scroll speed y, unused
    pub tiling_scroll: [f32; 4],
    /// Reserved for future use
    pub reserved: [f32; 4],
}

impl GemMaterialUbo {
    /// Create from material constants
    pub fn from_constants(constants: &MaterialConstants) -> Self {
        let color = &constants.base_color_srgb;
        Self {
            base_color_smoothness: [color.x, color.y, color.z, constants.smoothness],
            metallic_occlusion_fresnel_noise: [
                constants.metallic,
                constants.occlusion,
                constants.fresnel_power,
                constants.noise_scale,
            ],
            tiling_scroll: [
                constants.uv_tiling,
                constants.scroll_speed.x,
                constants.scroll_speed.y,
                0.0,
            ],
            reserved: [0.0; 4],
        }
    }

    /// Get a byte slice of this UBO for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gem_material_ubo_size() {
        assert_eq!(std::mem::size_of::<GemMaterialUbo>(), 64); // 4 * 16 bytes
        assert_eq!(std::mem::align_of::<GemMaterialUbo>(), 16);
    }

    #[test]
    fn test_from_constants() {
        let ubo = GemMaterialUbo::from_constants(&MaterialConstants::ruby());

        assert_eq!(ubo.base_color_smoothness, [0.7, 0.05, 0.05, 0.9]);
        assert_eq!(ubo.metallic_occlusion_fresnel_noise, [0.0, 1.0, 3.0, 6.0]);
        assert_eq!(ubo.tiling_scroll, [3.0, 0.1, 0.0, 0.0]);
        assert_eq!(ubo.reserved, [0.0; 4]);
    }

    #[test]
    fn test_as_bytes_layout() {
        let ubo = GemMaterialUbo::from_constants(&MaterialConstants::ruby());
        let bytes = ubo.as_bytes();
        assert_eq!(bytes.len(), 64);

        // fresnel power is the third float of the second row
        let offset = 16 + 2 * 4;
        let fresnel = f32::from_ne_bytes(bytes[offset..offset + 4].try_into().unwrap());
        assert_eq!(fresnel, 3.0);
    }
}
