//! sRGB <-> linear color space conversion
//!
//! Material colors are authored in sRGB; all shading math runs in linear space.
//! Neither direction clamps: components outside [0, 1] extrapolate the same
//! curve and clamping is left to whoever consumes the result.

use crate::foundation::math::{utils::map_components, Vec3};

/// sRGB value at which the curve switches from the linear toe to the power segment
const SRGB_TOE: f32 = 0.04045;

/// Linear value at which the inverse curve switches segments
const LINEAR_TOE: f32 = 0.003_130_8;

/// Convert one sRGB-encoded component to linear
#[inline]
pub fn srgb_to_linear_component(c: f32) -> f32 {
    if c <= SRGB_TOE {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert one linear component to sRGB encoding
#[inline]
pub fn linear_to_srgb_component(l: f32) -> f32 {
    if l <= LINEAR_TOE {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Convert an sRGB color to linear, componentwise
#[inline]
pub fn srgb_to_linear(c: &Vec3) -> Vec3 {
    map_components(c, srgb_to_linear_component)
}

/// Convert a linear color to sRGB, componentwise
#[inline]
pub fn linear_to_srgb(l: &Vec3) -> Vec3 {
    map_components(l, linear_to_srgb_component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_srgb_roundtrip_samples() {
        for sample in [0.0_f32, 0.04045, 0.5, 1.0] {
            let back = linear_to_srgb_component(srgb_to_linear_component(sample));
            assert_abs_diff_eq!(back, sample, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_srgb_known_values() {
        assert_eq!(srgb_to_linear_component(0.0), 0.0);
        assert_abs_diff_eq!(srgb_to_linear_component(1.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(srgb_to_linear_component(0.5), 0.214_041, epsilon = 1e-5);
        assert_abs_diff_eq!(srgb_to_linear_component(0.7), 0.447_988, epsilon = 1e-5);
        // Toe segment is a straight division
        assert_abs_diff_eq!(srgb_to_linear_component(0.02), 0.02 / 12.92, epsilon = 1e-9);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert!(srgb_to_linear_component(1.5) > 1.0);
        assert!(srgb_to_linear_component(-0.5) < 0.0);
    }

    #[test]
    fn test_vector_conversion_is_componentwise() {
        let c = Vec3::new(0.7, 0.05, 0.5);
        let l = srgb_to_linear(&c);
        assert_eq!(l.x, srgb_to_linear_component(0.7));
        assert_eq!(l.y, srgb_to_linear_component(0.05));
        assert_eq!(l.z, srgb_to_linear_component(0.5));

        let back = linear_to_srgb(&l);
        assert_abs_diff_eq!(back, c, epsilon = 1e-5);
    }
}
