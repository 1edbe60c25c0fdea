//! Gem material constants and their validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::{Vec2, Vec3};

/// Material validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Value falls outside its allowed closed range
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Offending field
        field: &'static str,
        /// Supplied value
        value: f32,
        /// Lower bound
        min: f32,
        /// Upper bound
        max: f32,
    },

    /// Value must be strictly positive
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive {
        /// Offending field
        field: &'static str,
        /// Supplied value
        value: f32,
    },

    /// Value is NaN or infinite
    #[error("{field} must be finite")]
    NonFinite {
        /// Offending field
        field: &'static str,
    },
}

/// Constant parameters of the gem material
///
/// Built once and shared read-only by every evaluation. Colors are authored
/// in sRGB and converted to linear at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConstants {
    /// Base color (albedo), sRGB encoded, also used as the emission tint
    pub base_color_srgb: Vec3,
    /// Smoothness (0.0 = rough, 1.0 = mirror)
    pub smoothness: f32,
    /// Metallic factor (0.0 = dielectric, 1.0 = metallic)
    pub metallic: f32,
    /// Ambient occlusion factor
    pub occlusion: f32,
    /// Exponent of the edge highlight falloff
    pub fresnel_power: f32,
    /// Noise lattice frequency applied to the animated uv
    pub noise_scale: f32,
    /// Texture coordinate tiling factor
    pub uv_tiling: f32,
    /// Noise scroll velocity in uv units per second
    pub scroll_speed: Vec2,
}

impl MaterialConstants {
    /// Deep red reference gem
    pub fn ruby() -> Self {
        Self {
            base_color_srgb: Vec3::new(0.7, 0.05, 0.05),
            smoothness: 0.9,
            metallic: 0.0,
            occlusion: 1.0,
            fresnel_power: 3.0,
            noise_scale: 6.0,
            uv_tiling: 3.0,
            scroll_speed: Vec2::new(0.1, 0.0),
        }
    }

    /// Check every field against its documented range
    pub fn validate(&self) -> Result<(), MaterialError> {
        let color = &self.base_color_srgb;
        unit_range("base_color_srgb.r", color.x)?;
        unit_range("base_color_srgb.g", color.y)?;
        unit_range("base_color_srgb.b", color.z)?;
        unit_range("smoothness", self.smoothness)?;
        unit_range("metallic", self.metallic)?;
        unit_range("occlusion", self.occlusion)?;
        positive("fresnel_power", self.fresnel_power)?;
        positive("noise_scale", self.noise_scale)?;
        positive("uv_tiling", self.uv_tiling)?;
        finite("scroll_speed.x", self.scroll_speed.x)?;
        finite("scroll_speed.y", self.scroll_speed.y)?;
        Ok(())
    }
}

impl Default for MaterialConstants {
    fn default() -> Self {
        Self::ruby()
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), MaterialError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MaterialError::NonFinite { field })
    }
}

fn unit_range(field: &'static str, value: f32) -> Result<(), MaterialError> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MaterialError::OutOfRange { field, value, min: 0.0, max: 1.0 })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), MaterialError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(MaterialError::NotPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruby_is_valid() {
        assert!(MaterialConstants::ruby().validate().is_ok());
        assert_eq!(MaterialConstants::default(), MaterialConstants::ruby());
    }

    #[test]
    fn test_out_of_range_color() {
        let constants = MaterialConstants {
            base_color_srgb: Vec3::new(0.5, 1.2, 0.5),
            ..Default::default()
        };
        assert_eq!(
            constants.validate(),
            Err(MaterialError::OutOfRange { field: "base_color_srgb.g", value: 1.2, min: 0.0, max: 1.0 })
        );
    }

    #[test]
    fn test_non_positive_power() {
        let constants = MaterialConstants { fresnel_power: 0.0, ..Default::default() };
        assert!(matches!(
            constants.validate(),
            Err(MaterialError::NotPositive { field: "fresnel_power", .. })
        ));
    }

    #[test]
    fn test_non_finite_scroll() {
        let constants = MaterialConstants {
            scroll_speed: Vec2::new(0.0, f32::NAN),
            ..Default::default()
        };
        assert_eq!(constants.validate(), Err(MaterialError::NonFinite { field: "scroll_speed.y" }));
    }

    #[test]
    fn test_nan_smoothness_reports_non_finite() {
        let constants = MaterialConstants { smoothness: f32::NAN, ..Default::default() };
        assert_eq!(constants.validate(), Err(MaterialError::NonFinite { field: "smoothness" }));
    }

    #[test]
    fn test_error_messages() {
        let err = MaterialError::NotPositive { field: "noise_scale", value: -1.0 };
        assert_eq!(err.to_string(), "noise_scale must be greater than zero, got -1");
    }
}
