//! Math utilities and types
//!
//! Provides the vector types and scalar helpers the shading kernel is written in.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = std::f32::consts::TAU;

    /// Pi / 2
    pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
}

/// Math utility functions
pub mod utils {
    use super::Vec3;

    /// Clamp a value between min and max
    #[inline]
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Clamp a value to [0, 1]
    #[inline]
    pub fn saturate(value: f32) -> f32 {
        clamp(value, 0.0, 1.0)
    }

    /// Linear interpolation
    #[inline]
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Cubic Hermite ease `t²(3 - 2t)`.
    ///
    /// Unlike the GLSL builtin there are no edges and no clamping: the caller
    /// passes a value already in [0, 1].
    #[inline]
    pub fn smoothstep(t: f32) -> f32 {
        t * t * (3.0 - 2.0 * t)
    }

    /// Apply a scalar function to each component of a vector
    #[inline]
    pub fn map_components(v: &Vec3, f: impl Fn(f32) -> f32) -> Vec3 {
        Vec3::new(f(v.x), f(v.y), f(v.z))
    }
}
