//! Surface compositor
//!
//! Combines the pulse, edge highlight and noise signals with the material's
//! base color into the final surface description. Evaluation is a pure
//! function of its two arguments: no caching, no clock, no shared state.

use crate::foundation::math::{Vec2, Vec3};
use crate::material::MaterialConstants;

use super::color::srgb_to_linear;
use super::fresnel::edge_highlight;
use super::noise::gradient_noise;
use super::pulse::pulsate;

/// Per-point inputs supplied by the host renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceInputs {
    /// World-space position of the shaded point (carried through; not used by the glow terms)
    pub position_world: Vec3,
    /// World-space surface normal, unit length by contract
    pub normal_world: Vec3,
    /// Unit direction from the surface toward the viewer
    pub view_direction_world: Vec3,
    /// Mesh texture coordinates
    pub uv: Vec2,
    /// Elapsed time in seconds
    pub time: f32,
}

impl Default for SurfaceInputs {
    fn default() -> Self {
        Self {
            position_world: Vec3::zeros(),
            normal_world: Vec3::z(),
            view_direction_world: Vec3::z(),
            uv: Vec2::zeros(),
            time: 0.0,
        }
    }
}

/// Surface description handed back to the lighting stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDescription {
    /// Base color in linear space
    pub base_color_linear: Vec3,
    /// Emitted radiance, linear and unclamped
    pub emission: Vec3,
    /// Smoothness (1 - roughness)
    pub smoothness: f32,
    /// Metallic factor
    pub metallic: f32,
    /// Ambient occlusion factor
    pub occlusion: f32,
}

impl Default for SurfaceDescription {
    fn default() -> Self {
        Self {
            base_color_linear: Vec3::zeros(),
            emission: Vec3::zeros(),
            smoothness: 0.0,
            metallic: 0.0,
            occlusion: 1.0,
        }
    }
}

/// Intermediate signals consumed by the compositor for one shading point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingSignals {
    /// Pulsation in [0, 1]
    pub pulse: f32,
    /// Edge highlight in [0, 1]
    pub edge: f32,
    /// Noise sample, roughly in [-0.71, 0.71]
    pub noise: f32,
    /// Tiled and scrolled texture coordinate the noise was sampled at
    pub animated_uv: Vec2,
}

/// Compute the three glow signals for a shading point
pub fn evaluate_signals(inputs: &SurfaceInputs, constants: &MaterialConstants) -> ShadingSignals {
    let pulse = pulsate(inputs.time);
    let animated_uv = inputs.uv * constants.uv_tiling + constants.scroll_speed * inputs.time;
    let noise = gradient_noise(&animated_uv, constants.noise_scale);
    let edge = edge_highlight(
        &inputs.normal_world,
        &inputs.view_direction_world,
        constants.fresnel_power,
    );

    ShadingSignals {
        pulse,
        edge,
        noise,
        animated_uv,
    }
}

/// Evaluate the gem surface at one shading point.
///
/// Emission is a static noise glow plus a breathing rim glow:
/// `base * noise + (edge * base) * pulse`. Only the rim term follows the
/// pulse. Negative noise darkens the emission and nothing is clamped.
pub fn evaluate(inputs: &SurfaceInputs, constants: &MaterialConstants) -> SurfaceDescription {
    let base_color_linear = srgb_to_linear(&constants.base_color_srgb);
    let signals = evaluate_signals(inputs, constants);
    let emission = compose_emission(&base_color_linear, &signals);

    SurfaceDescription {
        base_color_linear,
        emission,
        smoothness: constants.smoothness,
        metallic: constants.metallic,
        occlusion: constants.occlusion,
    }
}

/// Emission from a linear tint and the point's signals
#[inline]
pub fn compose_emission(tint_linear: &Vec3, signals: &ShadingSignals) -> Vec3 {
    tint_linear * signals.noise + (tint_linear * signals.edge) * signals.pulse
}
