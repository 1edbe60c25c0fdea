//! Unit sphere sampling for the preview image
//!
//! The sphere fills the image and is viewed orthographically down -Z, so every
//! covered pixel shares the same view direction and the rim lands on the
//! silhouette.

use gem_shader::foundation::math::constants::{PI, TAU};
use gem_shader::prelude::*;
use gem_shader::shading::linear_to_srgb;

/// Ambient light applied to the base color so the unlit body stays visible
pub const AMBIENT: f32 = 0.08;

/// Shading inputs for the pixels a sphere covers
pub struct SphereSamples {
    /// Image width and height in pixels
    pub size: u32,
    /// Row-major pixel index of each input
    pub pixels: Vec<usize>,
    /// One shading point per covered pixel
    pub inputs: Vec<SurfaceInputs>,
}

/// Build one shading point per pixel covered by the sphere
pub fn sample_sphere(size: u32, time: f32) -> SphereSamples {
    let mut pixels = Vec::new();
    let mut inputs = Vec::new();
    let extent = size as f32;

    for py in 0..size {
        for px in 0..size {
            let x = (px as f32 + 0.5) / extent * 2.0 - 1.0;
            let y = 1.0 - (py as f32 + 0.5) / extent * 2.0;
            let r2 = x * x + y * y;
            if r2 > 1.0 {
                continue;
            }

            let normal = Vec3::new(x, y, (1.0 - r2).sqrt());
            let uv = Vec2::new(0.5 + normal.x.atan2(normal.z) / TAU, 0.5 - normal.y.asin() / PI);

            pixels.push((py * size + px) as usize);
            inputs.push(SurfaceInputs {
                position_world: normal,
                normal_world: normal,
                view_direction_world: Vec3::z(),
                uv,
                time,
            });
        }
    }

    SphereSamples { size, pixels, inputs }
}

/// Resolve a surface to an 8-bit sRGB pixel
pub fn shade_pixel(surface: &SurfaceDescription) -> [u8; 4] {
    let linear = surface.base_color_linear * (AMBIENT * surface.occlusion) + surface.emission;
    let clamped = linear.map(|c| c.clamp(0.0, 1.0));
    let srgb = linear_to_srgb(&clamped);
    let to_byte = |c: f32| (c * 255.0).round() as u8;
    [to_byte(srgb.x), to_byte(srgb.y), to_byte(srgb.z), 255]
}

/// Lay shaded surfaces out into an RGBA8 buffer, transparent where uncovered
pub fn compose_rgba(samples: &SphereSamples, surfaces: &[SurfaceDescription]) -> Vec<u8> {
    let mut rgba = vec![0u8; (samples.size * samples.size * 4) as usize];
    for (&pixel, surface) in samples.pixels.iter().zip(surfaces) {
        rgba[pixel * 4..pixel * 4 + 4].copy_from_slice(&shade_pixel(surface));
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_center_pixel_faces_viewer() {
        let samples = sample_sphere(65, 0.0);
        let center = (32 * 65 + 32) as usize;
        let index = samples.pixels.iter().position(|&p| p == center).unwrap();
        let normal = samples.inputs[index].normal_world;
        assert_abs_diff_eq!(normal, Vec3::z(), epsilon = 1e-6);
        assert_abs_diff_eq!(samples.inputs[index].uv, Vec2::new(0.5, 0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_corners_are_uncovered() {
        let size = 32;
        let samples = sample_sphere(size, 0.0);
        for corner in [0, size - 1, size * (size - 1), size * size - 1] {
            assert!(!samples.pixels.contains(&(corner as usize)));
        }
    }

    #[test]
    fn test_coverage_approximates_disk_area() {
        let size = 128;
        let samples = sample_sphere(size, 0.0);
        let expected = PI / 4.0 * (size * size) as f32;
        let covered = samples.inputs.len() as f32;
        assert!((covered - expected).abs() / expected < 0.02);
        assert_eq!(samples.inputs.len(), samples.pixels.len());
    }

    #[test]
    fn test_normals_are_unit_length() {
        let samples = sample_sphere(24, 1.0);
        for input in &samples.inputs {
            assert_abs_diff_eq!(input.normal_world.norm(), 1.0, epsilon = 1e-5);
            assert_eq!(input.time, 1.0);
        }
    }

    #[test]
    fn test_shade_pixel_clamps_hdr_emission() {
        let surface = SurfaceDescription {
            base_color_linear: Vec3::new(0.5, 0.0, 0.0),
            emission: Vec3::new(4.0, -1.0, 0.0),
            ..Default::default()
        };
        assert_eq!(shade_pixel(&surface), [255, 0, 0, 255]);
    }

    #[test]
    fn test_compose_rgba_leaves_background_transparent() {
        let samples = sample_sphere(16, 0.0);
        let surfaces = vec![SurfaceDescription::default(); samples.inputs.len()];
        let rgba = compose_rgba(&samples, &surfaces);
        assert_eq!(rgba.len(), 16 * 16 * 4);
        assert_eq!(rgba[3], 0);
        let first = samples.pixels[0];
        assert_eq!(rgba[first * 4 + 3], 255);
    }
}
