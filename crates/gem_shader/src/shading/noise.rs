//! Deterministic 2D gradient noise
//!
//! Perlin-style lattice noise with no permutation table. Each lattice corner's
//! gradient comes straight from its integer coordinates through an integer
//! bit-mixing hash, so the field is a pure function of the sample position.
//!
//! Corner contributions are blended with smoothstep weights, which makes the
//! field C1-continuous across cell seams. With unit-length gradients the
//! output magnitude never exceeds `sqrt(2) / 2`.

use crate::foundation::math::{
    constants::TAU,
    utils::{lerp, smoothstep},
    Vec2,
};

/// Upper bound on `|gradient_noise(..)|` for unit gradients
pub const NOISE_AMPLITUDE_BOUND: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Mix two lattice coordinates into a well-distributed 32-bit hash.
///
/// Two odd multipliers decorrelate the axes, followed by a 32-bit avalanche
/// finalizer (xor-shift / multiply rounds).
#[inline]
#[allow(clippy::cast_sign_loss)]
pub fn hash_cell(x: i32, y: i32) -> u32 {
    let mut h = (x as u32).wrapping_mul(0x8da6_b343) ^ (y as u32).wrapping_mul(0xd816_3841);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}

/// Unit gradient for a lattice corner, from its hash mapped onto an angle
#[inline]
pub fn cell_gradient(x: i32, y: i32) -> Vec2 {
    let angle = hash_cell(x, y) as f32 * (TAU / 4_294_967_296.0);
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos, sin)
}

/// Sample the noise field at `uv * scale`.
///
/// Returns exactly 0 on lattice points. Coordinates beyond the `i32` range
/// saturate onto the outermost cells.
pub fn gradient_noise(uv: &Vec2, scale: f32) -> f32 {
    let p = uv * scale;
    let cell = Vec2::new(p.x.floor(), p.y.floor());
    let offset = p - cell;

    let (ix, iy) = (cell.x as i32, cell.y as i32);
    let (jx, jy) = (ix.wrapping_add(1), iy.wrapping_add(1));

    let d00 = cell_gradient(ix, iy).dot(&offset);
    let d01 = cell_gradient(ix, jy).dot(&(offset - Vec2::new(0.0, 1.0)));
    let d10 = cell_gradient(jx, iy).dot(&(offset - Vec2::new(1.0, 0.0)));
    let d11 = cell_gradient(jx, jy).dot(&(offset - Vec2::new(1.0, 1.0)));

    let sx = smoothstep(offset.x);
    let sy = smoothstep(offset.y);

    // x first, then y
    let bottom = lerp(d00, d10, sx);
    let top = lerp(d01, d11, sx);
    lerp(bottom, top, sy)
}
