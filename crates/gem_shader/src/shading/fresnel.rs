//! View-angle edge highlight (Fresnel-style rim term)
//!
//! Used as an emissive rim glow rather than as physical reflectance, so there
//! is no F0 term: the result is simply `(1 - N·V)^power`.

use crate::foundation::math::{utils::saturate, Vec3};

/// Edge-weighted scalar in [0, 1] for a surface normal and view direction.
///
/// 0 when the surface faces the viewer, approaching 1 toward grazing angles.
/// Larger `power` pulls the highlight tighter against the silhouette.
///
/// `view_dir` must already be unit length. `normal` is renormalized here; a
/// zero-length normal is a precondition violation and produces NaN.
#[inline]
pub fn edge_highlight(normal: &Vec3, view_dir: &Vec3, power: f32) -> f32 {
    let n = normal.normalize();
    let n_dot_v = saturate(n.dot(view_dir));
    (1.0 - n_dot_v).powf(power)
}
