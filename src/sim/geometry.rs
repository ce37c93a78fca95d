//! Distance and overlap helpers shared by placement and collision code

use glam::Vec2;

/// Direction used to separate circles whose centers coincide
pub const FALLBACK_AXIS: Vec2 = Vec2::X;

/// Euclidean distance between two centers
#[inline]
pub fn center_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Penetration depth of two discs; positive when they overlap
#[inline]
pub fn overlap(r1: f32, r2: f32, distance: f32) -> f32 {
    r1 + r2 - distance
}

/// Unit vector pointing from `from` to `to`.
///
/// Falls back to [`FALLBACK_AXIS`] when the points coincide so callers never
/// divide by zero.
#[inline]
pub fn separation_axis(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(FALLBACK_AXIS)
}
