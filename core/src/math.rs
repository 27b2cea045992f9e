//! Math type aliases and helper functions.
//!
//! Mesh accumulation runs in `f64`; values are narrowed to `f32` only when
//! they are written to a `.ksm` file.

pub use nalgebra;

/// 2D vector (f64), used for texture coordinates.
pub type Vec2 = nalgebra::Vector2<f64>;

/// 3D vector (f64), used for positions and normals.
pub type Vec3 = nalgebra::Vector3<f64>;

/// Absolute per-axis distance below which two positions are coincident.
pub const COINCIDENCE_TOLERANCE: f64 = 1e-5;

/// Build a [`Vec3`] from a `[x, y, z]` array.
pub fn vec3_from_array(a: [f64; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}

/// Build a [`Vec2`] from a `[u, v]` array.
pub fn vec2_from_array(a: [f64; 2]) -> Vec2 {
    Vec2::new(a[0], a[1])
}

/// Scale a vector to unit length.
///
/// A zero-length vector stays zero instead of turning into NaNs.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}

/// Unit normal of the triangle `a, b, c` following the right-hand rule.
///
/// Degenerate triangles yield a zero vector.
pub fn triangle_normal(a: &Vec3, b: &Vec3, c: &Vec3) -> Vec3 {
    normalize_or_zero((b - a).cross(&(c - a)))
}

/// True when `a` and `b` differ by less than [`COINCIDENCE_TOLERANCE`] on
/// every axis. Each axis is checked independently; this is not a Euclidean
/// distance test.
pub fn is_coincident(a: &Vec3, b: &Vec3) -> bool {
    (a.x - b.x).abs() < COINCIDENCE_TOLERANCE
        && (a.y - b.y).abs() < COINCIDENCE_TOLERANCE
        && (a.z - b.z).abs() < COINCIDENCE_TOLERANCE
}

/// Narrow a vector to `f32` in `.ksm` axis order (`x, z, y`).
pub fn to_ksm_axes(v: &Vec3) -> [f32; 3] {
    [v.x as f32, v.z as f32, v.y as f32]
}

/// Undo [`to_ksm_axes`], widening back to `f64` in `x, y, z` order.
pub fn from_ksm_axes(a: [f32; 3]) -> Vec3 {
    Vec3::new(f64::from(a[0]), f64::from(a[2]), f64::from(a[1]))
}
