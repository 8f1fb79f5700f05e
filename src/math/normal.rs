use super::{Point3, Vector3};

/// Unit normal of the triangle `(a, b, c)` from `(b - a) x (c - a)`.
///
/// Counter-clockwise winding seen from outside yields an outward normal.
/// A zero-length cross product (collinear or coincident vertices) yields the
/// zero vector.
#[must_use]
pub fn facet_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    (b - a)
        .cross(&(c - a))
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros)
}
