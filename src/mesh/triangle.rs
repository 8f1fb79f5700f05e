use crate::math::{facet_normal, Point3, Vector3};

/// A single mesh facet: three ordered vertices and their outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
    normal: Vector3,
}

impl Triangle {
    /// Creates a triangle, deriving the normal from the vertex winding.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self {
            normal: facet_normal(&a, &b, &c),
            vertices: [a, b, c],
        }
    }

    /// The vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Unit normal, or the zero vector for a degenerate triangle.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Returns `true` if the normal is the zero vector.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vector3::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normal_follows_winding() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 2.0, 1.0),
            Point3::new(2.0, 0.0, 1.0),
        );
        assert_relative_eq!(tri.normal(), Vector3::new(0.0, 0.0, -1.0));
        assert!(!tri.is_degenerate());
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let tri = Triangle::new(p, p, Point3::new(2.0, 2.0, 2.0));
        assert!(tri.is_degenerate());
    }
}
