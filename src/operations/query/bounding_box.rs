use crate::math::Point3;
use crate::mesh::{SolidDocument, Triangle};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// Computes the axis-aligned bounding box of a solid document.
pub struct BoundingBox<'a> {
    document: &'a SolidDocument,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(document: &'a SolidDocument) -> Self {
        Self { document }
    }

    /// Executes the query, returning `None` for a document without triangles.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let mut vertices = self.document.triangles().iter().flat_map(Triangle::vertices);
        let first = *vertices.next()?;
        Some(vertices.fold(Aabb { min: first, max: first }, |aabb, v| Aabb {
            min: aabb.min.inf(v),
            max: aabb.max.sup(v),
        }))
    }
}
