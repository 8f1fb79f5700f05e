use crate::mesh::SolidDocument;

/// Computes the signed volume enclosed by a solid document.
///
/// Uses the signed tetrahedron method: for each triangle, computes
/// `(1/6) * v0 . (v1 x v2)` and sums over all triangles. The result is
/// positive when every facet is wound outward and negative when every facet
/// is wound inward. Closed boxes that touch or share a base add up.
pub struct Volume<'a> {
    document: &'a SolidDocument,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(document: &'a SolidDocument) -> Self {
        Self { document }
    }

    /// Executes the query, returning the signed volume.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let signed_volume: f64 = self
            .document
            .triangles()
            .iter()
            .map(|tri| {
                let [v0, v1, v2] = tri.vertices();
                v0.coords.dot(&v1.coords.cross(&v2.coords))
            })
            .sum();
        signed_volume / 6.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mask::PixelMask;
    use crate::operations::extrusion::{ExtrudeVoxels, ExtrusionFrame};
    use crate::operations::sampling::SampleVoxels;
    use approx::assert_relative_eq;

    fn layer(mask: &PixelMask, z_bottom: f64, thickness: f64) -> SolidDocument {
        let voxels = SampleVoxels::new(mask, 2).execute().unwrap();
        let frame = ExtrusionFrame {
            step: 2,
            scale: 0.1,
            image_height: mask.height(),
            z_bottom,
            thickness,
        };
        SolidDocument::new("layer", ExtrudeVoxels::new(&voxels, frame).execute())
    }

    #[test]
    fn single_voxel_volume() {
        let mask = PixelMask::from_points(4, 4, [(0, 0)]);
        let doc = layer(&mask, 0.0, 2.0);
        assert_relative_eq!(Volume::new(&doc).execute(), 0.2 * 0.2 * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn volume_is_independent_of_offset() {
        let mask = PixelMask::from_fn(8, 8, |x, y| x < 6 && y > 1);
        let low = layer(&mask, 0.0, 1.5);
        let high = layer(&mask, 7.25, 1.5);
        assert_relative_eq!(
            Volume::new(&low).execute(),
            Volume::new(&high).execute(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn adjacent_voxels_add_up() {
        // 3 x 3 voxels at step 2.
        let mask = PixelMask::from_fn(6, 6, |_, _| true);
        let doc = layer(&mask, 1.0, 0.5);
        assert_relative_eq!(Volume::new(&doc).execute(), 9.0 * 0.04 * 0.5, epsilon = 1e-9);
    }
}
