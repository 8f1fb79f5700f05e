use crate::math::Point3;
use crate::mesh::{ConversionParams, Triangle};
use crate::operations::placement::LayerPlacement;
use crate::operations::sampling::{VoxelCoord, VoxelSet};

/// Number of triangles emitted for every voxel box.
pub const TRIANGLES_PER_VOXEL: usize = 12;

/// Everything needed to place voxel boxes of one layer in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrusionFrame {
    /// Voxel side in pixels.
    pub step: u32,
    /// Model units per pixel.
    pub scale: f64,
    /// Source image height in pixels, used to flip the Y axis.
    pub image_height: u32,
    pub z_bottom: f64,
    /// Must be positive.
    pub thickness: f64,
}

impl ExtrusionFrame {
    /// Builds the frame for one layer.
    #[must_use]
    pub fn new(params: &ConversionParams, image_height: u32, placement: &LayerPlacement) -> Self {
        Self {
            step: params.step,
            scale: params.scale,
            image_height,
            z_bottom: placement.z_bottom,
            thickness: placement.thickness,
        }
    }

    /// Footprint side of one voxel box in model units.
    #[must_use]
    pub fn voxel_size(&self) -> f64 {
        f64::from(self.step) * self.scale
    }

    #[must_use]
    pub fn z_top(&self) -> f64 {
        self.z_bottom + self.thickness
    }
}

/// Extrudes one voxel cell into a closed axis-aligned box.
pub struct ExtrudeVoxel {
    voxel: VoxelCoord,
    frame: ExtrusionFrame,
}

impl ExtrudeVoxel {
    /// Creates a new `ExtrudeVoxel` operation.
    #[must_use]
    pub fn new(voxel: VoxelCoord, frame: ExtrusionFrame) -> Self {
        Self { voxel, frame }
    }

    /// Executes the extrusion.
    ///
    /// Faces are emitted bottom, top, front (-Y), back (+Y), left (-X),
    /// right (+X), two triangles each, all wound counter-clockwise seen from
    /// outside the box.
    #[must_use]
    pub fn execute(&self) -> [Triangle; TRIANGLES_PER_VOXEL] {
        let frame = &self.frame;
        let (px, py) = self.voxel.origin_pixel(frame.step);

        let x0 = f64::from(px) * frame.scale;
        // Image rows grow downward, model Y grows upward.
        let y0 = (f64::from(frame.image_height) - f64::from(py)) * frame.scale;
        let size = frame.voxel_size();
        let (x1, y1) = (x0 + size, y0 + size);
        let (z0, z1) = (frame.z_bottom, frame.z_top());

        let p = Point3::new;
        let tri = Triangle::new;

        [
            // Bottom (z0), facing -Z
            tri(p(x0, y0, z0), p(x1, y1, z0), p(x1, y0, z0)),
            tri(p(x0, y0, z0), p(x0, y1, z0), p(x1, y1, z0)),
            // Top (z1), facing +Z
            tri(p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1)),
            tri(p(x0, y0, z1), p(x1, y1, z1), p(x0, y1, z1)),
            // Front (y0), facing -Y
            tri(p(x0, y0, z0), p(x1, y0, z0), p(x1, y0, z1)),
            tri(p(x0, y0, z0), p(x1, y0, z1), p(x0, y0, z1)),
            // Back (y1), facing +Y
            tri(p(x0, y1, z0), p(x1, y1, z1), p(x1, y1, z0)),
            tri(p(x0, y1, z0), p(x0, y1, z1), p(x1, y1, z1)),
            // Left (x0), facing -X
            tri(p(x0, y0, z0), p(x0, y0, z1), p(x0, y1, z1)),
            tri(p(x0, y0, z0), p(x0, y1, z1), p(x0, y1, z0)),
            // Right (x1), facing +X
            tri(p(x1, y0, z0), p(x1, y1, z1), p(x1, y0, z1)),
            tri(p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1)),
        ]
    }
}

/// Extrudes every cell of a voxel set, in the set's iteration order.
pub struct ExtrudeVoxels<'a> {
    voxels: &'a VoxelSet,
    frame: ExtrusionFrame,
}

impl<'a> ExtrudeVoxels<'a> {
    /// Creates a new `ExtrudeVoxels` operation.
    ///
    /// The frame's `step` is taken from the voxel set.
    #[must_use]
    pub fn new(voxels: &'a VoxelSet, frame: ExtrusionFrame) -> Self {
        Self {
            voxels,
            frame: ExtrusionFrame {
                step: voxels.step(),
                ..frame
            },
        }
    }

    /// Executes the extrusion, returning `12 * voxels.len()` triangles.
    #[must_use]
    pub fn execute(&self) -> Vec<Triangle> {
        let mut triangles = Vec::with_capacity(self.voxels.len() * TRIANGLES_PER_VOXEL);
        for voxel in self.voxels {
            triangles.extend(ExtrudeVoxel::new(voxel, self.frame).execute());
        }
        triangles
    }
}
