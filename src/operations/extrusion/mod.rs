mod extrude_voxel;

pub use extrude_voxel::{ExtrudeVoxel, ExtrudeVoxels, ExtrusionFrame, TRIANGLES_PER_VOXEL};
