mod sample_voxels;

pub use sample_voxels::{SampleVoxels, VoxelCoord, VoxelSet};
