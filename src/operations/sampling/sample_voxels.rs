use std::collections::BTreeSet;

use crate::error::{ParamsError, Result, SamplingError};
use crate::mask::PixelMask;

/// A coarse voxel cell: pixel coordinates integer-divided by the sampling step.
///
/// Ordered by `vx`, then `vy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VoxelCoord {
    pub vx: u32,
    pub vy: u32,
}

impl VoxelCoord {
    #[must_use]
    pub fn new(vx: u32, vy: u32) -> Self {
        Self { vx, vy }
    }

    /// Top-left pixel covered by this cell.
    #[must_use]
    pub fn origin_pixel(self, step: u32) -> (u32, u32) {
        (self.vx * step, self.vy * step)
    }
}

/// Deduplicated voxel cells of one mask, iterated in ascending order.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelSet {
    cells: BTreeSet<VoxelCoord>,
    step: u32,
}

impl VoxelSet {
    /// Sampling step the cells were produced with.
    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if there are no cells. Sampling never produces an empty set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.cells.iter().copied()
    }
}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = VoxelCoord;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, VoxelCoord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().copied()
    }
}

/// Coarsens a mask's foreground pixels into voxel cells of `step` x `step` pixels.
pub struct SampleVoxels<'a> {
    mask: &'a PixelMask,
    step: u32,
}

impl<'a> SampleVoxels<'a> {
    /// Creates a new `SampleVoxels` operation.
    #[must_use]
    pub fn new(mask: &'a PixelMask, step: u32) -> Self {
        Self { mask, step }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::ZeroStep`] if `step` is zero, or
    /// [`SamplingError::NoForegroundPixels`] if the mask has no foreground.
    pub fn execute(&self) -> Result<VoxelSet> {
        if self.step == 0 {
            return Err(ParamsError::ZeroStep.into());
        }
        if !self.mask.has_foreground() {
            return Err(SamplingError::NoForegroundPixels.into());
        }

        let cells: BTreeSet<VoxelCoord> = self
            .mask
            .foreground_pixels()
            .map(|(x, y)| VoxelCoord::new(x / self.step, y / self.step))
            .collect();

        Ok(VoxelSet {
            cells,
            step: self.step,
        })
    }
}
