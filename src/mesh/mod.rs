mod solid;
mod triangle;

pub use solid::SolidDocument;
pub use triangle::Triangle;

use crate::error::{ParamsError, Result};

/// Parameters controlling how masks are voxelized and scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionParams {
    /// Side of a voxel cell in pixels.
    pub step: u32,
    /// Model length units per pixel.
    pub scale: f64,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            step: 2,
            scale: 0.1,
        }
    }
}

impl ConversionParams {
    /// Sets the voxel cell side in pixels.
    #[must_use]
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    /// Sets the model length units per pixel.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Checks that the parameters describe a usable voxel grid.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::ZeroStep`] if `step` is zero, or
    /// [`ParamsError::InvalidScale`] if `scale` is not finite and positive.
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(ParamsError::ZeroStep.into());
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ParamsError::InvalidScale(self.scale).into());
        }
        Ok(())
    }
}
