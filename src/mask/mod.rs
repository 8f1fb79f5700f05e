#[cfg(feature = "image")]
mod from_image;

use crate::error::{MaskError, Result};

/// Grayscale intensity below which a pixel counts as foreground.
pub const DEFAULT_THRESHOLD: u8 = 50;

/// A binary foreground mask over a `width` x `height` pixel grid.
///
/// Row 0 is the top row of the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    /// Row-major foreground flags.
    pixels: Vec<bool>,
}

impl PixelMask {
    /// Creates an all-background mask.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    /// Creates a mask by evaluating `is_foreground` at every pixel.
    #[must_use]
    pub fn from_fn(
        width: u32,
        height: u32,
        mut is_foreground: impl FnMut(u32, u32) -> bool,
    ) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(is_foreground(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Creates a mask with the given pixels marked foreground.
    ///
    /// Points outside the grid are ignored.
    #[must_use]
    pub fn from_points(
        width: u32,
        height: u32,
        points: impl IntoIterator<Item = (u32, u32)>,
    ) -> Self {
        let mut mask = Self::new(width, height);
        for (x, y) in points {
            mask.set(x, y, true);
        }
        mask
    }

    /// Thresholds a row-major 8-bit grayscale buffer: a pixel is foreground
    /// when its intensity is strictly below `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::BufferSize`] if `luma.len() != width * height`.
    pub fn from_luma(width: u32, height: u32, luma: &[u8], threshold: u8) -> Result<Self> {
        let expected = width as usize * height as usize;
        if luma.len() != expected {
            return Err(MaskError::BufferSize {
                width,
                height,
                expected,
                actual: luma.len(),
            }
            .into());
        }

        Ok(Self {
            width,
            height,
            pixels: luma.iter().map(|&value| value < threshold).collect(),
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `true` if `(x, y)` is inside the grid and marked foreground.
    #[must_use]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.index(x, y).is_some_and(|i| self.pixels[i])
    }

    /// Marks `(x, y)` as foreground or background. Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, foreground: bool) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = foreground;
        }
    }

    /// Iterates foreground pixel coordinates row by row, top to bottom.
    pub fn foreground_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_foreground(x, y))
    }

    /// Number of foreground pixels.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.pixels.iter().filter(|&&fg| fg).count()
    }

    /// Returns `true` if at least one pixel is foreground.
    #[must_use]
    pub fn has_foreground(&self) -> bool {
        self.pixels.contains(&true)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }
}
