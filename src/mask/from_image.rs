use image::{DynamicImage, GrayImage};

use super::PixelMask;

impl PixelMask {
    /// Thresholds an 8-bit grayscale image. See [`PixelMask::from_luma`].
    #[must_use]
    pub fn from_gray_image(image: &GrayImage, threshold: u8) -> Self {
        let (width, height) = image.dimensions();
        Self::from_fn(width, height, |x, y| image.get_pixel(x, y).0[0] < threshold)
    }

    /// Converts any image to 8-bit luma, then thresholds it.
    #[must_use]
    pub fn from_dynamic_image(image: &DynamicImage, threshold: u8) -> Self {
        Self::from_gray_image(&image.to_luma8(), threshold)
    }
}
