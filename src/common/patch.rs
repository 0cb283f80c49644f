use fast_image_resize::images::Image as FirImage;
use fast_image_resize::PixelType;
use image::{DynamicImage, RgbImage};
use crate::common::BbBox;

/// An image patch cropped out of a larger image, along with the pixel-aligned
/// box it was cut from.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    pub image: RgbImage,
    pub bb: BbBox,
}

impl std::ops::Deref for Patch {
    type Target = RgbImage;

    fn deref(&self) -> &Self::Target {
        &self.image
    }
}

impl std::ops::DerefMut for Patch {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.image
    }
}

impl From<Patch> for DynamicImage {
    fn from(patch: Patch) -> Self {
        patch.into_dyn()
    }
}

impl From<Patch> for RgbImage {
    fn from(patch: Patch) -> Self {
        patch.into_rgb8()
    }
}

impl Patch {
    pub fn new(image: RgbImage, bb: BbBox) -> Self {
        Self { image, bb }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub(crate) fn take_as_fir_image<'a>(&mut self) -> anyhow::Result<FirImage<'a>> {
        let (width, height) = self.image.dimensions();
        let buffer = std::mem::take(&mut self.image).into_raw();

        Ok(FirImage::from_vec_u8(width, height, buffer, PixelType::U8x3)?)
    }

    pub fn into_dyn(self) -> DynamicImage {
        DynamicImage::from(self.image)
    }

    pub fn into_rgb8(self) -> RgbImage {
        self.image
    }
}
