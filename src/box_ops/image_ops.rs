//! Patch resizing on top of `fast_image_resize`.

use anyhow::{anyhow, bail, Result};
use fast_image_resize::{
    images::Image as FirImage,
    pixels::PixelType,
    FilterType, ResizeAlg, ResizeOptions, Resizer,
};
use image::RgbImage;
use crate::common::Patch;

/// Resizes a patch in place to `target_h` x `target_w` pixels.
pub fn resize_patch(patch: &mut Patch, target_h: u32, target_w: u32) -> Result<()> {
    if target_h == 0 || target_w == 0 {
        bail!("Target patch size must be non-zero, got {}x{}", target_h, target_w);
    }
    if patch.dimensions() == (target_w, target_h) {
        return Ok(());
    }

    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    let mut resizer = Resizer::new();

    let src = patch.take_as_fir_image()?;
    let dst = resize_image(&src, target_h, target_w, &mut resizer, &options)?;
    patch.image = from_fir_image(&dst)?;
    Ok(())
}

fn resize_image<'a>(
    img: &FirImage,
    target_h: u32,
    target_w: u32,
    resizer: &mut Resizer,
    config: &ResizeOptions,
) -> Result<FirImage<'a>> {
    let mut dst = FirImage::new(target_w, target_h, PixelType::U8x3);
    resizer.resize(img, &mut dst, config)?;
    Ok(dst)
}

fn from_fir_image(img: &FirImage) -> Result<RgbImage> {
    let (w, h) = (img.width(), img.height());
    let buf = img.buffer();
    if buf.len() != (w * h * 3) as usize {
        bail!("Unexpected buffer size: got {}, expected {}", buf.len(), w * h * 3);
    }
    RgbImage::from_raw(w, h, buf.to_vec())
        .ok_or_else(|| anyhow!("Failed to rebuild a {}x{} RGB image", w, h))
}
