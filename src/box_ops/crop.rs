use image::{Rgb, RgbImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use crate::box_ops::image_ops;
use crate::common::{BbBox, Patch};
use crate::error::BbGtError;
use crate::Result;

/// How pixels outside the image are filled when a crop crosses the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PadMode {
    /// Repeat the outermost row or column.
    ///
    /// Example: ...d c b a | a a a a...
    #[default]
    Replicate,

    /// Mirror the image, edge pixel included.
    ///
    /// Example: ...d c b a | a b c d...
    Symmetric,

    /// Wrap around to the opposite side.
    ///
    /// Example: ...d c b a | w x y z...
    Circular,

    /// Fill every channel with a constant.
    Constant(u8),

    /// Do not pad; the crop is clipped to the image and the box shrinks with it.
    Clip,
}

impl PadMode {
    /// Maps a possibly out-of-bounds coordinate to an index in `[0, len)`,
    /// or `None` when the pixel is filled with a constant.
    #[inline]
    fn source_index(&self, i: i64, len: i64) -> Option<i64> {
        if (0..len).contains(&i) {
            return Some(i);
        }
        match self {
            PadMode::Replicate | PadMode::Clip => Some(i.clamp(0, len - 1)),
            PadMode::Symmetric => {
                let period = 2 * len;
                let m = i.rem_euclid(period);
                Some(if m < len { m } else { period - 1 - m })
            }
            PadMode::Circular => Some(i.rem_euclid(len)),
            PadMode::Constant(_) => None,
        }
    }
}

/// Snaps a box to whole pixels: rounded corner, rounded size of at least one pixel.
fn snap_to_pixels(bb: &BbBox) -> (i64, i64, i64, i64) {
    let x = bb.x.round() as i64;
    let y = bb.y.round() as i64;
    let w = (bb.w.round() as i64).max(1);
    let h = (bb.h.round() as i64).max(1);
    (x, y, w, h)
}

fn crop_one(image: &RgbImage, bb: &BbBox, pad_mode: PadMode) -> Result<Patch> {
    let (img_w, img_h) = (image.width() as i64, image.height() as i64);
    if img_w == 0 || img_h == 0 {
        return Err(BbGtError::InvalidArgument("cannot crop an empty image".to_string()));
    }

    let (mut x, mut y, mut w, mut h) = snap_to_pixels(bb);
    if let PadMode::Clip = pad_mode {
        let (x2, y2) = ((x + w).min(img_w), (y + h).min(img_h));
        x = x.max(0);
        y = y.max(0);
        w = x2 - x;
        h = y2 - y;
        if w <= 0 || h <= 0 {
            return Err(BbGtError::InvalidArgument(format!(
                "box {:?} lies outside the {}x{} image", bb, img_w, img_h
            )));
        }
    }

    let fill = match pad_mode {
        PadMode::Constant(v) => Rgb([v, v, v]),
        _ => Rgb([0, 0, 0]),
    };
    let patch = RgbImage::from_fn(w as u32, h as u32, |i, j| {
        let sx = pad_mode.source_index(x + i as i64, img_w);
        let sy = pad_mode.source_index(y + j as i64, img_h);
        match (sx, sy) {
            (Some(sx), Some(sy)) => *image.get_pixel(sx as u32, sy as u32),
            _ => fill,
        }
    });

    Ok(Patch::new(patch, BbBox::new(x as f32, y as f32, w as f32, h as f32)))
}

/// Crops `image` at every box.
///
/// Boxes are snapped to integer pixel bounds first and the snapped box is
/// stored on each returned [`Patch`]. When `dims` is `Some((height, width))`
/// every patch is resized to that size afterwards.
pub fn crop_patches(
    image: &RgbImage,
    boxes: &[BbBox],
    pad_mode: PadMode,
    dims: Option<(u32, u32)>,
) -> Result<Vec<Patch>> {
    boxes
        .par_iter()
        .map(|bb| {
            let mut patch = crop_one(image, bb, pad_mode)?;
            if let Some((h, w)) = dims {
                image_ops::resize_patch(&mut patch, h, w)?;
            }
            Ok(patch)
        })
        .collect()
}
