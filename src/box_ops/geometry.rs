use serde::{Deserialize, Serialize};
use crate::common::BbBox;
use crate::error::BbGtError;
use crate::Result;

/// How [`squarify`] reaches the target aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquarifyMode {
    /// Grow the short side; the result contains the input box.
    Expand,
    /// Shrink the long side; the result is contained in the input box.
    Shrink,
    /// Keep the width, set the height.
    KeepWidth,
    /// Keep the height, set the width.
    KeepHeight,
}

/// Adjusts `bb` about its center until `w / h == aspect_ratio`.
pub fn squarify(bb: &BbBox, mode: SquarifyMode, aspect_ratio: f32) -> Result<BbBox> {
    if !(aspect_ratio > 0.) || !aspect_ratio.is_finite() {
        return Err(BbGtError::InvalidArgument(format!(
            "aspect ratio must be a positive number, got {}", aspect_ratio
        )));
    }

    let (w, h) = (bb.w, bb.h);
    let set_width = match mode {
        SquarifyMode::Expand => w < h * aspect_ratio,
        SquarifyMode::Shrink => w > h * aspect_ratio,
        SquarifyMode::KeepWidth => false,
        SquarifyMode::KeepHeight => true,
    };

    let (w, h) = if set_width {
        (h * aspect_ratio, h)
    } else {
        (w, w / aspect_ratio)
    };
    Ok(BbBox::default().with_cxcy_wh(bb.cx(), bb.cy(), w, h))
}

/// Scales `bb` about its center by `width_ratio` and `height_ratio`.
///
/// A zero ratio on one side means "follow the other side", keeping the
/// original aspect ratio.
pub fn resize(bb: &BbBox, width_ratio: f32, height_ratio: f32) -> Result<BbBox> {
    if width_ratio < 0. || height_ratio < 0. || (width_ratio == 0. && height_ratio == 0.) {
        return Err(BbGtError::InvalidArgument(format!(
            "invalid resize ratios ({}, {})", width_ratio, height_ratio
        )));
    }

    let (w, h) = if width_ratio == 0. {
        let h = bb.h * height_ratio;
        (h * bb.aspect_ratio(), h)
    } else if height_ratio == 0. {
        let w = bb.w * width_ratio;
        (w, w / bb.aspect_ratio())
    } else {
        (bb.w * width_ratio, bb.h * height_ratio)
    };
    Ok(BbBox::default().with_cxcy_wh(bb.cx(), bb.cy(), w, h))
}
