//! Sampling of training boxes and image patches.

use image::RgbImage;
use rand::Rng;
use crate::box_ops::{self, SquarifyMode};
use crate::common::{BbBox, Patch};
use crate::data::SampleConfig;
use crate::Result;

/// Picks at most `max_count` candidate boxes that do not overlap any ignore box,
/// then normalizes their aspect ratio and pads them as configured.
pub fn sample_boxes<R: Rng + ?Sized>(config: &SampleConfig, rng: &mut R) -> Result<Vec<BbBox>> {
    let (max_count, candidates) = config.validate()?;

    let eligible: Vec<BbBox> = candidates
        .iter()
        .filter(|c| !c.ignore)
        .filter(|c| {
            box_ops::overlap_areas(&c.bb, &config.ignore_boxes)
                .iter()
                .all(|&oa| oa < config.overlap_threshold)
        })
        .map(|c| c.bb)
        .collect();

    let mut boxes = if eligible.len() > max_count {
        box_ops::sample_indices(rng, eligible.len(), max_count)
            .into_iter()
            .map(|i| eligible[i])
            .collect()
    } else {
        eligible
    };
    log::debug!(
        "Sampled {} of {} candidate boxes (budget {})",
        boxes.len(),
        candidates.len(),
        max_count
    );

    if let Some(dims) = config.target_dims {
        let ar = dims.aspect_ratio();
        for bb in boxes.iter_mut() {
            *bb = box_ops::squarify(bb, SquarifyMode::Expand, ar)?;
        }
    }

    if config.pad_fraction != 0. {
        let scale = 1. + config.pad_fraction;
        for bb in boxes.iter_mut() {
            *bb = box_ops::resize(bb, scale, scale)?;
        }
    }

    Ok(boxes)
}

/// Samples boxes like [`sample_boxes`] and crops a patch of `image` at each one.
///
/// The returned boxes are the pixel-aligned boxes the patches were cut from.
/// With a `(height, width)` target every patch is resized to that size grown
/// by the pad fraction.
pub fn sample_data<R: Rng + ?Sized>(
    image: &RgbImage,
    config: &SampleConfig,
    rng: &mut R,
) -> Result<(Vec<BbBox>, Vec<Patch>)> {
    let boxes = sample_boxes(config, rng)?;
    let patches = box_ops::crop_patches(image, &boxes, config.pad_mode, config.patch_dims())?;
    let boxes = patches.iter().map(|p| p.bb).collect();
    Ok((boxes, patches))
}
