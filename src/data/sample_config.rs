use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::box_ops::PadMode;
use crate::common::GtRow;
use crate::error::BbGtError;
use crate::{utils, Result};

/// Target shape of sampled boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetDims {
    /// Width over height.
    AspectRatio(f32),
    /// `(height, width)` in pixels. Also fixes the size of cropped patches.
    HeightWidth(u32, u32),
}

impl TargetDims {
    pub fn aspect_ratio(&self) -> f32 {
        match *self {
            TargetDims::AspectRatio(ar) => ar,
            TargetDims::HeightWidth(h, w) => w as f32 / h as f32,
        }
    }
}

/// Options for sampling training boxes and patches.
///
/// `max_count` and `candidate_boxes` are required, see [`SampleConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Maximum number of boxes returned. Required.
    pub max_count: Option<usize>,
    /// Boxes to sample from; rows flagged ignore are discarded. Required.
    pub candidate_boxes: Option<Vec<GtRow>>,
    /// Regions no sample may overlap. Default: empty.
    pub ignore_boxes: Vec<GtRow>,
    /// Candidates scoring at or above this against any ignore box are rejected. Default: 0.5.
    pub overlap_threshold: f32,
    /// Aspect ratio or `(height, width)` to normalize to. Default: none.
    pub target_dims: Option<TargetDims>,
    /// Relative growth applied to each box about its center. Default: 0.
    pub pad_fraction: f32,
    /// Fill used when a crop leaves the image. Default: replicate.
    pub pad_mode: PadMode,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            max_count: None,
            candidate_boxes: None,
            ignore_boxes: vec![],
            overlap_threshold: 0.5,
            target_dims: None,
            pad_fraction: 0.,
            pad_mode: PadMode::Replicate,
        }
    }
}

impl SampleConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        utils::read_json(path.as_ref())
    }

    pub fn with_max_count(mut self, n: usize) -> Self {
        self.max_count = Some(n);
        self
    }

    pub fn with_candidate_boxes<B: Into<GtRow> + Copy>(mut self, boxes: &[B]) -> Self {
        self.candidate_boxes = Some(boxes.iter().map(|&b| b.into()).collect());
        self
    }

    pub fn with_ignore_boxes<B: Into<GtRow> + Copy>(mut self, boxes: &[B]) -> Self {
        self.ignore_boxes = boxes.iter().map(|&b| b.into()).collect();
        self
    }

    pub fn with_overlap_threshold(mut self, x: f32) -> Self {
        self.overlap_threshold = x;
        self
    }

    pub fn with_target_dims(mut self, x: TargetDims) -> Self {
        self.target_dims = Some(x);
        self
    }

    pub fn with_pad_fraction(mut self, x: f32) -> Self {
        self.pad_fraction = x;
        self
    }

    pub fn with_pad_mode(mut self, x: PadMode) -> Self {
        self.pad_mode = x;
        self
    }

    /// Checks the required fields and returns them.
    pub fn validate(&self) -> Result<(usize, &[GtRow])> {
        let max_count = self
            .max_count
            .ok_or_else(|| BbGtError::Config("`max_count` is required".to_string()))?;
        let candidates = self
            .candidate_boxes
            .as_deref()
            .ok_or_else(|| BbGtError::Config("`candidate_boxes` is required".to_string()))?;
        Ok((max_count, candidates))
    }

    /// Patch size `(height, width)` after padding, only defined for a
    /// `(height, width)` target.
    pub fn patch_dims(&self) -> Option<(u32, u32)> {
        match self.target_dims {
            Some(TargetDims::HeightWidth(h, w)) => {
                let scale = 1. + self.pad_fraction;
                Some(((h as f32 * scale).round() as u32, (w as f32 * scale).round() as u32))
            }
            _ => None,
        }
    }
}
