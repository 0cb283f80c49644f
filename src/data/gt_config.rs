use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::box_ops::SquarifyMode;
use crate::data::ValueRange;
use crate::{utils, Result};

/// Options for turning annotations into ground-truth rows.
///
/// Every range defaults to `[0, +inf]`, so an untouched config only drops
/// records by label and copies the stored ignore flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GtConfig {
    pub height_range: ValueRange,
    pub width_range: ValueRange,
    pub area_range: ValueRange,
    pub aspect_ratio_range: ValueRange,
    pub visibility_range: ValueRange,

    /// Labels that are kept but always flagged ignore. Default: none.
    pub ignore_labels: Vec<String>,
    /// Horizontal extent both box edges must stay within. Default: unchecked.
    pub x_range: Option<ValueRange>,
    /// Vertical extent both box edges must stay within. Default: unchecked.
    pub y_range: Option<ValueRange>,
    /// Aspect-ratio normalization applied to non-ignored rows. Default: none.
    pub squarify: Option<(SquarifyMode, f32)>,
}

impl Default for GtConfig {
    fn default() -> Self {
        Self {
            height_range: ValueRange::default(),
            width_range: ValueRange::default(),
            area_range: ValueRange::default(),
            aspect_ratio_range: ValueRange::default(),
            visibility_range: ValueRange::default(),

            ignore_labels: vec![],
            x_range: None,
            y_range: None,
            squarify: None,
        }
    }
}

impl GtConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        utils::read_json(path.as_ref())
    }

    pub fn with_height_range<R: Into<ValueRange>>(mut self, x: R) -> Self {
        self.height_range = x.into();
        self
    }

    pub fn with_width_range<R: Into<ValueRange>>(mut self, x: R) -> Self {
        self.width_range = x.into();
        self
    }

    pub fn with_area_range<R: Into<ValueRange>>(mut self, x: R) -> Self {
        self.area_range = x.into();
        self
    }

    pub fn with_aspect_ratio_range<R: Into<ValueRange>>(mut self, x: R) -> Self {
        self.aspect_ratio_range = x.into();
        self
    }

    pub fn with_visibility_range<R: Into<ValueRange>>(mut self, x: R) -> Self {
        self.visibility_range = x.into();
        self
    }

    pub fn with_ignore_labels(mut self, labels: &[&str]) -> Self {
        self.ignore_labels = labels.iter().map(|x| x.to_string()).collect();
        self
    }

    pub fn with_x_range<R: Into<ValueRange>>(mut self, x: R) -> Self {
        self.x_range = Some(x.into());
        self
    }

    pub fn with_y_range<R: Into<ValueRange>>(mut self, x: R) -> Self {
        self.y_range = Some(x.into());
        self
    }

    pub fn with_squarify(mut self, mode: SquarifyMode, aspect_ratio: f32) -> Self {
        self.squarify = Some((mode, aspect_ratio));
        self
    }

    pub(crate) fn is_ignore_label(&self, label: &str) -> bool {
        self.ignore_labels.iter().any(|l| l == label)
    }
}
