use serde::{Deserialize, Serialize};
use crate::common::BbBox;

/// A single labeled object occurrence.
///
/// `visible_bb` is only meaningful when `occluded` is set; an all-zero
/// `visible_bb` means the visible region was never specified.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub label: String,
    pub bb: BbBox,
    pub occluded: bool,
    pub visible_bb: BbBox,
    pub ignore: bool,
}

impl Annotation {
    pub fn new(label: &str, bb: BbBox) -> Self {
        Self {
            label: label.to_string(),
            bb,
            ..Default::default()
        }
    }

    /// Sets the bounding box using `(x, y, w, h)`.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate of the top-left corner.
    /// * `y` - The y-coordinate of the top-left corner.
    /// * `w` - The width of the bounding box.
    /// * `h` - The height of the bounding box.
    ///
    /// # Returns
    ///
    /// An `Annotation` instance with the updated box.
    pub fn with_x1y1_wh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.bb = BbBox::new(x, y, w, h);
        self
    }

    /// Marks the object as occluded with the given visible region.
    ///
    /// # Arguments
    ///
    /// * `visible_bb` - The visible part of the object, or an all-zero box if unknown.
    ///
    /// # Returns
    ///
    /// An `Annotation` instance flagged as occluded.
    pub fn with_occlusion(mut self, visible_bb: BbBox) -> Self {
        self.occluded = true;
        self.visible_bb = visible_bb;
        self
    }

    pub fn with_ignore(mut self, ignore: bool) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Fraction of the box that is visible.
    ///
    /// The all-zero check runs before the equality check, so a fully
    /// degenerate record (zero box, zero visible box) reports `1.0`.
    pub fn visible_fraction(&self) -> f32 {
        if !self.occluded || self.visible_bb.is_zero() {
            1.
        } else if self.visible_bb == self.bb {
            0.
        } else {
            self.visible_bb.area() / self.bb.area()
        }
    }
}

/// Creates `n` independent empty annotations.
pub fn create(n: usize) -> Vec<Annotation> {
    vec![Annotation::default(); n]
}
