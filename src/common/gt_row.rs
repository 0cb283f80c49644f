use serde::{Deserialize, Serialize};
use crate::common::BbBox;

/// A ground-truth box with its ignore flag, the `(x, y, w, h, ignore)` row.
///
/// Also the input type of the sampler, where a plain 4-number box is a row
/// with `ignore == false`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GtRow {
    pub bb: BbBox,
    pub ignore: bool,
}

impl GtRow {
    pub fn new(bb: BbBox, ignore: bool) -> Self {
        Self { bb, ignore }
    }

    /// Returns the row as `[x, y, w, h, ignore]` with the flag encoded as `0.` or `1.`.
    pub fn to_array(&self) -> [f32; 5] {
        [self.bb.x, self.bb.y, self.bb.w, self.bb.h, if self.ignore { 1. } else { 0. }]
    }
}

impl From<BbBox> for GtRow {
    fn from(bb: BbBox) -> Self {
        Self { bb, ignore: false }
    }
}

impl From<[f32; 4]> for GtRow {
    fn from(xywh: [f32; 4]) -> Self {
        BbBox::from(xywh).into()
    }
}

impl From<[f32; 5]> for GtRow {
    fn from(row: [f32; 5]) -> Self {
        Self {
            bb: BbBox::new(row[0], row[1], row[2], row[3]),
            ignore: row[4] != 0.,
        }
    }
}
