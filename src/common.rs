mod annotation;
mod bb_box;
mod gt_row;
mod patch;

pub use annotation::*;
pub use bb_box::*;
pub use gt_row::*;
pub use patch::*;
