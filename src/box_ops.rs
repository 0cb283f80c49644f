//! Geometry and pixel operations on bounding boxes.

mod crop;
mod geometry;
pub mod image_ops;
mod overlap;
mod random;

pub use crop::{crop_patches, PadMode};
pub use geometry::{resize, squarify, SquarifyMode};
pub use overlap::{overlap_area, overlap_areas};
pub use random::sample_indices;
