//! Bounding-box ground-truth toolkit: annotation records and their text
//! format, ground-truth selection, training sample extraction and a kNN
//! classifier.

mod utils;
pub mod annotation_io;
pub mod box_ops;
pub mod common;
pub mod data;
pub mod error;
pub mod ground_truth;
pub mod knn;
pub mod sampling;

pub use crate::annotation_io::{create, load, load_all, save};
pub use crate::error::BbGtError;
pub use crate::ground_truth::to_gt;
pub use crate::sampling::{sample_boxes, sample_data};

pub type Result<T, E = BbGtError> = std::result::Result<T, E>;
