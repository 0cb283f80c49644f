mod gt_config;
mod label_filter;
mod sample_config;
mod value_range;

pub use gt_config::GtConfig;
pub use label_filter::LabelFilter;
pub use sample_config::{SampleConfig, TargetDims};
pub use value_range::ValueRange;
