//! Conversion of annotations into ignore-flagged ground truth.

use crate::box_ops;
use crate::common::{Annotation, GtRow};
use crate::data::{GtConfig, LabelFilter};
use crate::Result;

/// Selects the records whose label is accepted and flags the ones that fall
/// outside the configured ranges.
///
/// Returns the rows together with the 0-based index of the record each row
/// came from. Records with unaccepted labels produce no row, unless their
/// label is one of `config.ignore_labels`, in which case they are kept and
/// always flagged.
pub fn to_gt(
    records: &[Annotation],
    labels: &LabelFilter,
    config: &GtConfig,
) -> Result<(Vec<GtRow>, Vec<usize>)> {
    let mut rows = Vec::new();
    let mut indices = Vec::new();

    for (i, rec) in records.iter().enumerate() {
        let forced_ignore = config.is_ignore_label(&rec.label);
        if !labels.accepts(&rec.label) && !forced_ignore {
            log::trace!("Dropping record {} with label {:?}", i, rec.label);
            continue;
        }

        let ignore = rec.ignore || forced_ignore || is_out_of_range(rec, config);
        rows.push(GtRow::new(rec.bb, ignore));
        indices.push(i);
    }

    if let Some((mode, aspect_ratio)) = config.squarify {
        for row in rows.iter_mut().filter(|r| !r.ignore) {
            row.bb = box_ops::squarify(&row.bb, mode, aspect_ratio)?;
        }
    }

    log::debug!(
        "Selected {} of {} records, {} flagged ignore",
        rows.len(),
        records.len(),
        rows.iter().filter(|r| r.ignore).count()
    );
    Ok((rows, indices))
}

fn is_out_of_range(rec: &Annotation, config: &GtConfig) -> bool {
    let bb = &rec.bb;
    let out = config.height_range.excludes(bb.height())
        || config.width_range.excludes(bb.width())
        || config.area_range.excludes(bb.area())
        || config.aspect_ratio_range.excludes(bb.aspect_ratio())
        || config.visibility_range.excludes(rec.visible_fraction());

    let out_x = config
        .x_range
        .is_some_and(|r| r.excludes(bb.x_min()) || r.excludes(bb.x_max()));
    let out_y = config
        .y_range
        .is_some_and(|r| r.excludes(bb.y_min()) || r.excludes(bb.y_max()));

    out || out_x || out_y
}
