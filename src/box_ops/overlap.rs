use crate::common::{BbBox, GtRow};

/// Area of overlap between `bb` and one other box.
///
/// Intersection over union, except when `other` is an ignore region: then
/// the union is replaced by the area of `bb`, so any box lying inside an
/// ignore region scores 1.
pub fn overlap_area(bb: &BbBox, other: &BbBox, other_is_ignore: bool) -> f32 {
    let inter = bb.intersect(other);
    let union = if other_is_ignore { bb.area() } else { bb.union(other) };
    if union <= 0. {
        return 0.;
    }
    inter / union
}

/// Overlap scores of `bb` against each row of `others`, using the row
/// ignore flags as per-pair weighting.
pub fn overlap_areas(bb: &BbBox, others: &[GtRow]) -> Vec<f32> {
    others
        .iter()
        .map(|o| overlap_area(bb, &o.bb, o.ignore))
        .collect()
}
