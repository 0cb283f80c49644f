use bbgt::box_ops::SquarifyMode;
use bbgt::common::{Annotation, BbBox, GtRow};
use bbgt::data::{GtConfig, LabelFilter, ValueRange};

mod fixtures;

fn person_bicycle() -> Vec<Annotation> {
    vec![
        Annotation::new("person", BbBox::new(0., 0., 10., 10.)),
        Annotation::new("person", BbBox::new(0., 0., 20., 20.)),
        Annotation::new("bicycle", BbBox::new(0., 0., 20., 20.)),
    ]
}

#[test]
fn height_range_flags_short_people() {
    fixtures::init_logger();
    let config = GtConfig::new().with_height_range([15., f32::INFINITY]);
    let (rows, idx) = bbgt::to_gt(&person_bicycle(), &"person".into(), &config).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(rows[0].to_array(), [0., 0., 10., 10., 1.]);
    assert_eq!(rows[1].to_array(), [0., 0., 20., 20., 0.]);
}

#[test]
fn label_sets_and_any() {
    let recs = person_bicycle();
    let config = GtConfig::default();

    let (rows, idx) = bbgt::to_gt(&recs, &["person", "bicycle"].into(), &config).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(idx, vec![0, 1, 2]);

    let (_, idx) = bbgt::to_gt(&recs, &"bicycle".into(), &config).unwrap();
    assert_eq!(idx, vec![2]);

    let (rows, _) = bbgt::to_gt(&recs, &LabelFilter::any(), &config).unwrap();
    assert_eq!(rows.len(), 3);

    let (rows, idx) = bbgt::to_gt(&recs, &"dog".into(), &config).unwrap();
    assert!(rows.is_empty() && idx.is_empty());
}

#[test]
fn stored_ignore_flag_is_kept() {
    let recs = vec![Annotation::new("person", BbBox::new(0., 0., 10., 10.)).with_ignore(true)];
    let (rows, _) = bbgt::to_gt(&recs, &"person".into(), &GtConfig::default()).unwrap();
    assert!(rows[0].ignore);
}

#[test]
fn range_endpoints_are_inclusive() {
    let recs = vec![Annotation::new("person", BbBox::new(0., 0., 10., 20.))];
    let label: LabelFilter = "person".into();

    let configs = [
        GtConfig::new().with_height_range([20., 20.]),
        GtConfig::new().with_width_range([0., 10.]),
        GtConfig::new().with_area_range([200., 200.]),
        GtConfig::new().with_aspect_ratio_range([0.5, 0.5]),
        GtConfig::new().with_visibility_range([1., 1.]),
    ];
    for config in configs {
        let (rows, _) = bbgt::to_gt(&recs, &label, &config).unwrap();
        assert!(!rows[0].ignore, "{:?}", config);
    }

    let (rows, _) = bbgt::to_gt(&recs, &label, &GtConfig::new().with_height_range([20.5, 30.])).unwrap();
    assert!(rows[0].ignore);
    let (rows, _) = bbgt::to_gt(&recs, &label, &GtConfig::new().with_aspect_ratio_range([0., 0.4])).unwrap();
    assert!(rows[0].ignore);
}

#[test]
fn zero_size_box_is_flagged_by_default() {
    // 0 / 0 aspect ratio is NaN, which no range contains
    let mut recs = bbgt::create(2);
    recs[1].bb = BbBox::new(0., 0., 4., 8.);
    let (rows, idx) = bbgt::to_gt(&recs, &LabelFilter::any(), &GtConfig::default()).unwrap();
    assert_eq!(idx, vec![0, 1]);
    assert!(rows[0].ignore);
    assert!(!rows[1].ignore);
}

#[test]
fn visible_fraction_edge_cases() {
    let bb = BbBox::new(0., 0., 10., 20.);

    // not occluded: whatever the stored visible box says
    let mut rec = Annotation::new("person", bb);
    rec.visible_bb = BbBox::new(0., 0., 1., 1.);
    assert_eq!(rec.visible_fraction(), 1.);

    let rec = Annotation::new("person", bb).with_occlusion(BbBox::default());
    assert_eq!(rec.visible_fraction(), 1.);

    let rec = Annotation::new("person", bb).with_occlusion(bb);
    assert_eq!(rec.visible_fraction(), 0.);

    let rec = Annotation::new("person", bb).with_occlusion(BbBox::new(0., 0., 10., 5.));
    assert_eq!(rec.visible_fraction(), 0.25);

    // degenerate: zero box and zero visible box count as fully visible
    let rec = Annotation::new("person", BbBox::default()).with_occlusion(BbBox::default());
    assert_eq!(rec.visible_fraction(), 1.);
}

#[test]
fn visibility_range_flags_heavily_occluded() {
    let bb = BbBox::new(0., 0., 10., 20.);
    let recs = vec![
        Annotation::new("person", bb).with_occlusion(BbBox::new(0., 0., 10., 5.)),
        Annotation::new("person", bb).with_occlusion(BbBox::new(0., 0., 10., 15.)),
        Annotation::new("person", bb).with_occlusion(bb),
    ];
    let config = GtConfig::new().with_visibility_range([0.5, 1.]);
    let (rows, _) = bbgt::to_gt(&recs, &"person".into(), &config).unwrap();
    let flags: Vec<bool> = rows.iter().map(|r| r.ignore).collect();
    assert_eq!(flags, vec![true, false, true]);
}

#[test]
fn ignore_labels_are_kept_and_flagged() {
    let recs = vec![
        Annotation::new("person", BbBox::new(0., 0., 10., 10.)),
        Annotation::new("people", BbBox::new(5., 5., 40., 20.)),
        Annotation::new("bicycle", BbBox::new(0., 0., 10., 10.)),
    ];
    let config = GtConfig::new().with_ignore_labels(&["people"]);
    let (rows, idx) = bbgt::to_gt(&recs, &"person".into(), &config).unwrap();
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(rows[1], GtRow::new(BbBox::new(5., 5., 40., 20.), true));
}

#[test]
fn position_ranges_check_both_edges() {
    let recs = vec![
        Annotation::new("person", BbBox::new(10., 10., 10., 10.)),
        Annotation::new("person", BbBox::new(95., 10., 10., 10.)),
        Annotation::new("person", BbBox::new(10., -5., 10., 10.)),
    ];
    let config = GtConfig::new()
        .with_x_range([0., 100.])
        .with_y_range(ValueRange::new(0., 100.));
    let (rows, _) = bbgt::to_gt(&recs, &"person".into(), &config).unwrap();
    let flags: Vec<bool> = rows.iter().map(|r| r.ignore).collect();
    assert_eq!(flags, vec![false, true, true]);
}

#[test]
fn squarify_applies_to_kept_rows_only() {
    let recs = vec![
        Annotation::new("person", BbBox::new(0., 0., 10., 20.)),
        Annotation::new("person", BbBox::new(0., 0., 10., 20.)).with_ignore(true),
    ];
    let config = GtConfig::new().with_squarify(SquarifyMode::Expand, 1.);
    let (rows, _) = bbgt::to_gt(&recs, &"person".into(), &config).unwrap();
    assert_eq!(rows[0].bb, BbBox::new(-5., 0., 20., 20.));
    assert_eq!(rows[1].bb, BbBox::new(0., 0., 10., 20.));
}

#[test]
fn config_from_json() {
    let config = GtConfig::from_json_str(
        r#"{ "height_range": { "min": 50 }, "ignore_labels": ["people"], "squarify": ["expand", 0.41] }"#,
    )
    .unwrap();
    assert_eq!(config.height_range, ValueRange::new(50., f32::INFINITY));
    assert_eq!(config.width_range, ValueRange::default());
    assert_eq!(config.ignore_labels, vec!["people".to_string()]);
    assert_eq!(config.squarify, Some((SquarifyMode::Expand, 0.41)));

    assert!(GtConfig::from_json_str("{ \"height_range\": 3 }").is_err());
}

#[test]
fn config_survives_json_round_trip() {
    let config = GtConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GtConfig::from_json_str(&json).unwrap(), config);

    let config = GtConfig::new()
        .with_height_range([50., f32::INFINITY])
        .with_x_range([0., f32::INFINITY])
        .with_squarify(SquarifyMode::Shrink, 0.5);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GtConfig::from_json_str(&json).unwrap(), config);
}
