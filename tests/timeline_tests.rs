//! Timeline layout tests — spacing, labels and JSON shape for the
//! chronological view.

use chordscore::{
    layout_timeline, layout_timeline_with, parse_predictions, timeline_json, LayoutConfig,
    ScoreError, Side, TimelinePolicy,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

#[test]
fn fixture_offsets_are_index_spaced() {
    let evs = parse_predictions(&fixture("predictions.json")).unwrap();
    let spacing = 64.0;
    let timeline = layout_timeline(&evs, spacing).unwrap();

    assert_eq!(timeline.positions.len(), evs.len());
    for (i, pos) in timeline.positions.iter().enumerate() {
        assert_eq!(pos.index, i);
        assert_eq!(pos.offset_px, i as f64 * spacing);
        assert_eq!(pos.side, if i % 2 == 0 { Side::Left } else { Side::Right });
        assert_eq!(pos.chord, evs[i].label);
    }
    // the long gap before Cmaj7 does not stretch the layout
    assert_eq!(timeline.positions[8].offset_px - timeline.positions[7].offset_px, spacing);
    assert_eq!(timeline.total_height, 9.0 * spacing + 100.0);
}

#[test]
fn fixture_labels() {
    let evs = parse_predictions(&fixture("predictions.json")).unwrap();
    let timeline = layout_timeline(&evs, 100.0).unwrap();
    let labels: Vec<&str> = timeline.positions.iter().map(|p| p.time_label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "00:00.000", "00:00.487", "00:01.021", "00:01.533", "00:02.090",
            "00:02.610", "00:03.200", "00:03.750", "01:05.123", "01:06.000",
        ]
    );
    assert_eq!(timeline.positions[0].audio_url, Some("clips/0.wav"));
    assert_eq!(timeline.positions[4].audio_url, None);
}

#[test]
fn time_proportional_policy_matches_elapsed_seconds() {
    let evs = parse_predictions(r#"[{"time": 0, "label": "C"}, {"time": 4, "label": "G"}]"#).unwrap();
    let timeline = layout_timeline_with(
        &evs,
        TimelinePolicy::TimeProportional { px_per_second: 100.0 },
        50.0,
    )
    .unwrap();
    assert_eq!(timeline.positions[1].offset_px, 400.0);
    assert_eq!(timeline.total_height, 450.0);
}

#[test]
fn zero_spacing_is_a_configuration_error() {
    let evs = parse_predictions(r#"[{"time": 0, "label": "C"}]"#).unwrap();
    assert!(matches!(
        layout_timeline(&evs, 0.0),
        Err(ScoreError::InvalidSpacing { .. })
    ));
}

#[test]
fn timeline_json_shape() {
    let json = timeline_json(
        r#"[{"time": 1.5, "label": "Am", "audioUrl": "a.wav"}]"#,
        100.0,
        &LayoutConfig::default(),
    )
    .unwrap();
    assert_eq!(
        json,
        r#"{"positions":[{"index":0,"offsetPx":0.0,"timeLabel":"00:01.500","side":"left","chord":"Am","audioUrl":"a.wav"}],"totalHeight":100.0}"#
    );

    let empty = timeline_json("[]", 100.0, &LayoutConfig::default()).unwrap();
    assert_eq!(empty, r#"{"positions":[],"totalHeight":0.0}"#);
}
