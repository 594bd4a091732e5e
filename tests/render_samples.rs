//! Rendering tests — lay out the sample predictions and render to SVG.

use chordscore::{
    render_predictions_to_svg, render_score_to_svg_with, instructions_json, layout_score,
    parse_predictions, CollectingSink, LayoutConfig,
};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

#[test]
fn render_fixture_svg() {
    let svg = render_predictions_to_svg(&fixture("predictions.json"), &LayoutConfig::default(), Some(720.0))
        .expect("Failed to render fixture");

    // Basic SVG structure checks
    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert!(svg.contains(r#"viewBox="0 0 720 540""#), "three rows of 180");

    // Should have staff lines, noteheads, one clef
    assert!(svg.contains("<line"), "SVG should contain lines (staff lines)");
    assert!(svg.contains("<ellipse"), "SVG should contain ellipses (noteheads)");
    assert_eq!(svg.matches('\u{1D11E}').count(), 1, "clef on the first row only");

    // Write to file for visual inspection
    let out = output_dir().join("predictions.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered predictions.svg ({} bytes)", svg.len());
    println!("  Output: {}", out.display());
}

#[test]
fn render_reports_unknown_chords() {
    let events = parse_predictions(&fixture("predictions.json")).unwrap();
    let layout = layout_score(&events, &LayoutConfig::default(), None).unwrap();
    let sink = CollectingSink::new();
    let svg = render_score_to_svg_with(&layout, &sink);
    assert!(svg.contains("<svg"));
    assert_eq!(sink.len(), 1);
}

#[test]
fn custom_meter_changes_slots_and_header() {
    let config = LayoutConfig::from_json(r#"{"beatsPerMeasure": 3}"#).unwrap();
    let svg = render_predictions_to_svg(
        r#"[{"time": 0, "label": "C"}, {"time": 1, "label": "F"}, {"time": 2, "label": "G"}, {"time": 3, "label": "C"}]"#,
        &config,
        Some(500.0),
    )
    .unwrap();
    assert!(svg.contains(">3</text>"), "time signature numerator");
    assert!(svg.contains(r#"viewBox="0 0 500 360""#));
}

#[test]
fn instruction_stream_json() {
    let json = instructions_json(r#"[{"time": 0, "label": "D"}]"#, &LayoutConfig::default(), Some(400.0))
        .unwrap();
    assert!(json.starts_with(r#"[{"op":"beginPage","width":400.0,"height":180.0"#), "{json}");
    assert!(json.contains(r#""accidentals":[[1,"sharp"]]"#), "{json}");
    assert!(json.contains(r#"{"letter":"F","octave":4}"#), "{json}");
    assert_eq!(json.matches(r#"{"op":"placeRest","duration":"quarter"}"#).count(), 3);
    assert!(json.ends_with(r#"{"op":"endRow"}]"#));
}

#[test]
fn empty_predictions_render_placeholder() {
    let svg = render_predictions_to_svg(r#"{"predictions": []}"#, &LayoutConfig::default(), None).unwrap();
    assert!(svg.contains("No chords to display"));
}
