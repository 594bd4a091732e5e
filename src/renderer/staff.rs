//! Staff, clef, time signature and barline rendering.

use crate::model::TimeSignature;
use super::constants::*;
use super::svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Staff rendering
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_staff_lines(svg: &mut SvgBuilder, x1: f64, x2: f64, staff_y: f64) {
    for i in 0..5 {
        let y = staff_y + i as f64 * STAFF_LINE_SPACING;
        svg.line(x1, y, x2, y, STAFF_COLOR, STAFF_LINE_WIDTH);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Clef & time signature
// ═══════════════════════════════════════════════════════════════════════

/// Treble clef glyph, curl centred on the G line.
pub(super) fn render_treble_clef(svg: &mut SvgBuilder, x: f64, staff_y: f64) {
    svg.text(x + 12.0, staff_y + 33.0, "\u{1D11E}", 44.0, "normal", NOTE_COLOR, "middle");
}

pub(super) fn render_time_signature(svg: &mut SvgBuilder, x: f64, staff_y: f64, time: &TimeSignature) {
    let cx = x + TIME_SIG_SPACE / 2.0;
    let top_y = staff_y + 2.0 * STAFF_LINE_SPACING - 2.0;
    let bot_y = staff_y + 4.0 * STAFF_LINE_SPACING - 2.0;
    svg.text(cx, top_y, &time.beats.to_string(), 20.0, "bold", NOTE_COLOR, "middle");
    svg.text(cx, bot_y, &time.beat_type.to_string(), 20.0, "bold", NOTE_COLOR, "middle");
}

// ═══════════════════════════════════════════════════════════════════════
// Barlines
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_barline(svg: &mut SvgBuilder, x: f64, staff_y: f64) {
    svg.line(x, staff_y, x, staff_y + STAFF_HEIGHT, BARLINE_COLOR, BARLINE_WIDTH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_has_five_lines() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        render_staff_lines(&mut svg, 0.0, 100.0, 20.0);
        assert_eq!(svg.elements.len(), 5);
        assert!(svg.elements[4].contains(r#"y1="60.0""#));
    }

    #[test]
    fn time_signature_prints_both_numbers() {
        let mut svg = SvgBuilder::new(100.0, 100.0);
        render_time_signature(&mut svg, 0.0, 0.0, &TimeSignature { beats: 3, beat_type: 4 });
        let out = svg.build();
        assert!(out.contains(">3</text>"));
        assert!(out.contains(">4</text>"));
    }
}
