//! Chord, rest, accidental, and ledger line rendering.

use crate::model::{Accidental, Pitch};
use super::constants::*;
use super::svg_builder::SvgBuilder;

/// Y coordinate of a pitch on a treble staff whose top line is at `staff_y`.
pub(super) fn pitch_to_staff_y(pitch: Pitch, staff_y: f64) -> f64 {
    staff_y + (TOP_LINE_STEP - pitch.diatonic_step()) as f64 * HALF_SPACE
}

// ── Chord rendering ─────────────────────────────────────────────────

/// Draw a quarter-note chord: noteheads, ledger lines, attached
/// accidentals, and one stem whose direction follows the chord's
/// average position against the middle line.
pub(super) fn render_chord(
    svg: &mut SvgBuilder,
    x: f64,
    staff_y: f64,
    pitches: &[Pitch],
    accidentals: &[(usize, Accidental)],
) {
    if pitches.is_empty() {
        return;
    }

    let ys: Vec<f64> = pitches.iter().map(|p| pitch_to_staff_y(*p, staff_y)).collect();
    for &y in &ys {
        render_ledger_lines(svg, x, y, staff_y);
    }
    for &y in &ys {
        svg.notehead(x, y);
    }

    // Alternate two columns so stacked accidentals a third apart don't collide.
    for (column, &(slot, accidental)) in accidentals.iter().enumerate() {
        if let Some(&y) = ys.get(slot) {
            let ax = x - ACCIDENTAL_OFFSET - (column % 2) as f64 * 8.0;
            render_accidental(svg, ax, y, accidental);
        }
    }

    let top = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let bottom = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean_step = pitches.iter().map(|p| p.diatonic_step() as f64).sum::<f64>() / pitches.len() as f64;
    let stem_up = mean_step < MIDDLE_LINE_STEP as f64;

    if stem_up {
        let sx = x + NOTEHEAD_RX - 0.6;
        svg.line(sx, bottom, sx, top - STEM_LENGTH, NOTE_COLOR, STEM_WIDTH);
    } else {
        let sx = x - NOTEHEAD_RX + 0.6;
        svg.line(sx, top, sx, bottom + STEM_LENGTH, NOTE_COLOR, STEM_WIDTH);
    }
}

// ── Rest rendering ──────────────────────────────────────────────────

pub(super) fn render_quarter_rest(svg: &mut SvgBuilder, x: f64, staff_y: f64) {
    let y = staff_y;
    let d = format!(
        "M{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
        x - 3.0, y + 8.0,
        x + 3.0, y + 15.0,
        x - 2.0, y + 21.0,
        x + 3.0, y + 27.0,
        x - 4.0, y + 24.0,
        x - 4.0, y + 31.0,
        x + 1.0, y + 33.0,
    );
    svg.path(&d, "none", REST_COLOR, 2.2);
}

// ── Accidental rendering ────────────────────────────────────────────

fn render_accidental(svg: &mut SvgBuilder, x: f64, y: f64, accidental: Accidental) {
    let glyph = match accidental {
        Accidental::Sharp => "\u{266F}",
        Accidental::Flat => "\u{266D}",
        Accidental::Natural => "\u{266E}",
        Accidental::DoubleSharp => "\u{1D12A}",
        Accidental::None => return,
    };
    svg.text(x, y + 5.0, glyph, 16.0, "normal", NOTE_COLOR, "middle");
}

// ── Ledger lines ────────────────────────────────────────────────────

fn render_ledger_lines(svg: &mut SvgBuilder, x: f64, note_y: f64, staff_y: f64) {
    let top = staff_y;
    let bottom = staff_y + STAFF_HEIGHT;

    if note_y < top {
        let mut y = top - STAFF_LINE_SPACING;
        while y >= note_y - 1.0 {
            svg.line(
                x - NOTEHEAD_RX - LEDGER_LINE_EXTEND,
                y,
                x + NOTEHEAD_RX + LEDGER_LINE_EXTEND,
                y,
                STAFF_COLOR, LEDGER_LINE_WIDTH,
            );
            y -= STAFF_LINE_SPACING;
        }
    }

    if note_y > bottom {
        let mut y = bottom + STAFF_LINE_SPACING;
        while y <= note_y + 1.0 {
            svg.line(
                x - NOTEHEAD_RX - LEDGER_LINE_EXTEND,
                y,
                x + NOTEHEAD_RX + LEDGER_LINE_EXTEND,
                y,
                STAFF_COLOR, LEDGER_LINE_WIDTH,
            );
            y += STAFF_LINE_SPACING;
        }
    }
}
