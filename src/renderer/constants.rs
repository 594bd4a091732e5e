//! Shared constants for the SVG surface (all in SVG user units).

// ── Staff dimensions ────────────────────────────────────────────────
pub(super) const STAFF_LINE_SPACING: f64 = 10.0; // distance between staff lines
pub(super) const HALF_SPACE: f64 = STAFF_LINE_SPACING / 2.0; // one diatonic step
pub(super) const STAFF_HEIGHT: f64 = 40.0; // 5 lines, 4 spaces

/// Diatonic step of the treble staff's top line (F5).
pub(super) const TOP_LINE_STEP: i32 = 5 * 7 + 3;
/// Diatonic step of the treble staff's middle line (B4).
pub(super) const MIDDLE_LINE_STEP: i32 = 4 * 7 + 6;

// ── Prefix widths ───────────────────────────────────────────────────
pub(super) const CLEF_SPACE: f64 = 32.0; // horizontal space for clef at row start
pub(super) const TIME_SIG_SPACE: f64 = 24.0;
pub(super) const ROW_LEAD_IN: f64 = 12.0; // gap before the first slot on rows without clef

// ── Note dimensions ─────────────────────────────────────────────────
pub(super) const NOTEHEAD_RX: f64 = 5.5; // notehead ellipse x-radius
pub(super) const NOTEHEAD_RY: f64 = 4.0; // notehead ellipse y-radius
pub(super) const STEM_LENGTH: f64 = 30.0;
pub(super) const STEM_WIDTH: f64 = 1.2;
pub(super) const BARLINE_WIDTH: f64 = 1.0;
pub(super) const STAFF_LINE_WIDTH: f64 = 0.8;
pub(super) const LEDGER_LINE_WIDTH: f64 = 0.8;
pub(super) const LEDGER_LINE_EXTEND: f64 = 5.0;
pub(super) const ACCIDENTAL_OFFSET: f64 = 14.0; // accidental glyph left of the notehead

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const NOTE_COLOR: &str = "#1a1a1a";
pub(super) const STAFF_COLOR: &str = "#555555";
pub(super) const BARLINE_COLOR: &str = "#333333";
pub(super) const REST_COLOR: &str = "#1a1a1a";
