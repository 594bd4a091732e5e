//! SVG surface — a reference [`NotationSurface`] that turns the notation
//! instruction stream into a self-contained SVG string.
//!
//! The surface owns only drawing concerns (staff lines, glyphs, stems,
//! slot spacing inside a row). Everything musical arrives in the stream.

mod constants;
mod svg_builder;
mod notes;
mod staff;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::measure::ScoreLayout;
use crate::model::TimeSignature;
use crate::notation::{self, NotationSurface, RenderInstruction};
use constants::*;
use notes::{render_chord, render_quarter_rest};
use staff::*;
use svg_builder::{SvgBuilder, empty_svg};

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a laid-out score to SVG, logging unknown chords at warn level.
pub fn render_score_to_svg(layout: &ScoreLayout<'_>) -> String {
    render_score_to_svg_with(layout, &LogSink)
}

/// Render a laid-out score to SVG, reporting unknown chords to `sink`.
pub fn render_score_to_svg_with(layout: &ScoreLayout<'_>, sink: &dyn DiagnosticSink) -> String {
    let instructions = notation::emit_with(layout, sink);
    let mut surface = SvgSurface::new();
    notation::draw(&mut surface, &instructions);
    surface.finish()
}

// ═══════════════════════════════════════════════════════════════════════
// Surface
// ═══════════════════════════════════════════════════════════════════════

/// Row being drawn: one measure on one staff.
struct RowState {
    staff_y: f64,
    x_end: f64,
    content_x: f64,
    slot_width: f64,
    next_slot: usize,
}

#[derive(Default)]
pub struct SvgSurface {
    svg: Option<SvgBuilder>,
    page_width: f64,
    time: Option<TimeSignature>,
    row: Option<RowState>,
    rows_drawn: usize,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the pass and return the SVG. A pass without rows yields a
    /// small placeholder image.
    pub fn finish(self) -> String {
        match self.svg {
            Some(svg) if self.rows_drawn > 0 => svg.build(),
            _ => empty_svg("No chords to display"),
        }
    }

    fn begin_row(&mut self, y_offset: f64, width: f64, has_clef_and_meter: bool) {
        let Some(svg) = self.svg.as_mut() else {
            return;
        };

        // Rows are inset symmetrically on the page.
        let x_start = ((self.page_width - width) / 2.0).max(0.0);
        let x_end = x_start + width;
        svg.open_group("row");
        render_staff_lines(svg, x_start, x_end, y_offset);

        let mut content_x = x_start + ROW_LEAD_IN;
        if has_clef_and_meter {
            render_treble_clef(svg, x_start, y_offset);
            content_x = x_start + CLEF_SPACE;
            if let Some(time) = self.time {
                render_time_signature(svg, content_x, y_offset, &time);
                content_x += TIME_SIG_SPACE;
            }
        }

        let slots = self.time.map(|t| t.beats.max(1) as usize).unwrap_or(1);
        let slot_width = ((x_end - content_x) / slots as f64).max(0.0);
        self.row = Some(RowState {
            staff_y: y_offset,
            x_end,
            content_x,
            slot_width,
            next_slot: 0,
        });
        self.rows_drawn += 1;
    }

    /// X of the next free slot in the current row.
    fn take_slot(&mut self) -> Option<(f64, f64)> {
        let row = self.row.as_mut()?;
        let x = row.content_x + (row.next_slot as f64 + 0.5) * row.slot_width;
        row.next_slot += 1;
        Some((x, row.staff_y))
    }
}

impl NotationSurface for SvgSurface {
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn apply(&mut self, instruction: &RenderInstruction) {
        match instruction {
            RenderInstruction::BeginPage { width, height, time_signature } => {
                self.svg = Some(SvgBuilder::new(*width, *height));
                self.page_width = *width;
                self.time = Some(*time_signature);
                self.row = None;
                self.rows_drawn = 0;
            }
            RenderInstruction::BeginRow { y_offset, width, has_clef_and_meter, .. } => {
                self.begin_row(*y_offset, *width, *has_clef_and_meter);
            }
            RenderInstruction::PlaceNote { pitches, accidentals, .. } => {
                if let Some((x, staff_y)) = self.take_slot() {
                    if let Some(svg) = self.svg.as_mut() {
                        render_chord(svg, x, staff_y, pitches, accidentals);
                    }
                }
            }
            RenderInstruction::PlaceRest { .. } => {
                if let Some((x, staff_y)) = self.take_slot() {
                    if let Some(svg) = self.svg.as_mut() {
                        render_quarter_rest(svg, x, staff_y);
                    }
                }
            }
            RenderInstruction::EndRow => {
                if let (Some(row), Some(svg)) = (self.row.take(), self.svg.as_mut()) {
                    render_barline(svg, row.x_end, row.staff_y);
                    svg.close_group();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::diagnostics::NullSink;
    use crate::measure::layout_score;
    use crate::model::PredictionEvent;

    fn events(labels: &[&str]) -> Vec<PredictionEvent> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| PredictionEvent::new(i as f64, *l))
            .collect()
    }

    #[test]
    fn renders_one_row_group_per_measure() {
        let evs = events(&["C", "G", "Am", "F", "Dm"]);
        let layout = layout_score(&evs, &LayoutConfig::default(), Some(600.0)).unwrap();
        let svg = render_score_to_svg_with(&layout, &NullSink);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 600 360""#), "{svg}");
        assert_eq!(svg.matches(r#"<g class="row">"#).count(), 2);
        // 5 chords of 3 notes
        assert_eq!(svg.matches("<ellipse").count(), 15);
        // clef only once
        assert_eq!(svg.matches('\u{1D11E}').count(), 1);
    }

    #[test]
    fn padding_draws_rests() {
        let evs = events(&["C"]);
        let layout = layout_score(&evs, &LayoutConfig::default(), None).unwrap();
        let svg = render_score_to_svg_with(&layout, &NullSink);
        assert_eq!(svg.matches(r##"fill="none" stroke="#1a1a1a" stroke-width="2.2""##).count(), 3);
    }

    #[test]
    fn empty_score_renders_placeholder() {
        let layout = layout_score(&[], &LayoutConfig::default(), None).unwrap();
        let svg = render_score_to_svg(&layout);
        assert!(svg.contains("No chords to display"));
    }

    #[test]
    fn clear_discards_previous_pass() {
        let evs = events(&["C", "G"]);
        let layout = layout_score(&evs, &LayoutConfig::default(), None).unwrap();
        let stream = notation::emit_with(&layout, &NullSink);

        let mut surface = SvgSurface::new();
        notation::draw(&mut surface, &stream);
        notation::draw(&mut surface, &stream);
        let svg = surface.finish();
        assert_eq!(svg.matches(r#"<g class="row">"#).count(), 1);
    }

    #[test]
    fn dark_ink_on_transparent_page() {
        let evs = events(&["C"]);
        let layout = layout_score(&evs, &LayoutConfig::default(), None).unwrap();
        let svg = render_score_to_svg_with(&layout, &NullSink);
        assert!(!svg.contains("<rect"), "no background fill");
        assert!(svg.contains(&format!(r#"fill="{NOTE_COLOR}""#)), "{svg}");
    }
}
