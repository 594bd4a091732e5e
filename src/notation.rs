//! Notation emission — turns a [`ScoreLayout`] into an ordered stream of
//! drawing instructions for an external engraver.
//!
//! The stream is the whole hand-off: the core knows nothing about glyph
//! placement, beaming or stems beyond asking the surface to auto-stem.

use serde::Serialize;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::lexicon;
use crate::measure::ScoreLayout;
use crate::model::{Accidental, DurationClass, Pitch, TimeSignature};

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum RenderInstruction {
    #[serde(rename_all = "camelCase")]
    BeginPage {
        width: f64,
        height: f64,
        time_signature: TimeSignature,
    },
    /// One row holds exactly one measure. Only row 0 carries clef and meter.
    #[serde(rename_all = "camelCase")]
    BeginRow {
        index: usize,
        y_offset: f64,
        width: f64,
        has_clef_and_meter: bool,
    },
    #[serde(rename_all = "camelCase")]
    PlaceNote {
        pitches: Vec<Pitch>,
        /// `(pitch slot, marker)` for every slot with a visible accidental
        accidentals: Vec<(usize, Accidental)>,
        duration: DurationClass,
    },
    #[serde(rename_all = "camelCase")]
    PlaceRest { duration: DurationClass },
    EndRow,
}

/// A draw target that consumes the instruction stream.
pub trait NotationSurface {
    /// Discard whatever a previous render pass drew.
    fn clear(&mut self);
    fn apply(&mut self, instruction: &RenderInstruction);
}

/// Emit the instruction stream, logging unknown chords at warn level.
pub fn emit(layout: &ScoreLayout<'_>) -> Vec<RenderInstruction> {
    emit_with(layout, &LogSink)
}

/// Emit the instruction stream, reporting unknown chords to `sink`.
///
/// Per measure: `BeginRow`, one `PlaceNote` per prediction, one `PlaceRest`
/// per padding slot, `EndRow`. Rests never precede a chord in a row.
pub fn emit_with(layout: &ScoreLayout<'_>, sink: &dyn DiagnosticSink) -> Vec<RenderInstruction> {
    let mut out = Vec::with_capacity(
        1 + layout
            .measures
            .iter()
            .map(|m| m.capacity + 2)
            .sum::<usize>(),
    );

    out.push(RenderInstruction::BeginPage {
        width: layout.page_width,
        height: layout.page_height,
        time_signature: layout.time_signature,
    });

    let row_width = layout.row_width();
    for measure in &layout.measures {
        out.push(RenderInstruction::BeginRow {
            index: measure.index,
            y_offset: layout.row_y(measure.index),
            width: row_width,
            has_clef_and_meter: measure.index == 0,
        });

        for event in measure.events {
            let spelling = lexicon::resolve_with(&event.label, sink);
            out.push(RenderInstruction::PlaceNote {
                pitches: spelling.pitches.to_vec(),
                accidentals: attached_accidentals(spelling.accidentals),
                duration: DurationClass::Quarter,
            });
        }
        for _ in 0..measure.padding {
            out.push(RenderInstruction::PlaceRest {
                duration: DurationClass::Quarter,
            });
        }

        out.push(RenderInstruction::EndRow);
    }

    out
}

/// Markers to attach: everything but `None`, explicit naturals included.
fn attached_accidentals(accidentals: &[Accidental]) -> Vec<(usize, Accidental)> {
    accidentals
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, a)| !a.is_none())
        .collect()
}

/// Hand a fresh surface the full instruction stream.
pub fn draw<S: NotationSurface + ?Sized>(surface: &mut S, instructions: &[RenderInstruction]) {
    surface.clear();
    for instruction in instructions {
        surface.apply(instruction);
    }
}
