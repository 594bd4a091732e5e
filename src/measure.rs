//! Measure layout — groups predictions into fixed-capacity measures and
//! sizes the score page.
//!
//! One measure is drawn per row, so the page height is simply the row
//! height times the number of measures. Under-full measures are padded with
//! rests that always follow the real chords.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::{Result, ScoreError};
use crate::lexicon;
use crate::model::{PredictionEvent, TimeSignature};

/// A contiguous run of predictions laid out as one measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure<'a> {
    /// 0-based measure (and row) index
    pub index: usize,
    /// Beats per measure
    pub capacity: usize,
    /// The predictions placed in this measure, in input order
    pub events: &'a [PredictionEvent],
    /// Rest slots appended after the events
    pub padding: usize,
}

impl<'a> Measure<'a> {
    /// Total visible accidentals across the measure's chords.
    pub fn accidental_count(&self) -> usize {
        self.events
            .iter()
            .filter_map(|e| lexicon::lookup(&e.label))
            .map(|s| s.accidental_count())
            .sum()
    }

    pub fn is_full(&self) -> bool {
        self.padding == 0
    }
}

/// Measures plus page geometry for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreLayout<'a> {
    pub measures: Vec<Measure<'a>>,
    pub page_width: f64,
    pub page_height: f64,
    pub row_height: f64,
    pub row_top: f64,
    pub row_inset: f64,
    pub time_signature: TimeSignature,
}

impl<'a> ScoreLayout<'a> {
    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    /// Y offset of the staff for row `index`.
    pub fn row_y(&self, index: usize) -> f64 {
        self.row_top + index as f64 * self.row_height
    }

    /// Usable width of every row.
    pub fn row_width(&self) -> f64 {
        (self.page_width - 2.0 * self.row_inset).max(0.0)
    }
}

/// Split `events` into measures of `capacity` beats.
///
/// Chunks keep the input order and only the last one may be short; its
/// remaining beats become rest padding. `capacity <= 0` is a configuration
/// error and is rejected before anything is built.
///
/// # Examples
/// ```
/// use chordscore::{layout_measures, PredictionEvent};
///
/// let events: Vec<_> = ["C", "F", "G", "C", "Am"]
///     .iter()
///     .enumerate()
///     .map(|(i, l)| PredictionEvent::new(i as f64, *l))
///     .collect();
///
/// let measures = layout_measures(&events, 4).unwrap();
/// assert_eq!(measures.len(), 2);
/// assert_eq!(measures[1].events.len(), 1);
/// assert_eq!(measures[1].padding, 3);
/// ```
pub fn layout_measures(events: &[PredictionEvent], capacity: i32) -> Result<Vec<Measure<'_>>> {
    if capacity <= 0 {
        return Err(ScoreError::InvalidMeasureCapacity { capacity });
    }
    let capacity = capacity as usize;

    Ok(events
        .chunks(capacity)
        .enumerate()
        .map(|(index, chunk)| Measure {
            index,
            capacity,
            events: chunk,
            padding: capacity - chunk.len(),
        })
        .collect())
}

/// Lay out the whole score page.
///
/// `page_width` is a presentation concern supplied by the host; `None` or a
/// non-positive value selects the configured default width.
pub fn layout_score<'a>(
    events: &'a [PredictionEvent],
    config: &LayoutConfig,
    page_width: Option<f64>,
) -> Result<ScoreLayout<'a>> {
    config.validate_score()?;

    let page_width = match page_width {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => config.default_page_width,
    };

    let measures = layout_measures(events, config.beats_per_measure)?;
    let page_height = config.row_height * measures.len() as f64;

    log::debug!(
        "laid out {} predictions into {} measures ({:.0}x{:.0})",
        events.len(),
        measures.len(),
        page_width,
        page_height
    );

    Ok(ScoreLayout {
        measures,
        page_width,
        page_height,
        row_height: config.row_height,
        row_top: config.row_top,
        row_inset: config.row_inset,
        time_signature: config.time_signature(),
    })
}

/// Page width for a viewport, using the configured viewport ratio.
pub fn page_width_for_viewport(viewport_width: f64, config: &LayoutConfig) -> f64 {
    viewport_width * config.viewport_ratio
}
