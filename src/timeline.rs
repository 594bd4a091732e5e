//! Timeline layout — vertical placement and time labels for the
//! chronological view.
//!
//! Entries are spaced by index, not by elapsed time, so bursts of fast
//! chord changes stay legible. The time-proportional placement of the
//! earlier timeline view is still available as [`TimelinePolicy::TimeProportional`].

use serde::Serialize;

use crate::config::is_positive;
use crate::error::{Result, ScoreError};
use crate::model::PredictionEvent;

/// Headroom added below the last entry so it is not clipped.
pub const DEFAULT_BASE_PADDING: f64 = crate::config::DEFAULT_TIMELINE_PADDING;

/// Which side of the spine an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// How entries are spread vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimelinePolicy {
    /// `offset = index * spacing_px`
    #[serde(rename_all = "camelCase")]
    IndexSpaced { spacing_px: f64 },
    /// `offset = time * px_per_second`
    #[serde(rename_all = "camelCase")]
    TimeProportional { px_per_second: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePosition<'a> {
    pub index: usize,
    pub offset_px: f64,
    /// Elapsed time as `mm:ss.mmm`
    pub time_label: String,
    pub side: Side,
    pub chord: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout<'a> {
    pub positions: Vec<TimelinePosition<'a>>,
    pub total_height: f64,
}

impl<'a> TimelineLayout<'a> {
    /// The host should not render a timeline container when this is true.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Index-spaced timeline with the default base padding.
///
/// # Examples
/// ```
/// use chordscore::{layout_timeline, PredictionEvent};
///
/// let events = vec![
///     PredictionEvent::new(0.0, "C"),
///     PredictionEvent::new(0.25, "G"),
///     PredictionEvent::new(65.1234, "Am"),
/// ];
/// let timeline = layout_timeline(&events, 80.0).unwrap();
///
/// let offsets: Vec<f64> = timeline.positions.iter().map(|p| p.offset_px).collect();
/// assert_eq!(offsets, vec![0.0, 80.0, 160.0]);
/// assert_eq!(timeline.positions[2].time_label, "01:05.123");
/// assert_eq!(timeline.total_height, 160.0 + 100.0);
/// ```
pub fn layout_timeline(events: &[PredictionEvent], spacing_px: f64) -> Result<TimelineLayout<'_>> {
    layout_timeline_with(
        events,
        TimelinePolicy::IndexSpaced { spacing_px },
        DEFAULT_BASE_PADDING,
    )
}

/// Lay out the timeline with an explicit policy and base padding.
pub fn layout_timeline_with(
    events: &[PredictionEvent],
    policy: TimelinePolicy,
    base_padding: f64,
) -> Result<TimelineLayout<'_>> {
    let scale = match policy {
        TimelinePolicy::IndexSpaced { spacing_px } => spacing_px,
        TimelinePolicy::TimeProportional { px_per_second } => px_per_second,
    };
    if !is_positive(scale) {
        return Err(ScoreError::InvalidSpacing { spacing: scale });
    }
    if !(base_padding.is_finite() && base_padding >= 0.0) {
        return Err(ScoreError::InvalidConfig(format!(
            "timeline padding must be zero or positive, got {base_padding}"
        )));
    }

    if events.is_empty() {
        return Ok(TimelineLayout {
            positions: Vec::new(),
            total_height: 0.0,
        });
    }

    let positions: Vec<TimelinePosition<'_>> = events
        .iter()
        .enumerate()
        .map(|(index, event)| TimelinePosition {
            index,
            offset_px: match policy {
                TimelinePolicy::IndexSpaced { spacing_px } => index as f64 * spacing_px,
                TimelinePolicy::TimeProportional { px_per_second } => {
                    clamp_seconds(event.time) * px_per_second
                }
            },
            time_label: format_time_label(event.time),
            side: Side::for_index(index),
            chord: &event.label,
            audio_url: event.audio_url.as_deref(),
        })
        .collect();

    let content_height = match policy {
        TimelinePolicy::IndexSpaced { spacing_px } => (events.len() - 1) as f64 * spacing_px,
        TimelinePolicy::TimeProportional { px_per_second } => {
            let song_length = events
                .iter()
                .map(|e| clamp_seconds(e.time))
                .fold(0.0, f64::max);
            song_length * px_per_second
        }
    };

    Ok(TimelineLayout {
        positions,
        total_height: content_height + base_padding,
    })
}

/// Format seconds as `mm:ss.mmm`.
///
/// Milliseconds are truncated, not rounded. Minutes keep growing past 59;
/// there is no hour field. Negative or non-finite input reads as zero.
///
/// # Examples
/// ```
/// use chordscore::timeline::format_time_label;
///
/// assert_eq!(format_time_label(65.1234), "01:05.123");
/// assert_eq!(format_time_label(0.9999), "00:00.999");
/// assert_eq!(format_time_label(3725.5), "62:05.500");
/// ```
pub fn format_time_label(seconds: f64) -> String {
    let total_ms = whole_millis(clamp_seconds(seconds));
    let minutes = total_ms / 60_000;
    let secs = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{minutes:02}:{secs:02}.{millis:03}")
}

/// Largest whole millisecond count `ms` with `ms / 1000 <= seconds`.
///
/// `seconds * 1000` can land on either side of an exact boundary
/// (1.001 gives 1000.999…); the floor is checked against `seconds` itself.
fn whole_millis(seconds: f64) -> u64 {
    let mut ms = (seconds * 1000.0).floor();
    if (ms + 1.0) / 1000.0 <= seconds {
        ms += 1.0;
    } else if ms > 0.0 && ms / 1000.0 > seconds {
        ms -= 1.0;
    }
    ms as u64
}

fn clamp_seconds(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}
