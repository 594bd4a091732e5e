//! chordscore — lays out chord predictions as a music-notation score and
//! as a chronological timeline.
//!
//! The input is the ordered list of `{time, label, audioUrl?}` predictions
//! produced by a chord-recognition service. The crate resolves each chord
//! symbol to a spelling, groups chords into measures, and hands an abstract
//! instruction stream to a notation surface. A reference SVG surface is
//! included for hosts that just want a picture.
//!
//! # Example
//! ```
//! use chordscore::{parse_predictions, layout_score, layout_timeline, emit, LayoutConfig};
//!
//! let json = r#"{"predictions": [
//!     {"time": 0.0, "label": "C"},
//!     {"time": 1.02, "label": "Am"},
//!     {"time": 2.5, "label": "G7"}
//! ]}"#;
//! let events = parse_predictions(json).unwrap();
//!
//! let score = layout_score(&events, &LayoutConfig::default(), Some(600.0)).unwrap();
//! assert_eq!(score.measures.len(), 1);
//! assert_eq!(score.measures[0].padding, 1);
//! let instructions = emit(&score);
//! assert_eq!(instructions.len(), 1 + 1 + 3 + 1 + 1);
//!
//! let timeline = layout_timeline(&events, 100.0).unwrap();
//! assert_eq!(timeline.positions[1].time_label, "00:01.020");
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexicon;
pub mod measure;
pub mod model;
pub mod notation;
pub mod playback;
pub mod renderer;
pub mod timeline;

#[cfg(target_os = "android")]
pub mod android;

use serde::Deserialize;

pub use config::LayoutConfig;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink, NullSink};
pub use error::{Result, ScoreError};
pub use lexicon::{lookup, resolve, resolve_with};
pub use measure::{layout_measures, layout_score, page_width_for_viewport, Measure, ScoreLayout};
pub use model::*;
pub use notation::{draw, emit, emit_with, NotationSurface, RenderInstruction};
pub use playback::{ClipRegistry, PlaybackController, PlaybackState};
pub use renderer::{render_score_to_svg, render_score_to_svg_with, SvgSurface};
pub use timeline::{
    format_time_label, layout_timeline, layout_timeline_with, Side, TimelineLayout,
    TimelinePolicy, TimelinePosition,
};

/// Either the service's response envelope or a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictionPayload {
    Envelope { predictions: Vec<PredictionEvent> },
    List(Vec<PredictionEvent>),
}

/// Decode predictions from JSON.
///
/// Accepts `{"predictions": [...]}` as returned by the recognition service,
/// or a bare array. Order is preserved as received. Events with a negative
/// or non-finite `time` are rejected.
pub fn parse_predictions(json: &str) -> Result<Vec<PredictionEvent>> {
    let events = match serde_json::from_str::<PredictionPayload>(json)? {
        PredictionPayload::Envelope { predictions } => predictions,
        PredictionPayload::List(events) => events,
    };

    for (index, event) in events.iter().enumerate() {
        if !event.time.is_finite() {
            return Err(ScoreError::InvalidEvent {
                index,
                reason: format!("time {} is not finite", event.time),
            });
        }
        if event.time < 0.0 {
            return Err(ScoreError::InvalidEvent {
                index,
                reason: format!("time {} is negative", event.time),
            });
        }
    }

    log::debug!("decoded {} predictions", events.len());
    Ok(events)
}

/// Decode predictions and render the score view to SVG.
///
/// `page_width` sets the SVG width in user units. Pass `None` to use the
/// configured default.
pub fn render_predictions_to_svg(
    json: &str,
    config: &LayoutConfig,
    page_width: Option<f64>,
) -> Result<String> {
    let events = parse_predictions(json)?;
    let layout = layout_score(&events, config, page_width)?;
    Ok(render_score_to_svg(&layout))
}

/// Decode predictions and lay out the timeline view as JSON.
pub fn timeline_json(json: &str, spacing_px: f64, config: &LayoutConfig) -> Result<String> {
    let events = parse_predictions(json)?;
    let timeline = layout_timeline_with(
        &events,
        TimelinePolicy::IndexSpaced { spacing_px },
        config.timeline_padding,
    )?;
    Ok(serde_json::to_string(&timeline)?)
}

/// Decode predictions and return the notation instruction stream as JSON,
/// for hosts that drive their own engraver.
pub fn instructions_json(json: &str, config: &LayoutConfig, page_width: Option<f64>) -> Result<String> {
    let events = parse_predictions(json)?;
    let layout = layout_score(&events, config, page_width)?;
    Ok(serde_json::to_string(&emit(&layout))?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Read a C string argument, `None` for null or invalid UTF-8.
unsafe fn c_str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(result: Result<String>) -> *mut c_char {
    match result {
        Ok(s) => CString::new(s).unwrap_or_default().into_raw(),
        Err(e) => {
            log::warn!("chordscore FFI call failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render predictions JSON to an SVG score and return it as a C string.
/// The caller must free the returned string with `chordscore_free_string`.
///
/// `page_width` sets the SVG width in user units. Pass 0.0 to use the default.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordscore_render_score(
    json: *const c_char,
    page_width: f64,
) -> *mut c_char {
    let Some(json) = (unsafe { c_str_arg(json) }) else {
        return std::ptr::null_mut();
    };
    let pw = if page_width > 0.0 { Some(page_width) } else { None };
    into_c_string(render_predictions_to_svg(json, &LayoutConfig::default(), pw))
}

/// Lay out predictions JSON as a timeline and return the layout as JSON.
/// The caller must free the returned string with `chordscore_free_string`.
///
/// `spacing_px` must be positive; pass 0.0 to use the default spacing.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordscore_layout_timeline(
    json: *const c_char,
    spacing_px: f64,
) -> *mut c_char {
    let Some(json) = (unsafe { c_str_arg(json) }) else {
        return std::ptr::null_mut();
    };
    let config = LayoutConfig::default();
    let spacing = if spacing_px > 0.0 { spacing_px } else { config.timeline_spacing };
    into_c_string(timeline_json(json, spacing, &config))
}

/// Free a string previously returned by chordscore functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordscore function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordscore_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
