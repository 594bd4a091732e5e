//! Layout configuration.
//!
//! Hosts usually keep the defaults and only pass a page width. The whole
//! struct deserializes from JSON so mobile and web shells can tune it
//! without a rebuild.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};
use crate::model::TimeSignature;

pub const DEFAULT_BEATS_PER_MEASURE: i32 = 4;
pub const DEFAULT_BEAT_TYPE: i32 = 4;
pub const DEFAULT_PAGE_WIDTH: f64 = 820.0;
pub const DEFAULT_VIEWPORT_RATIO: f64 = 0.9;
pub const DEFAULT_ROW_HEIGHT: f64 = 180.0;
pub const DEFAULT_ROW_TOP: f64 = 40.0;
pub const DEFAULT_ROW_INSET: f64 = 10.0;
pub const DEFAULT_TIMELINE_SPACING: f64 = 100.0;
pub const DEFAULT_TIMELINE_PADDING: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Chords per measure (one quarter each)
    pub beats_per_measure: i32,
    /// Denominator shown in the time signature
    pub beat_type: i32,
    /// Page width used when the host does not supply one
    pub default_page_width: f64,
    /// Fraction of the viewport the score page occupies
    pub viewport_ratio: f64,
    /// Vertical space per row (one measure per row)
    pub row_height: f64,
    /// Y offset of the first row's staff
    pub row_top: f64,
    /// Horizontal inset on each side of a row
    pub row_inset: f64,
    /// Distance between consecutive timeline entries
    pub timeline_spacing: f64,
    /// Extra height below the last timeline entry
    pub timeline_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            beats_per_measure: DEFAULT_BEATS_PER_MEASURE,
            beat_type: DEFAULT_BEAT_TYPE,
            default_page_width: DEFAULT_PAGE_WIDTH,
            viewport_ratio: DEFAULT_VIEWPORT_RATIO,
            row_height: DEFAULT_ROW_HEIGHT,
            row_top: DEFAULT_ROW_TOP,
            row_inset: DEFAULT_ROW_INSET,
            timeline_spacing: DEFAULT_TIMELINE_SPACING,
            timeline_padding: DEFAULT_TIMELINE_PADDING,
        }
    }
}

impl LayoutConfig {
    /// Parse a (possibly partial) JSON config; missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_beats_per_measure(mut self, beats: i32) -> Self {
        self.beats_per_measure = beats;
        self
    }

    pub fn time_signature(&self) -> TimeSignature {
        TimeSignature {
            beats: self.beats_per_measure,
            beat_type: self.beat_type,
        }
    }

    /// Reject values that would make either view meaningless.
    pub fn validate(&self) -> Result<()> {
        self.validate_score()?;
        self.validate_timeline()
    }

    /// Check only the fields the score page reads.
    pub fn validate_score(&self) -> Result<()> {
        if self.beats_per_measure <= 0 {
            return Err(ScoreError::InvalidMeasureCapacity {
                capacity: self.beats_per_measure,
            });
        }
        if self.beat_type <= 0 {
            return Err(ScoreError::InvalidConfig(format!(
                "beatType must be positive, got {}",
                self.beat_type
            )));
        }
        for (name, value) in [
            ("defaultPageWidth", self.default_page_width),
            ("viewportRatio", self.viewport_ratio),
            ("rowHeight", self.row_height),
        ] {
            if !is_positive(value) {
                return Err(ScoreError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        for (name, value) in [("rowTop", self.row_top), ("rowInset", self.row_inset)] {
            check_non_negative(name, value)?;
        }
        Ok(())
    }

    /// Check only the fields the timeline view reads.
    pub fn validate_timeline(&self) -> Result<()> {
        if !is_positive(self.timeline_spacing) {
            return Err(ScoreError::InvalidSpacing {
                spacing: self.timeline_spacing,
            });
        }
        check_non_negative("timelinePadding", self.timeline_padding)
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScoreError::InvalidConfig(format!(
            "{name} must be zero or positive, got {value}"
        )))
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
