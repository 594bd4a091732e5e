//! # Error Types
//!
//! Fatal errors raised before any layout output is built. Unknown chord
//! symbols are not errors: the resolver absorbs them and reports a
//! [`Diagnostic`](crate::diagnostics::Diagnostic) instead.
//!
//! ## Error Types
//! - `InvalidMeasureCapacity` - beats per measure is zero or negative
//! - `InvalidSpacing` - timeline spacing is not a positive finite number
//! - `InvalidConfig` - any other rejected `LayoutConfig` value
//! - `InvalidEvent` - a prediction with an unusable timestamp
//! - `Json` - malformed prediction or config JSON

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    /// Measure capacity must be at least one beat.
    ///
    /// # Example
    /// ```
    /// # use chordscore::ScoreError;
    /// let err = ScoreError::InvalidMeasureCapacity { capacity: 0 };
    /// assert_eq!(err.to_string(), "Invalid measure capacity 0: must be a positive number of beats");
    /// ```
    #[error("Invalid measure capacity {capacity}: must be a positive number of beats")]
    InvalidMeasureCapacity { capacity: i32 },

    /// Timeline spacing must be a positive, finite pixel distance.
    #[error("Invalid timeline spacing {spacing}: must be a positive number of pixels")]
    InvalidSpacing { spacing: f64 },

    /// Rejected layout configuration value.
    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),

    /// A prediction that cannot be placed.
    ///
    /// # Example
    /// ```
    /// # use chordscore::ScoreError;
    /// let err = ScoreError::InvalidEvent { index: 2, reason: "time is negative".into() };
    /// assert_eq!(err.to_string(), "Invalid prediction at index 2: time is negative");
    /// ```
    #[error("Invalid prediction at index {index}: {reason}")]
    InvalidEvent { index: usize, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
