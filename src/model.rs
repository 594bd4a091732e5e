//! Data model for chord predictions and their notation spelling.
//!
//! These structures are the value objects shared by the score and timeline
//! layouts. They are recomputed on every render pass from the prediction
//! sequence the host owns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One recognized chord at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionEvent {
    /// Seconds from the start of the recording
    pub time: f64,
    /// Chord symbol, e.g. "C", "C#m", "Cmaj7"
    pub label: String,
    /// Optional short audio clip for this event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl PredictionEvent {
    pub fn new(time: f64, label: impl Into<String>) -> Self {
        Self {
            time,
            label: label.into(),
            audio_url: None,
        }
    }

    pub fn with_audio(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }
}

/// Natural note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Diatonic index within an octave (C = 0 … B = 6).
    pub fn index(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

/// A notated pitch: letter plus octave (scientific pitch notation, C4 = middle C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub letter: Letter,
    pub octave: u8,
}

impl Pitch {
    pub const fn new(letter: Letter, octave: u8) -> Self {
        Self { letter, octave }
    }

    /// Absolute diatonic step, used for vertical staff placement.
    pub fn diatonic_step(self) -> i32 {
        self.octave as i32 * 7 + self.letter.index()
    }
}

/// Accidental marker attached to one pitch of a spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accidental {
    None,
    Sharp,
    DoubleSharp,
    Flat,
    Natural,
}

impl Accidental {
    /// Text used inside an engraver key such as `C##/5`.
    pub fn key_suffix(self) -> &'static str {
        match self {
            Accidental::None | Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::Flat => "b",
        }
    }

    pub fn is_none(self) -> bool {
        self == Accidental::None
    }
}

/// Resolved pitches and accidentals for a chord symbol.
///
/// Spellings are static table data, so they are `Copy` and never allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChordSpelling {
    pub pitches: &'static [Pitch],
    pub accidentals: &'static [Accidental],
}

impl ChordSpelling {
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// Pitches paired with their accidental, in chord order.
    pub fn notes(&self) -> impl Iterator<Item = (Pitch, Accidental)> + '_ {
        self.pitches.iter().copied().zip(self.accidentals.iter().copied())
    }

    /// Engraver keys in `letter[accidental]/octave` form, e.g. `["D/4", "F#/4", "A/4"]`.
    pub fn keys(&self) -> Vec<String> {
        self.notes()
            .map(|(p, a)| format!("{}{}/{}", p.letter.as_str(), a.key_suffix(), p.octave))
            .collect()
    }

    /// Number of pitches carrying a visible accidental.
    pub fn accidental_count(&self) -> usize {
        self.accidentals.iter().filter(|a| !a.is_none()).count()
    }
}

/// Time signature shown on the first row of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSignature {
    /// Numerator (e.g., 3 in 3/4)
    pub beats: i32,
    /// Denominator (e.g., 4 in 3/4)
    pub beat_type: i32,
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.beats, self.beat_type)
    }
}

/// Note value used by the notation stream. Every chord and rest is a quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationClass {
    #[default]
    Quarter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_json_uses_camel_case() {
        let event: PredictionEvent =
            serde_json::from_str(r#"{"time": 1.5, "label": "Am", "audioUrl": "clip.wav"}"#).unwrap();
        assert_eq!(event.label, "Am");
        assert_eq!(event.audio_url.as_deref(), Some("clip.wav"));

        let bare: PredictionEvent = serde_json::from_str(r#"{"time": 0, "label": "C"}"#).unwrap();
        assert_eq!(bare.audio_url, None);
        assert!(!serde_json::to_string(&bare).unwrap().contains("audioUrl"));
    }

    #[test]
    fn spelling_keys_include_accidentals() {
        const PITCHES: [Pitch; 3] = [
            Pitch::new(Letter::A, 4),
            Pitch::new(Letter::C, 5),
            Pitch::new(Letter::E, 5),
        ];
        const ACCS: [Accidental; 3] = [Accidental::Sharp, Accidental::DoubleSharp, Accidental::Sharp];
        let spelling = ChordSpelling { pitches: &PITCHES, accidentals: &ACCS };
        assert_eq!(spelling.keys(), vec!["A#/4", "C##/5", "E#/5"]);
        assert_eq!(spelling.accidental_count(), 3);
    }

    #[test]
    fn diatonic_step_orders_across_octaves() {
        assert!(Pitch::new(Letter::B, 4).diatonic_step() < Pitch::new(Letter::C, 5).diatonic_step());
        assert_eq!(Pitch::new(Letter::C, 4).diatonic_step(), 28);
    }
}
