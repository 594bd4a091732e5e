//! Chord lexicon — resolves chord symbols into notated pitches.
//!
//! The lexicon is a closed, hand-authored table. Every written root has
//! exactly one spelling: sharp-named roots are spelled with sharps,
//! flat-named roots with flats, and no enharmonic equivalents are derived.
//! Anything outside the table falls back to C major.

use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::model::{Accidental, ChordSpelling, Letter, Pitch};

// Struct literals (not const fn calls) so the slices are promoted to 'static.
macro_rules! spelling {
    ($($letter:ident $octave:literal $acc:ident),+ $(,)?) => {
        ChordSpelling {
            pitches: &[$(Pitch { letter: Letter::$letter, octave: $octave }),+],
            accidentals: &[$(Accidental::$acc),+],
        }
    };
}

/// Spelling used for any symbol the lexicon does not know.
pub const FALLBACK: ChordSpelling = spelling!(C 4 None, E 4 None, G 4 None);

/// Every symbol with a lexicon entry, grouped by quality.
pub const KNOWN_LABELS: &[&str] = &[
    // major
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
    // minor
    "Cm", "C#m", "Dm", "D#m", "Ebm", "Em", "Fm", "F#m", "Gm", "G#m", "Am", "A#m", "Bbm", "Bm",
    // diminished
    "Cdim", "C#dim", "Ddim", "Ebdim",
    // augmented
    "Caug", "C#aug", "Daug",
    // sevenths
    "C7", "Cmaj7", "Cm7", "Cdim7",
];

/// Look up a chord symbol. Exact match only: no trimming, case folding,
/// enharmonic normalization or partial matches.
///
/// # Examples
/// ```
/// use chordscore::lexicon::lookup;
///
/// let d = lookup("D").unwrap();
/// assert_eq!(d.keys(), vec!["D/4", "F#/4", "A/4"]);
///
/// assert!(lookup("Dmaj7").is_none());
/// ```
pub fn lookup(label: &str) -> Option<ChordSpelling> {
    let spelling = match label {
        // Major triads
        "C" => spelling!(C 4 None, E 4 None, G 4 None),
        "C#" => spelling!(C 4 Sharp, E 4 Sharp, G 4 Sharp),
        "Db" => spelling!(D 4 Flat, F 4 None, A 4 Flat),
        "D" => spelling!(D 4 None, F 4 Sharp, A 4 None),
        "D#" => spelling!(D 4 Sharp, F 4 DoubleSharp, A 4 Sharp),
        "Eb" => spelling!(E 4 Flat, G 4 None, B 4 Flat),
        "E" => spelling!(E 4 None, G 4 Sharp, B 4 None),
        "F" => spelling!(F 4 None, A 4 None, C 5 None),
        "F#" => spelling!(F 4 Sharp, A 4 Sharp, C 5 Sharp),
        "Gb" => spelling!(G 4 Flat, B 4 Flat, D 5 Flat),
        "G" => spelling!(G 4 None, B 4 None, D 5 None),
        "G#" => spelling!(G 4 Sharp, B 4 Sharp, D 5 Sharp),
        "Ab" => spelling!(A 4 Flat, C 5 None, E 5 Flat),
        "A" => spelling!(A 4 None, C 5 Sharp, E 5 None),
        "A#" => spelling!(A 4 Sharp, C 5 DoubleSharp, E 5 Sharp),
        "Bb" => spelling!(B 4 Flat, D 5 None, F 5 None),
        "B" => spelling!(B 4 None, D 5 Sharp, F 5 Sharp),

        // Minor triads
        "Cm" => spelling!(C 4 None, E 4 Flat, G 4 None),
        "C#m" => spelling!(C 4 Sharp, E 4 None, G 4 Sharp),
        "Dm" => spelling!(D 4 None, F 4 None, A 4 None),
        "D#m" => spelling!(D 4 Sharp, F 4 Sharp, A 4 Sharp),
        "Ebm" => spelling!(E 4 Flat, G 4 Flat, B 4 Flat),
        "Em" => spelling!(E 4 None, G 4 None, B 4 None),
        "Fm" => spelling!(F 4 None, A 4 Flat, C 5 None),
        "F#m" => spelling!(F 4 Sharp, A 4 None, C 5 Sharp),
        "Gm" => spelling!(G 4 None, B 4 Flat, D 5 None),
        "G#m" => spelling!(G 4 Sharp, B 4 None, D 5 Sharp),
        "Am" => spelling!(A 4 None, C 5 None, E 5 None),
        "A#m" => spelling!(A 4 Sharp, C 5 Sharp, E 5 Sharp),
        "Bbm" => spelling!(B 4 Flat, D 5 Flat, F 5 None),
        "Bm" => spelling!(B 4 None, D 5 None, F 5 Sharp),

        // Diminished triads
        "Cdim" => spelling!(C 4 None, E 4 Flat, G 4 Flat),
        "C#dim" => spelling!(C 4 Sharp, E 4 None, G 4 None),
        "Ddim" => spelling!(D 4 None, F 4 None, A 4 Flat),
        "Ebdim" => spelling!(E 4 Flat, G 4 Flat, A 4 None),

        // Augmented triads
        "Caug" => spelling!(C 4 None, E 4 None, G 4 Sharp),
        "C#aug" => spelling!(C 4 Sharp, E 4 Sharp, A 4 None),
        "Daug" => spelling!(D 4 None, F 4 Sharp, A 4 Sharp),

        // Seventh chords
        "C7" => spelling!(C 4 None, E 4 None, G 4 None, B 4 Flat),
        "Cmaj7" => spelling!(C 4 None, E 4 None, G 4 None, B 4 None),
        "Cm7" => spelling!(C 4 None, E 4 Flat, G 4 None, B 4 Flat),
        "Cdim7" => spelling!(C 4 None, E 4 Flat, G 4 Flat, A 4 None),

        _ => return None,
    };
    Some(spelling)
}

/// Resolve a chord symbol, falling back to C major on a miss.
///
/// Misses are reported through the `log` facade at warn level.
///
/// # Examples
/// ```
/// use chordscore::lexicon::{resolve, FALLBACK};
///
/// assert_eq!(resolve("Am").keys(), vec!["A/4", "C/5", "E/5"]);
/// assert_eq!(resolve("H7"), FALLBACK);
/// ```
pub fn resolve(label: &str) -> ChordSpelling {
    resolve_with(label, &LogSink)
}

/// Resolve a chord symbol, reporting misses to `sink`.
pub fn resolve_with(label: &str, sink: &dyn DiagnosticSink) -> ChordSpelling {
    match lookup(label) {
        Some(spelling) => spelling,
        None => {
            sink.report(Diagnostic::UnknownChordSymbol { label: label.to_string() });
            FALLBACK
        }
    }
}

/// Iterate the symbols the lexicon knows.
pub fn known_labels() -> impl Iterator<Item = &'static str> {
    KNOWN_LABELS.iter().copied()
}
