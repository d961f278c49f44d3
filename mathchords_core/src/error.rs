// Error type for the chord analysis engine.
//
// Structural problems (malformed scales or chords) are caught at the
// generator/extractor boundary and reported here. Pure analysis functions
// further down the pipeline only fail when handed a chord whose stated bass
// does not occur in its note sequence.

use std::fmt;

/// Errors produced by chord generation and analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// A scale failed structural validation (root or intervals out of range,
    /// intervals not strictly increasing from 0, or no intervals at all).
    InvalidScale(String),
    /// A chord failed structural validation (root/bass out of range,
    /// degree of zero).
    InvalidChord(String),
    /// The chord's `bass` pitch class does not occur in its note sequence,
    /// so no bass-first reordering exists.
    BassNotInChord(u8),
}

impl fmt::Display for ChordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordError::InvalidScale(msg) => write!(f, "invalid scale: {}", msg),
            ChordError::InvalidChord(msg) => write!(f, "invalid chord: {}", msg),
            ChordError::BassNotInChord(bass) => {
                write!(f, "bass pitch class {} is not a note of the chord", bass)
            }
        }
    }
}

impl std::error::Error for ChordError {}
