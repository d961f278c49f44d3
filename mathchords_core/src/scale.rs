// Scale definitions: the harmonic raw material for chord generation.
//
// A scale is a root pitch class plus an increasing list of semitone offsets
// within one octave, the first always 0 (the root itself). The generator
// walks these offsets to turn abstract scale-degree jumps into concrete
// semitone intervals.
//
// Named constructors cover the standard catalogue (major, the minor
// variants, the church modes, pentatonics, altered); `builtin()` lists them
// all for lookup by name.

use serde::{Deserialize, Serialize};

use crate::error::ChordError;

/// A musical scale: named set of semitone offsets above a root pitch class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub name: String,
    /// Pitch class of the scale root (0 = C).
    pub root: u8,
    /// Semitone offsets from the root, strictly increasing, starting at 0.
    pub intervals: Vec<u8>,
}

impl Scale {
    pub fn new(name: &str, root: u8, intervals: Vec<u8>) -> Self {
        Scale {
            name: name.to_string(),
            root,
            intervals,
        }
    }

    /// Structural validation. Invalid scales are rejected before any
    /// generation or analysis touches them.
    pub fn validate(&self) -> Result<(), ChordError> {
        if self.root >= 12 {
            return Err(ChordError::InvalidScale(format!(
                "root {} out of range 0..12",
                self.root
            )));
        }
        if self.intervals.is_empty() {
            return Err(ChordError::InvalidScale("no intervals".to_string()));
        }
        if self.intervals[0] != 0 {
            return Err(ChordError::InvalidScale(
                "intervals must start at 0".to_string(),
            ));
        }
        for pair in self.intervals.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ChordError::InvalidScale(format!(
                    "intervals must be strictly increasing ({} then {})",
                    pair[0], pair[1]
                )));
            }
        }
        if let Some(&last) = self.intervals.last() {
            if last >= 12 {
                return Err(ChordError::InvalidScale(format!(
                    "interval {} out of range 0..12",
                    last
                )));
            }
        }
        Ok(())
    }

    /// Number of scale degrees.
    pub fn degree_count(&self) -> usize {
        self.intervals.len()
    }

    /// Pitch class of the given 0-based degree index.
    pub fn pitch_class_at(&self, degree_index: usize) -> u8 {
        (self.root + self.intervals[degree_index]) % 12
    }

    pub fn major() -> Self {
        Scale::new("Major", 0, vec![0, 2, 4, 5, 7, 9, 11])
    }

    pub fn natural_minor() -> Self {
        Scale::new("Natural Minor", 0, vec![0, 2, 3, 5, 7, 8, 10])
    }

    pub fn major_pentatonic() -> Self {
        Scale::new("Major Pentatonic", 0, vec![0, 2, 4, 7, 9])
    }

    pub fn minor_pentatonic() -> Self {
        Scale::new("Minor Pentatonic", 0, vec![0, 3, 5, 7, 10])
    }

    pub fn harmonic_minor() -> Self {
        Scale::new("Harmonic Minor", 0, vec![0, 2, 3, 5, 7, 8, 11])
    }

    pub fn melodic_minor() -> Self {
        Scale::new("Melodic Minor", 0, vec![0, 2, 3, 5, 7, 9, 11])
    }

    pub fn dorian() -> Self {
        Scale::new("Dorian", 0, vec![0, 2, 3, 5, 7, 9, 10])
    }

    pub fn phrygian() -> Self {
        Scale::new("Phrygian", 0, vec![0, 1, 3, 5, 7, 8, 10])
    }

    pub fn lydian() -> Self {
        Scale::new("Lydian", 0, vec![0, 2, 4, 6, 7, 9, 11])
    }

    pub fn mixolydian() -> Self {
        Scale::new("Mixolydian", 0, vec![0, 2, 4, 5, 7, 9, 10])
    }

    pub fn locrian() -> Self {
        Scale::new("Locrian", 0, vec![0, 1, 3, 5, 6, 8, 10])
    }

    /// Altered (super-locrian) scale, the one 8-note entry in the catalogue.
    pub fn altered() -> Self {
        Scale::new("Altered", 0, vec![0, 1, 3, 4, 6, 8, 10, 11])
    }

    /// The full built-in catalogue.
    pub fn builtin() -> Vec<Scale> {
        vec![
            Scale::major(),
            Scale::natural_minor(),
            Scale::major_pentatonic(),
            Scale::minor_pentatonic(),
            Scale::harmonic_minor(),
            Scale::melodic_minor(),
            Scale::dorian(),
            Scale::phrygian(),
            Scale::lydian(),
            Scale::mixolydian(),
            Scale::locrian(),
            Scale::altered(),
        ]
    }

    /// Look up a built-in scale by name, case-insensitively.
    pub fn by_name(name: &str) -> Option<Scale> {
        Scale::builtin()
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }
}
