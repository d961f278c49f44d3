// Chord representation and pitch-class extraction.
//
// A chord stores its root pitch class plus the semitone steps between
// consecutive notes (not absolute positions). The absolute pitch-class
// sequence is recovered by cumulative summation mod 12, root first. That
// extraction is the single source of truth: every canonicalization and
// feature function downstream consumes it rather than recomputing.
//
// `bass` names which pitch class sounds lowest. It usually equals the first
// note but inversion simulation (generate.rs) cycles it through the others,
// and `bass_first_sequence` rotates the note order to start there.

use serde::{Deserialize, Serialize};

use crate::error::ChordError;

/// Note names for the 12 pitch classes, sharps only.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A chord: root pitch class, octave register, bass note, scale degree, and
/// the signed semitone steps between consecutive notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Octave register of the bass note (4 = the octave of middle C).
    pub octave: i32,
    /// Pitch class of the lowest sounding note.
    pub bass: u8,
    /// Pitch class of the chord root (0 = C).
    pub root: u8,
    /// 1-indexed scale degree of the root within the governing scale.
    pub degree: usize,
    /// Signed semitone steps between consecutive notes.
    pub intervals: Vec<i32>,
}

impl Chord {
    /// Structural validation; generation and extraction refuse malformed
    /// chords rather than producing garbage downstream.
    pub fn validate(&self) -> Result<(), ChordError> {
        if self.root >= 12 {
            return Err(ChordError::InvalidChord(format!(
                "root {} out of range 0..12",
                self.root
            )));
        }
        if self.bass >= 12 {
            return Err(ChordError::InvalidChord(format!(
                "bass {} out of range 0..12",
                self.bass
            )));
        }
        if self.degree == 0 {
            return Err(ChordError::InvalidChord("degree must be >= 1".to_string()));
        }
        Ok(())
    }

    /// Extract the chord's pitch classes in chord order: the root, then each
    /// cumulative step reduced mod 12. Duplicates are retained; length is
    /// always `intervals.len() + 1`.
    pub fn pitch_classes(&self) -> Vec<u8> {
        let mut pitches = Vec::with_capacity(self.intervals.len() + 1);
        let mut acc = i32::from(self.root);
        pitches.push(self.root % 12);
        for &interval in &self.intervals {
            acc = (acc + interval).rem_euclid(12);
            pitches.push(acc as u8);
        }
        pitches
    }

    /// Pitch classes shifted so the first element is 0. Display alignment
    /// only; not a theoretical canonical form.
    pub fn transposed_to_zero(&self) -> Vec<u8> {
        let pitches = self.pitch_classes();
        let shift = pitches[0];
        pitches.iter().map(|&p| (12 + p - shift) % 12).collect()
    }

    /// The note sequence rotated so it starts at the bass. Fails when the
    /// stated bass is not one of the chord's pitch classes (only possible
    /// for hand-built chords; the generator and inversion simulator always
    /// keep bass in the set).
    pub fn bass_first_sequence(&self) -> Result<Vec<u8>, ChordError> {
        let sequence = self.pitch_classes();
        let bass_index = sequence
            .iter()
            .position(|&p| p == self.bass)
            .ok_or(ChordError::BassNotInChord(self.bass))?;
        let mut reordered = Vec::with_capacity(sequence.len());
        reordered.extend_from_slice(&sequence[bass_index..]);
        reordered.extend_from_slice(&sequence[..bass_index]);
        Ok(reordered)
    }

    /// Triad quality from the interval pattern.
    pub fn quality(&self) -> ChordQuality {
        ChordQuality::classify(&self.intervals)
    }

    /// Chord name in lead-sheet style: root, quality suffix, and a slash
    /// bass when the bass differs from the root (e.g. "Dm", "B°", "C/G").
    pub fn name(&self) -> String {
        let mut name = NOTE_NAMES[usize::from(self.root % 12)].to_string();
        match self.quality() {
            ChordQuality::Minor => name.push('m'),
            ChordQuality::Diminished => name.push('°'),
            ChordQuality::Major | ChordQuality::Unknown => {}
        }
        if self.bass % 12 != self.root % 12 {
            name.push('/');
            name.push_str(NOTE_NAMES[usize::from(self.bass % 12)]);
        }
        name
    }
}

/// Triad quality classified by exact interval-pattern match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Unknown,
}

impl ChordQuality {
    /// `[4,3]` is major, `[3,4]` minor, `[3,3]` diminished; anything else is
    /// explicitly unknown, never an error.
    pub fn classify(intervals: &[i32]) -> ChordQuality {
        match intervals {
            [4, 3] => ChordQuality::Major,
            [3, 4] => ChordQuality::Minor,
            [3, 3] => ChordQuality::Diminished,
            _ => ChordQuality::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Unknown => "unknown",
        }
    }
}

/// Marker appearance for one chord quality, consumed by the external
/// plotting layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: String,
    pub symbol: String,
}

/// Color/symbol assignment per chord quality. The defaults match the
/// palette the plotting notebooks expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub major: MarkerStyle,
    pub minor: MarkerStyle,
    pub diminished: MarkerStyle,
    pub unknown: MarkerStyle,
}

impl PlotConfig {
    pub fn style_for(&self, quality: ChordQuality) -> &MarkerStyle {
        match quality {
            ChordQuality::Major => &self.major,
            ChordQuality::Minor => &self.minor,
            ChordQuality::Diminished => &self.diminished,
            ChordQuality::Unknown => &self.unknown,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        let style = |color: &str, symbol: &str| MarkerStyle {
            color: color.to_string(),
            symbol: symbol.to_string(),
        };
        PlotConfig {
            major: style("red", "star-square"),
            minor: style("blue", "star-triangle-down"),
            diminished: style("green", "circle"),
            unknown: style("orange", "asterisk"),
        }
    }
}
