// Combinatorial chord generation from a scale definition.
//
// For every (octave, scale degree, chord size) the generator enumerates every
// ordered combination with repetition of the step alphabet (a Cartesian
// power), then reinterprets each abstract step as a scale-relative jump: a
// cursor walks the scale's degree positions and each chord interval becomes
// the semitone distance between consecutive cursor positions. The output
// therefore respects the scale's shape rather than stacking raw semitones.
//
// The Cartesian power is driven by an explicit odometer over alphabet
// indices, rightmost digit fastest, so enumeration order is stable and no
// recursion or materialized product is involved. `max_population` is a
// global hard cap: once that many chords exist, generation returns
// immediately, making capped output a prefix of the uncapped output.

use crate::chord::Chord;
use crate::error::ChordError;
use crate::scale::Scale;

/// Odometer over index tuples `[0, alphabet_len)^size`, rightmost position
/// incrementing fastest. `size == 0` yields exactly one empty tuple.
struct CartesianPower {
    alphabet_len: usize,
    indices: Vec<usize>,
    done: bool,
}

impl CartesianPower {
    fn new(alphabet_len: usize, size: usize) -> Self {
        CartesianPower {
            alphabet_len,
            indices: vec![0; size],
            // A non-empty tuple over an empty alphabet has no instances.
            done: alphabet_len == 0 && size > 0,
        }
    }
}

impl Iterator for CartesianPower {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        // Advance the odometer; when every digit wraps we are finished.
        self.done = true;
        for digit in self.indices.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet_len {
                self.done = false;
                break;
            }
            *digit = 0;
        }
        Some(current)
    }
}

/// Generate the chord dictionary for a scale.
///
/// `step_alphabet` entries are scale-degree jumps (negative and zero values
/// allowed; the cursor wraps with Euclidean modulo). `max_population` caps
/// the total number of chords across the whole enumeration.
pub fn generate(
    scale: &Scale,
    octaves: &[i32],
    sizes: &[usize],
    step_alphabet: &[i32],
    max_population: Option<usize>,
) -> Result<Vec<Chord>, ChordError> {
    scale.validate()?;
    if max_population == Some(0) {
        return Ok(Vec::new());
    }

    let degree_count = scale.degree_count();
    let mut chords = Vec::new();

    for &octave in octaves {
        for degree_index in 0..degree_count {
            let root = scale.pitch_class_at(degree_index);
            for &size in sizes {
                for combination in CartesianPower::new(step_alphabet.len(), size) {
                    let mut position = degree_index;
                    let mut intervals = Vec::with_capacity(size);
                    for &alphabet_index in &combination {
                        let step = step_alphabet[alphabet_index];
                        let next = (position as i64 + i64::from(step))
                            .rem_euclid(degree_count as i64) as usize;
                        let semitones = (i32::from(scale.intervals[next])
                            - i32::from(scale.intervals[position]))
                        .rem_euclid(12);
                        intervals.push(semitones);
                        position = next;
                    }
                    chords.push(Chord {
                        octave,
                        bass: root,
                        root,
                        degree: degree_index + 1,
                        intervals,
                    });
                    if let Some(cap) = max_population {
                        if chords.len() == cap {
                            return Ok(chords);
                        }
                    }
                }
            }
        }
    }

    Ok(chords)
}

/// Simulate all inversions of each chord.
///
/// For each input the original is emitted first, then one chord per interval,
/// each copying the previously emitted chord with its bass advanced by that
/// interval mod 12. Root, intervals, degree, and octave never change; only
/// the bass cycles. Every input yields `intervals.len() + 1` outputs.
pub fn invert_all(chords: &[Chord]) -> Vec<Chord> {
    let mut output = Vec::new();
    for chord in chords {
        let mut current = chord.clone();
        output.push(current.clone());
        for index in 0..chord.intervals.len() {
            let interval = chord.intervals[index];
            current.bass = (i32::from(current.bass) + interval).rem_euclid(12) as u8;
            output.push(current.clone());
        }
    }
    output
}
