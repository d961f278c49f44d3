// Feature vector library: numeric encodings of chords for comparison,
// clustering, and classification.
//
// Every chord-level function here follows the same contract,
// `(chord, chord_id) -> FeatureRecord`, so the orchestrator
// (experiment.rs) can swap them freely. The vectors themselves:
//
// - interval_vector: the 6-bin interval-class vector of set theory
// - binary_pitch_classes: 12-length presence indicator
// - polar_pitch_classes: pitch classes on the unit circle (24 slots)
// - interval_histogram: 11-bin directional intervals from the bass-first
//   note order (deliberately unfolded, unlike the interval-class vector)
// - combined_vector: raw pitch classes plus the histogram of the
//   cumulative-position distance matrix
// - polar_degree: batch-level scale-degree angles over a whole experiment
//
// Canonical forms (canonical.rs) are also exposed in record form so they
// can be batched like any other feature.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::canonical;
use crate::chord::Chord;
use crate::error::ChordError;
use crate::experiment::{Experiment, FeatureRecord, chord_id_for};

fn record(chord: &Chord, chord_id: &str, feature_vector: Vec<f64>) -> FeatureRecord {
    FeatureRecord {
        chord: chord.clone(),
        feature_vector,
        chord_id: chord_id.to_string(),
    }
}

fn as_f64(values: &[u8]) -> Vec<f64> {
    values.iter().map(|&v| f64::from(v)).collect()
}

/// The raw extracted pitch-class sequence, in chord order with duplicates.
pub fn pitch_classes(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    Ok(record(chord, chord_id, as_f64(&chord.pitch_classes())))
}

/// Pitch classes shifted so the first is 0 (display alignment).
pub fn transpose_to_zero(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    Ok(record(chord, chord_id, as_f64(&chord.transposed_to_zero())))
}

/// Normal form of the chord's pitch-class set, in record form.
pub fn normal_form(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let form = canonical::normal_form(&chord.pitch_classes());
    Ok(record(chord, chord_id, as_f64(&form)))
}

/// Prime form of the chord's pitch-class set, in record form.
pub fn prime_form(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let form = canonical::prime_form(&chord.pitch_classes());
    Ok(record(chord, chord_id, as_f64(&form)))
}

/// Rahn normal order of the chord's pitch-class set, in record form.
pub fn rahn_normal_order(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let form = canonical::rahn_normal_order(&chord.pitch_classes());
    Ok(record(chord, chord_id, as_f64(&form)))
}

/// The interval-class vector: a 6-bin histogram over every unordered pair of
/// the raw pitch-class sequence. Intervals above 6 fold to their complement;
/// unison pairs (duplicated pitch classes) contribute nothing.
pub fn interval_vector(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let pitches = chord.pitch_classes();
    let mut bins = [0.0f64; 6];
    for i in 0..pitches.len() {
        for j in (i + 1)..pitches.len() {
            let mut interval = (i32::from(pitches[j]) - i32::from(pitches[i])).abs() % 12;
            if interval > 6 {
                interval = 12 - interval;
            }
            if interval > 0 {
                bins[(interval - 1) as usize] += 1.0;
            }
        }
    }
    Ok(record(chord, chord_id, bins.to_vec()))
}

/// 12-length indicator vector: 1.0 where the pitch class occurs.
pub fn binary_pitch_classes(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let mut bins = vec![0.0f64; 12];
    for pitch in chord.pitch_classes() {
        bins[usize::from(pitch)] = 1.0;
    }
    Ok(record(chord, chord_id, bins))
}

/// Pitch classes mapped onto the unit circle: pitch class `k` writes
/// (cos, sin) of `k * 2π/12` at slots `2k` and `2k+1`. Absent classes leave
/// both slots at 0; duplicates overwrite the same slots (idempotent).
pub fn polar_pitch_classes(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let mut vector = vec![0.0f64; 24];
    for pitch in chord.pitch_classes() {
        let angle = f64::from(pitch) * (2.0 * PI / 12.0);
        vector[usize::from(pitch) * 2] = angle.cos();
        vector[usize::from(pitch) * 2 + 1] = angle.sin();
    }
    Ok(record(chord, chord_id, vector))
}

/// 11-bin histogram of directional intervals within the bass-first note
/// order: for every ordered pair i < j, `(seq[j] - seq[i]) mod 12` lands in
/// bin `value - 1` when nonzero. Unlike the interval-class vector this does
/// not fold intervals above 6.
pub fn interval_histogram(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let sequence = chord.bass_first_sequence()?;
    let mut bins = vec![0.0f64; 11];
    for i in 0..sequence.len() {
        for j in (i + 1)..sequence.len() {
            let interval = (i32::from(sequence[j]) - i32::from(sequence[i])).rem_euclid(12);
            if interval > 0 {
                bins[(interval - 1) as usize] += 1.0;
            }
        }
    }
    Ok(record(chord, chord_id, bins))
}

/// Cumulative note positions: 0, then the running sum of the chord's raw
/// intervals, unreduced. These are positions on an unbounded semitone line,
/// not pitch classes.
fn cumulative_positions(chord: &Chord) -> Vec<i64> {
    let mut positions = Vec::with_capacity(chord.intervals.len() + 1);
    let mut acc = 0i64;
    positions.push(acc);
    for &interval in &chord.intervals {
        acc += i64::from(interval);
        positions.push(acc);
    }
    positions
}

/// 11-bin histogram of the absolute distances between all cumulative note
/// positions. Zero distances are excluded; distances beyond 11 fall outside
/// the histogram and are ignored.
fn position_distance_histogram(chord: &Chord) -> Vec<f64> {
    let positions = cumulative_positions(chord);
    let mut bins = vec![0.0f64; 11];
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let distance = (positions[j] - positions[i]).abs();
            if (1..=11).contains(&distance) {
                bins[(distance - 1) as usize] += 1.0;
            }
        }
    }
    bins
}

/// The combined experiment vector: the raw pitch-class sequence concatenated
/// with the cumulative-position distance histogram.
pub fn combined_vector(chord: &Chord, chord_id: &str) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let mut vector = as_f64(&chord.pitch_classes());
    vector.extend(position_distance_histogram(chord));
    Ok(record(chord, chord_id, vector))
}

/// Batch-level polar encoding of scale degrees.
///
/// Each distinct degree maps to the angle `(degree - 1) * 2π / degree_count`
/// on the unit circle. The angle is memoized by the last seen degree, so the
/// function is sequential in input order by construction; runs of equal
/// degrees reuse the previously computed angle.
pub fn polar_degree(experiment: &Experiment) -> Result<BTreeMap<String, FeatureRecord>, ChordError> {
    let degree_count = experiment.params.scale.degree_count();
    if degree_count == 0 {
        return Err(ChordError::InvalidScale("no intervals".to_string()));
    }
    let angle_between_degrees = 2.0 * PI / degree_count as f64;

    let mut last_degree: Option<usize> = None;
    let mut last_angle = 0.0f64;
    let mut results = BTreeMap::new();

    for (index, chord) in experiment.chords.iter().enumerate() {
        if last_degree != Some(chord.degree) {
            last_degree = Some(chord.degree);
            last_angle = (chord.degree - 1) as f64 * angle_between_degrees;
        }
        let chord_id = chord_id_for(index);
        results.insert(
            chord_id.clone(),
            record(chord, &chord_id, vec![last_angle.cos(), last_angle.sin()]),
        );
    }
    Ok(results)
}
