// Sethares-style roughness model over chord inversions.
//
// Two pure tones beat against each other in a way that peaks at a small
// frequency separation and decays as they drift apart; the curve here is the
// classic two-exponential fit with a fixed amplitude for every pair (no
// loudness modeling).
//
// Chords are voiced by walking the bass-first note order upward: the walk
// starts at the chord's stated octave and bumps the octave every time the
// next pitch class is numerically below the previous one, so the sequence
// always climbs. Equal temperament with A4 = 440 Hz anchors the mapping
// from pitch to frequency.

use crate::chord::Chord;
use crate::error::ChordError;
use crate::experiment::FeatureRecord;

const A4_FREQ: f64 = 440.0;
const A4_NOTE: i32 = 9;
const A4_OCTAVE: i32 = 4;

// Roughness curve constants (Sethares' fit of the Plomp-Levelt data).
const D_STAR: f64 = 0.24;
const S1: f64 = 0.0207;
const S2: f64 = 18.96;
const C1: f64 = 5.0;
const C2: f64 = -5.0;
const A1: f64 = -3.51;
const A2: f64 = -5.75;

/// Equal-tempered frequency of pitch class `pitch` at `octave`.
pub fn pitch_to_frequency(pitch: u8, octave: i32) -> f64 {
    let semitones = i32::from(pitch) + (octave - A4_OCTAVE) * 12 - A4_NOTE;
    A4_FREQ * (f64::from(semitones) / 12.0).exp2()
}

/// Roughness of a single frequency pair at the given amplitude. Symmetric in
/// its arguments and zero at the unison.
pub fn pair_roughness(f1: f64, f2: f64, amplitude: f64) -> f64 {
    let (f_min, f_max) = if f1 <= f2 { (f1, f2) } else { (f2, f1) };
    let s = D_STAR / (S1 * f_min + S2);
    let delta = f_max - f_min;
    amplitude * (C1 * (A1 * s * delta).exp() + C2 * (A2 * s * delta).exp())
}

/// Frequencies of the chord's notes in bass-first order, with the octave
/// counter incremented whenever the pitch-class value drops (the voicing
/// climbs, never descends).
pub fn inversion_frequencies(chord: &Chord) -> Result<Vec<f64>, ChordError> {
    let sequence = chord.bass_first_sequence()?;
    let mut octave = chord.octave;
    let mut previous = chord.bass;
    let mut frequencies = Vec::with_capacity(sequence.len());
    for &note in &sequence {
        if note < previous {
            octave += 1;
        }
        frequencies.push(pitch_to_frequency(note, octave));
        previous = note;
    }
    Ok(frequencies)
}

/// Dissonance-weighted interval histogram.
///
/// Over every ordered pair of the bass-first note order, accumulates an
/// 11-bin interval count and an 11-bin roughness sum in parallel, then
/// multiplies the two element-wise.
pub fn dissonance_weighted_histogram(
    chord: &Chord,
    chord_id: &str,
) -> Result<FeatureRecord, ChordError> {
    chord.validate()?;
    let sequence = chord.bass_first_sequence()?;
    let frequencies = inversion_frequencies(chord)?;

    let mut histogram = vec![0.0f64; 11];
    let mut roughness = vec![0.0f64; 11];
    for i in 0..sequence.len() {
        for j in (i + 1)..sequence.len() {
            let interval = (i32::from(sequence[j]) - i32::from(sequence[i])).rem_euclid(12);
            if interval > 0 {
                let bin = (interval - 1) as usize;
                histogram[bin] += 1.0;
                roughness[bin] += pair_roughness(frequencies[i], frequencies[j], 1.0);
            }
        }
    }

    let feature_vector = histogram
        .iter()
        .zip(&roughness)
        .map(|(count, rough)| count * rough)
        .collect();
    Ok(FeatureRecord {
        chord: chord.clone(),
        feature_vector,
        chord_id: chord_id.to_string(),
    })
}
