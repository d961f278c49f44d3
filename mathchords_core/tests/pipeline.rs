// End-to-end pipeline: generate a chord dictionary, simulate inversions,
// apply feature functions through the orchestrator, and round-trip the whole
// experiment through the JSON persistence boundary.

use mathchords_core::experiment::{Experiment, ExperimentParams, apply_batch};
use mathchords_core::generate::{generate, invert_all};
use mathchords_core::{ChordQuality, Scale, dissonance, features};

fn triad_experiment() -> Experiment {
    let scale = Scale::major();
    let chords = generate(&scale, &[4], &[2], &[2], None).unwrap();
    let chords = invert_all(&chords);
    let params = ExperimentParams {
        scale,
        octaves: vec![4],
        sizes: vec![2],
        intervals: vec![2],
    };
    Experiment::new("major scale triads", params, chords)
}

#[test]
fn generate_analyze_save_load() {
    let experiment = triad_experiment();
    // 7 triads, each with 2 intervals -> 3 inversions apiece.
    assert_eq!(experiment.chords.len(), 21);

    let analyzed = apply_batch(&experiment, features::interval_vector).unwrap();
    assert_eq!(analyzed.results.len(), 21);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triads.json");
    mathchords_io::save(&analyzed, &path).unwrap();
    let loaded: Experiment = mathchords_io::load(&path).unwrap();
    assert_eq!(loaded, analyzed);
}

#[test]
fn inversions_share_interval_class_vectors() {
    // The interval-class vector is built from the pitch-class set alone, so
    // every inversion of a chord shares its root-position vector.
    let experiment = triad_experiment();
    let analyzed = apply_batch(&experiment, features::interval_vector).unwrap();
    for triad in experiment.chords.chunks(3) {
        let vectors: Vec<_> = triad
            .iter()
            .map(|chord| {
                let (_, record) = analyzed
                    .results
                    .iter()
                    .find(|(_, r)| &r.chord == chord)
                    .unwrap();
                record.feature_vector.clone()
            })
            .collect();
        assert_eq!(vectors[0], vectors[1]);
        assert_eq!(vectors[0], vectors[2]);
    }
}

#[test]
fn dissonance_distinguishes_inversions() {
    // The dissonance-weighted histogram depends on the voicing, so the three
    // inversions of the tonic triad produce three different vectors.
    let experiment = triad_experiment();
    let analyzed = apply_batch(&experiment, dissonance::dissonance_weighted_histogram).unwrap();
    let tonic: Vec<_> = (0..3)
        .map(|i| analyzed.results[&format!("chord_{}", i)].feature_vector.clone())
        .collect();
    assert_ne!(tonic[0], tonic[1]);
    assert_ne!(tonic[1], tonic[2]);
    assert_ne!(tonic[0], tonic[2]);
}

#[test]
fn classification_survives_the_batch() {
    let experiment = triad_experiment();
    let analyzed = apply_batch(&experiment, features::prime_form).unwrap();
    // Root-position chords: the diminished triad (degree 7) classifies, and
    // every major/minor triad shares the 3-11 prime form.
    for record in analyzed.results.values() {
        match record.chord.quality() {
            ChordQuality::Major | ChordQuality::Minor => {
                assert_eq!(record.feature_vector, vec![0.0, 3.0, 7.0]);
            }
            ChordQuality::Diminished => {
                assert_eq!(record.feature_vector, vec![0.0, 3.0, 6.0]);
            }
            ChordQuality::Unknown => panic!("unexpected unknown triad"),
        }
    }
}
