// Experiment orchestration: batch application of feature functions.
//
// An experiment bundles the generation parameters, the generated chord
// dictionary, and a results map keyed by chord id. `apply_batch` runs any
// feature function over every chord and returns a new experiment value with
// the results populated; the input experiment is never mutated, so the same
// chord dictionary can be analyzed under several feature functions side by
// side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::error::ChordError;
use crate::scale::Scale;

/// The universal output envelope of every feature function: the analyzed
/// chord, its numeric feature vector, and the caller-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub chord: Chord,
    pub feature_vector: Vec<f64>,
    pub chord_id: String,
}

/// The generation parameters an experiment was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentParams {
    pub scale: Scale,
    pub octaves: Vec<i32>,
    pub sizes: Vec<usize>,
    /// The step alphabet the generator drew from.
    pub intervals: Vec<i32>,
}

/// An experiment: metadata, parameters, chord dictionary, and (after a batch
/// pass) the per-chord feature results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    #[serde(rename = "experiment_name")]
    pub name: String,
    pub description: String,
    /// Date string supplied by the caller; empty when unset.
    #[serde(rename = "experiment_date")]
    pub date: String,
    pub version: String,
    #[serde(rename = "experiment_params")]
    pub params: ExperimentParams,
    pub chords: Vec<Chord>,
    pub results: BTreeMap<String, FeatureRecord>,
}

impl Experiment {
    /// New experiment with empty results and version "1.0".
    pub fn new(name: &str, params: ExperimentParams, chords: Vec<Chord>) -> Self {
        Experiment {
            name: name.to_string(),
            description: String::new(),
            date: String::new(),
            version: "1.0".to_string(),
            params,
            chords,
            results: BTreeMap::new(),
        }
    }
}

/// Chord id for batch index `i`. Stable across a batch; every orchestrated
/// pass uses this scheme, so ids never collide within one run.
pub fn chord_id_for(index: usize) -> String {
    format!("chord_{}", index)
}

/// Apply a feature function to every chord of an experiment.
///
/// Returns a new experiment whose `results` map holds one record per chord,
/// keyed by `chord_{index}`. The input experiment is left untouched. Any
/// function matching the `(chord, chord_id) -> FeatureRecord` contract can
/// be passed in, so all feature functions are interchangeable here.
pub fn apply_batch<F>(experiment: &Experiment, feature_fn: F) -> Result<Experiment, ChordError>
where
    F: Fn(&Chord, &str) -> Result<FeatureRecord, ChordError>,
{
    let mut results = BTreeMap::new();
    for (index, chord) in experiment.chords.iter().enumerate() {
        let chord_id = chord_id_for(index);
        let record = feature_fn(chord, &chord_id)?;
        results.insert(chord_id, record);
    }
    let mut output = experiment.clone();
    output.results = results;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features;
    use crate::generate::generate;

    fn small_experiment() -> Experiment {
        let scale = Scale::major();
        let chords = generate(&scale, &[4], &[2], &[2], None).unwrap();
        let params = ExperimentParams {
            scale,
            octaves: vec![4],
            sizes: vec![2],
            intervals: vec![2],
        };
        Experiment::new("triads", params, chords)
    }

    #[test]
    fn test_apply_batch_keys_and_copy_on_write() {
        let experiment = small_experiment();
        let analyzed = apply_batch(&experiment, features::interval_vector).unwrap();

        assert_eq!(analyzed.results.len(), experiment.chords.len());
        for (index, chord) in experiment.chords.iter().enumerate() {
            let id = chord_id_for(index);
            let record = &analyzed.results[&id];
            assert_eq!(record.chord_id, id);
            assert_eq!(&record.chord, chord);
            assert_eq!(record.feature_vector.len(), 6);
        }
        // Copy-on-write: the input experiment is untouched.
        assert!(experiment.results.is_empty());
        assert_eq!(analyzed.chords, experiment.chords);
        assert_eq!(analyzed.params, experiment.params);
    }

    #[test]
    fn test_apply_batch_accepts_closures() {
        let experiment = small_experiment();
        let analyzed = apply_batch(&experiment, |chord, chord_id| {
            Ok(FeatureRecord {
                chord: chord.clone(),
                feature_vector: vec![f64::from(chord.root)],
                chord_id: chord_id.to_string(),
            })
        })
        .unwrap();
        assert_eq!(analyzed.results["chord_4"].feature_vector, vec![7.0]);
    }

    #[test]
    fn test_apply_batch_propagates_errors() {
        let mut experiment = small_experiment();
        // Break one chord's bass so bass-dependent features fail.
        experiment.chords[2].bass = 1;
        let result = apply_batch(&experiment, features::interval_histogram);
        assert_eq!(result, Err(ChordError::BassNotInChord(1)));
    }
}
