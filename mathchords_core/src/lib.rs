// mathchords: pitch-class set analysis of musical chords.
//
// Chords are treated as pitch-class sets over the 12-tone space and turned
// into numeric feature vectors for comparison, clustering, and
// classification. The pipeline: a combinatorial generator enumerates chords
// from a scale definition, the extractor maps each chord to its pitch-class
// sequence, and the canonicalization/feature/dissonance layers turn those
// sequences into vectors that the experiment orchestrator aggregates into a
// keyed result map.
//
// Architecture:
// - scale.rs: scale definitions, validation, the built-in scale catalogue
// - chord.rs: chord representation, pitch-class extraction, bass-first
//   reordering, triad classification + display support
// - generate.rs: combinatorial chord generator (odometer-driven Cartesian
//   power over a step alphabet) and the inversion simulator
// - canonical.rs: normal form, prime form, Rahn normal order with the exact
//   Forte/Rahn tie-break rules
// - features.rs: interval-class vector, binary/polar encodings, interval
//   histograms, batch-level polar degree encoding
// - dissonance.rs: Sethares-style roughness over inversion frequency pairs
// - experiment.rs: experiment value type and batch orchestration
// - error.rs: structural validation errors
//
// Persistence lives in the sibling `mathchords_io` crate; everything here is
// pure, deterministic, and side-effect free.

pub mod canonical;
pub mod chord;
pub mod dissonance;
pub mod error;
pub mod experiment;
pub mod features;
pub mod generate;
pub mod scale;

pub use chord::{Chord, ChordQuality};
pub use error::ChordError;
pub use experiment::{Experiment, ExperimentParams, FeatureRecord};
pub use scale::Scale;
