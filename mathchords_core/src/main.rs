// mathchords experiment generator — CLI entry point.
//
// Generates a chord dictionary from a scale, applies a feature function to
// every chord, and writes the resulting experiment to a JSON file.
//
// Usage:
//   cargo run -p mathchords_core -- [output.json] [--scale NAME] [--octaves LIST]
//     [--sizes LIST] [--steps LIST] [--max N] [--invert] [--feature NAME]
//     [--name NAME] [--date DATE]
//
// Features: pitch-classes, transpose-zero, normal-form, prime-form, rahn,
// interval-vector, binary, polar, histogram, dissonance, combined,
// polar-degree

use std::path::Path;
use std::process;

use mathchords_core::experiment::{Experiment, ExperimentParams, apply_batch};
use mathchords_core::generate::{generate, invert_all};
use mathchords_core::scale::Scale;
use mathchords_core::{ChordError, features};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    let output_path = args
        .get(1)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str())
        .unwrap_or("experiment.json");
    let scale_name: String = parse_flag(&args, "--scale").unwrap_or_else(|| "major".to_string());
    let octaves = parse_list(&args, "--octaves").unwrap_or_else(|| vec![4]);
    let sizes: Vec<usize> = parse_list(&args, "--sizes")
        .unwrap_or_else(|| vec![2i32])
        .into_iter()
        .filter(|&s| s >= 0)
        .map(|s| s as usize)
        .collect();
    let steps = parse_list(&args, "--steps").unwrap_or_else(|| vec![1, 2]);
    let max_population: Option<usize> = parse_flag(&args, "--max");
    let invert = args.iter().any(|a| a == "--invert");
    let feature_name: String =
        parse_flag(&args, "--feature").unwrap_or_else(|| "interval-vector".to_string());
    let experiment_name: String =
        parse_flag(&args, "--name").unwrap_or_else(|| "experiment".to_string());
    let date: String = parse_flag(&args, "--date").unwrap_or_default();

    let Some(scale) = Scale::by_name(&scale_name) else {
        eprintln!("Unknown scale '{}'. Available scales:", scale_name);
        for s in Scale::builtin() {
            eprintln!("  {}", s.name);
        }
        process::exit(1);
    };

    println!("=== mathchords experiment generator ===");
    println!("Output: {}", output_path);
    println!("Scale: {} (root = {})", scale.name, scale.root);
    println!("Octaves: {:?}  Sizes: {:?}  Steps: {:?}", octaves, sizes, steps);
    println!("Feature: {}", feature_name);
    if let Some(cap) = max_population {
        println!("Max population: {}", cap);
    }
    println!();

    // Generate the chord dictionary
    println!("[1/3] Generating chords...");
    let chords = match generate(&scale, &octaves, &sizes, &steps, max_population) {
        Ok(chords) => chords,
        Err(e) => {
            eprintln!("  Generation failed: {}", e);
            process::exit(1);
        }
    };
    println!("  {} chords generated.", chords.len());

    let chords = if invert {
        let inverted = invert_all(&chords);
        println!("  {} chords after inversion simulation.", inverted.len());
        inverted
    } else {
        chords
    };

    let params = ExperimentParams {
        scale,
        octaves,
        sizes,
        intervals: steps,
    };
    let mut experiment = Experiment::new(&experiment_name, params, chords);
    experiment.date = date;

    // Apply the feature function
    println!("[2/3] Applying feature '{}'...", feature_name);
    let analyzed = match run_feature(&experiment, &feature_name) {
        Ok(analyzed) => analyzed,
        Err(e) => {
            eprintln!("  Feature application failed: {}", e);
            process::exit(1);
        }
    };
    println!("  {} results.", analyzed.results.len());

    // Save
    println!("[3/3] Writing {}...", output_path);
    match mathchords_io::save(&analyzed, Path::new(output_path)) {
        Ok(()) => println!("  Done."),
        Err(e) => {
            eprintln!("  Error writing experiment: {}", e);
            process::exit(1);
        }
    }
}

fn run_feature(experiment: &Experiment, name: &str) -> Result<Experiment, ChordError> {
    // polar-degree is batch-level (its memoization depends on chord order),
    // so it bypasses the per-chord dispatch.
    if name == "polar-degree" {
        let results = features::polar_degree(experiment)?;
        let mut analyzed = experiment.clone();
        analyzed.results = results;
        return Ok(analyzed);
    }
    let feature_fn = match name {
        "pitch-classes" => features::pitch_classes,
        "transpose-zero" => features::transpose_to_zero,
        "normal-form" => features::normal_form,
        "prime-form" => features::prime_form,
        "rahn" => features::rahn_normal_order,
        "interval-vector" => features::interval_vector,
        "binary" => features::binary_pitch_classes,
        "polar" => features::polar_pitch_classes,
        "histogram" => features::interval_histogram,
        "combined" => features::combined_vector,
        "dissonance" => mathchords_core::dissonance::dissonance_weighted_histogram,
        other => {
            eprintln!("Unknown feature '{}'. Using interval-vector.", other);
            features::interval_vector
        }
    };
    apply_batch(experiment, feature_fn)
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn parse_list(args: &[String], flag: &str) -> Option<Vec<i32>> {
    let raw: String = parse_flag(args, flag)?;
    Some(
        raw.split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect(),
    )
}
