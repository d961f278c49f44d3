// Experiment persistence: a small JSON blob store.
//
// The analysis engine only needs round-trip fidelity for arbitrary nested
// serde structures (experiments, feature records), so load and save are
// generic over any serde type rather than tied to engine types. Saving is
// atomic at this boundary: the JSON is written to a sibling temp file and
// renamed into place, so a failed write never leaves a half-written
// experiment behind.
//
// `ExperimentHandler` scopes both operations to a base directory, and
// `experiment_file_name` produces the conventional
// "{name} - {date} - v{version}.json" file names.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a JSON-serialized value from a file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Save a value as pretty-printed JSON, atomically.
///
/// Parent directories are created as needed. The data is written to a
/// ".tmp"-suffixed sibling first and renamed over the destination, so
/// readers never observe a partial file.
pub fn save<T: Serialize>(value: &T, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Conventional experiment file name: "{name} - {date} - v{version}.json".
pub fn experiment_file_name(name: &str, date: &str, version: &str) -> String {
    format!("{} - {} - v{}.json", name, date, version)
}

/// Load/save scoped to a base directory.
pub struct ExperimentHandler {
    base_addr: PathBuf,
}

impl ExperimentHandler {
    pub fn new(base_addr: impl Into<PathBuf>) -> Self {
        ExperimentHandler {
            base_addr: base_addr.into(),
        }
    }

    pub fn read<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, Box<dyn Error>> {
        load(&self.base_addr.join(file_name))
    }

    pub fn write<T: Serialize>(&self, value: &T, file_name: &str) -> Result<(), Box<dyn Error>> {
        save(value, &self.base_addr.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Nested {
        name: String,
        values: Vec<f64>,
        table: BTreeMap<String, Vec<i32>>,
    }

    fn sample() -> Nested {
        let mut table = BTreeMap::new();
        table.insert("chord_0".to_string(), vec![0, 4, 7]);
        table.insert("chord_1".to_string(), vec![2, 5, 9]);
        Nested {
            name: "round trip".to_string(),
            values: vec![0.0, 1.5, -3.25],
            table,
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        let original = sample();
        save(&original, &path).unwrap();
        let loaded: Nested = load(&path).unwrap();
        assert_eq!(loaded, original);
        // No temp file left behind.
        assert!(!dir.path().join("sample.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/sample.json");
        save(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_reports_cause() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Nested, _> = load(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_handler_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let handler = ExperimentHandler::new(dir.path());
        let file_name = experiment_file_name("triads", "2024-05-01", "1.0");
        assert_eq!(file_name, "triads - 2024-05-01 - v1.0.json");
        handler.write(&sample(), &file_name).unwrap();
        let loaded: Nested = handler.read(&file_name).unwrap();
        assert_eq!(loaded, sample());
    }
}
