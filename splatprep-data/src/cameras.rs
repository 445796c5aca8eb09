//! Splitting `cameras.json` into train and test subsets.
//!
//! The splatting trainer writes one camera array covering every image it
//! saw. Surface extraction must only see the training cameras, so the array
//! is partitioned by image name, the test cameras are set aside for later
//! evaluation, and `cameras.json` is overwritten with the train subset. A
//! byte-identical backup of the original is written first.

use crate::constants::{
    CAMERA_NAME_FIELD, CAMERA_TEST_MARKER, CAMERAS_BACKUP_FILE, CAMERAS_FILE, CAMERAS_TEST_FILE,
    CAMERAS_TRAIN_FILE,
};
use crate::error::{PrepError, Result};
use crate::json::{read_json, write_json};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Configuration for [`split_cameras`].
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub model_dir: PathBuf,
    pub cameras_file: String,
    pub backup_file: String,
    pub train_file: String,
    pub test_file: String,
    pub name_field: String,
    pub test_marker: String,
}

impl SplitConfig {
    /// Default file names inside `model_dir`.
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            cameras_file: CAMERAS_FILE.to_string(),
            backup_file: CAMERAS_BACKUP_FILE.to_string(),
            train_file: CAMERAS_TRAIN_FILE.to_string(),
            test_file: CAMERAS_TEST_FILE.to_string(),
            name_field: CAMERA_NAME_FIELD.to_string(),
            test_marker: CAMERA_TEST_MARKER.to_string(),
        }
    }

    /// Override the record field holding the image name.
    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        self.name_field = field.into();
        self
    }

    /// Override the prefix that marks a test camera.
    pub fn with_test_marker(mut self, marker: impl Into<String>) -> Self {
        self.test_marker = marker.into();
        self
    }

    pub fn cameras_path(&self) -> PathBuf {
        self.model_dir.join(&self.cameras_file)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.model_dir.join(&self.backup_file)
    }

    pub fn train_path(&self) -> PathBuf {
        self.model_dir.join(&self.train_file)
    }

    pub fn test_path(&self) -> PathBuf {
        self.model_dir.join(&self.test_file)
    }
}

/// Camera records split into train and test, each in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraPartition {
    pub train: Vec<Value>,
    pub test: Vec<Value>,
}

/// Outcome of a successful [`split_cameras`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub total: usize,
    pub train: usize,
    pub test: usize,
    pub backup_path: PathBuf,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
}

/// Name of a camera record, or `""` when the field is absent or not a string.
pub fn camera_name<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or("")
}

/// Send records whose name starts with `marker` to `test`, everything else to `train`.
pub fn partition_cameras(records: Vec<Value>, field: &str, marker: &str) -> CameraPartition {
    let mut partition = CameraPartition::default();
    for record in records {
        if camera_name(&record, field).starts_with(marker) {
            partition.test.push(record);
        } else {
            partition.train.push(record);
        }
    }
    partition
}

/// Back up, partition and rewrite the camera file described by `config`.
///
/// Nothing is touched when the camera file is missing. Once the backup has
/// been written, a parse failure leaves the original in place.
#[tracing::instrument(skip_all, fields(model_dir = %config.model_dir.display()))]
pub fn split_cameras(config: &SplitConfig) -> Result<SplitSummary> {
    let cameras_path = config.cameras_path();
    if !cameras_path.exists() {
        return Err(PrepError::MissingFile(cameras_path));
    }
    info!("Processing: {}", cameras_path.display());

    let backup_path = config.backup_path();
    fs::copy(&cameras_path, &backup_path).map_err(|e| PrepError::io(&cameras_path, e))?;
    info!("Backup created at: {}", backup_path.display());

    let records = load_records(&cameras_path)?;
    let total = records.len();
    let partition = partition_cameras(records, &config.name_field, &config.test_marker);

    info!("Total cameras: {}", total);
    info!("Train cameras found: {}", partition.train.len());
    info!("Test cameras found:  {}", partition.test.len());

    let test_path = config.test_path();
    write_json(&test_path, &partition.test)?;
    info!("Saved test cameras to: {}", test_path.display());

    let train_path = config.train_path();
    write_json(&train_path, &partition.train)?;
    write_json(&cameras_path, &partition.train)?;
    info!(
        "{} overwritten with training data only",
        cameras_path.display()
    );

    Ok(SplitSummary {
        total,
        train: partition.train.len(),
        test: partition.test.len(),
        backup_path,
        train_path,
        test_path,
    })
}

fn load_records(path: &Path) -> Result<Vec<Value>> {
    match read_json(path)? {
        Value::Array(records) => Ok(records),
        _ => Err(PrepError::NotAnArray(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(records: &[Value]) -> Vec<&str> {
        records.iter().map(|r| camera_name(r, "img_name")).collect()
    }

    #[test]
    fn test_partition_by_marker() {
        let records = vec![
            json!({"img_name": "r_0001", "id": 0}),
            json!({"img_name": "test_0001", "id": 1}),
            json!({"img_name": "r_0002", "id": 2}),
            json!({"img_name": "testing", "id": 3}),
        ];
        let partition = partition_cameras(records, "img_name", "test");
        assert_eq!(names(&partition.train), vec!["r_0001", "r_0002"]);
        assert_eq!(names(&partition.test), vec!["test_0001", "testing"]);
    }

    #[test]
    fn test_partition_conserves_records() {
        let records: Vec<Value> = (0..25)
            .map(|i| {
                let name = if i % 3 == 0 { format!("test_{i:04}") } else { format!("r_{i:04}") };
                json!({"img_name": name, "id": i})
            })
            .collect();
        let partition = partition_cameras(records.clone(), "img_name", "test");

        assert_eq!(partition.train.len() + partition.test.len(), records.len());
        for record in &records {
            let hits = partition.train.iter().chain(&partition.test).filter(|r| *r == record).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_missing_or_odd_name_goes_to_train() {
        let records = vec![
            json!({"id": 0}),
            json!({"img_name": null}),
            json!({"img_name": 7}),
            json!("test_not_an_object"),
        ];
        let partition = partition_cameras(records, "img_name", "test");
        assert_eq!(partition.train.len(), 4);
        assert!(partition.test.is_empty());
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let partition = partition_cameras(vec![json!({"img_name": "Test_0001"})], "img_name", "test");
        assert_eq!(partition.train.len(), 1);
    }

    #[test]
    fn test_config_paths() {
        let config = SplitConfig::new("output/khady");
        assert_eq!(config.cameras_path(), Path::new("output/khady/cameras.json"));
        assert_eq!(
            config.backup_path(),
            Path::new("output/khady/cameras_original_backup.json")
        );
        assert_eq!(config.train_path(), Path::new("output/khady/cameras_train.json"));
        assert_eq!(config.test_path(), Path::new("output/khady/cameras_test.json"));
    }
}
