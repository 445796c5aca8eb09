//! Reorganizing a Shelly/Blender-style dataset into a single image folder.
//!
//! The source layout keeps train and test images in separate folders that
//! reuse the same file names (`train/0001.png`, `test/0001.png`). Trainers
//! that expect one `images/` folder need them merged, so test images are
//! renamed with a `test_` prefix, both sets are copied into `images/`, and
//! the `file_path` of every frame in `transforms_{train,test}.json` is
//! rewritten to the new extension-less location.

use crate::constants::{
    FRAME_PATH_FIELD, FRAMES_FIELD, IMAGES_DIR, TEST_DIR, TEST_IMAGE_PREFIX, TEST_MANIFEST,
    TRAIN_DIR, TRAIN_MANIFEST,
};
use crate::error::{PrepError, Result};
use crate::images::{copy_images, prefix_images};
use crate::json::{read_json, write_json};
use crate::paths::{rewrite_test_path, rewrite_train_path};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration for [`reorganize_dataset`].
#[derive(Debug, Clone)]
pub struct ReorganizeConfig {
    pub root: PathBuf,
    pub train_dir: String,
    pub test_dir: String,
    pub images_dir: String,
    pub train_manifest: String,
    pub test_manifest: String,
    pub test_prefix: String,
}

impl ReorganizeConfig {
    /// Default layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            train_dir: TRAIN_DIR.to_string(),
            test_dir: TEST_DIR.to_string(),
            images_dir: IMAGES_DIR.to_string(),
            train_manifest: TRAIN_MANIFEST.to_string(),
            test_manifest: TEST_MANIFEST.to_string(),
            test_prefix: TEST_IMAGE_PREFIX.to_string(),
        }
    }

    /// Override the prefix given to test images.
    pub fn with_test_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.test_prefix = prefix.into();
        self
    }

    pub fn train_dir_path(&self) -> PathBuf {
        self.root.join(&self.train_dir)
    }

    pub fn test_dir_path(&self) -> PathBuf {
        self.root.join(&self.test_dir)
    }

    pub fn images_dir_path(&self) -> PathBuf {
        self.root.join(&self.images_dir)
    }

    pub fn train_manifest_path(&self) -> PathBuf {
        self.root.join(&self.train_manifest)
    }

    pub fn test_manifest_path(&self) -> PathBuf {
        self.root.join(&self.test_manifest)
    }
}

/// What a processed split did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Images renamed in place (test split only).
    pub renamed: usize,
    /// Images copied into the shared image folder.
    pub copied: usize,
    /// Frames whose path was rewritten.
    pub frames: usize,
}

/// Result of one sub-operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    Processed(SplitReport),
    /// A required folder or manifest was missing; nothing was touched.
    Skipped { missing: Vec<PathBuf> },
}

impl SplitOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, SplitOutcome::Processed(_))
    }

    pub fn report(&self) -> Option<&SplitReport> {
        match self {
            SplitOutcome::Processed(report) => Some(report),
            SplitOutcome::Skipped { .. } => None,
        }
    }
}

/// Outcome of both sub-operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorganizeReport {
    pub train: SplitOutcome,
    pub test: SplitOutcome,
}

/// Run the train sub-operation, then the test sub-operation.
///
/// The shared image folder is created first. A sub-operation whose inputs
/// are missing is skipped with a warning and does not prevent the other
/// from running.
#[tracing::instrument(skip_all, fields(root = %config.root.display()))]
pub fn reorganize_dataset(config: &ReorganizeConfig) -> Result<ReorganizeReport> {
    info!("Processing dataset at: {}", config.root.display());
    let images_dir = config.images_dir_path();
    fs::create_dir_all(&images_dir).map_err(|e| PrepError::io(&images_dir, e))?;
    let train = process_train_split(config)?;
    let test = process_test_split(config)?;
    Ok(ReorganizeReport { train, test })
}

/// Copy train images into the shared folder and repoint the train manifest.
pub fn process_train_split(config: &ReorganizeConfig) -> Result<SplitOutcome> {
    let src_dir = config.train_dir_path();
    let manifest_path = config.train_manifest_path();
    if let Some(missing) = missing_inputs(&src_dir, &manifest_path) {
        warn!(
            "'{}' folder or '{}' not found, skipping train split",
            config.train_dir, config.train_manifest
        );
        return Ok(SplitOutcome::Skipped { missing });
    }
    info!("Processing train data");

    let copied = copy_images(&src_dir, &config.images_dir_path())?;
    let frames = rewrite_manifest(&manifest_path, |path| {
        rewrite_train_path(path, &config.train_dir, &config.images_dir)
    })?;

    info!(
        "Train: {} images copied to '{}', {} frames updated",
        copied, config.images_dir, frames
    );
    Ok(SplitOutcome::Processed(SplitReport {
        renamed: 0,
        copied,
        frames,
    }))
}

/// Prefix test images, copy them into the shared folder and repoint the test manifest.
pub fn process_test_split(config: &ReorganizeConfig) -> Result<SplitOutcome> {
    let src_dir = config.test_dir_path();
    let manifest_path = config.test_manifest_path();
    if let Some(missing) = missing_inputs(&src_dir, &manifest_path) {
        warn!(
            "'{}' folder or '{}' not found, skipping test split",
            config.test_dir, config.test_manifest
        );
        return Ok(SplitOutcome::Skipped { missing });
    }
    info!("Processing test data");

    // The copy pass lists the folder again, so every rename must land first.
    let renamed = prefix_images(&src_dir, &config.test_prefix)?;
    let copied = copy_images(&src_dir, &config.images_dir_path())?;
    let frames = rewrite_manifest(&manifest_path, |path| {
        rewrite_test_path(path, &config.images_dir, &config.test_prefix)
    })?;

    info!(
        "Test: {} images renamed, {} copied to '{}', {} frames updated",
        renamed, copied, config.images_dir, frames
    );
    Ok(SplitOutcome::Processed(SplitReport {
        renamed,
        copied,
        frames,
    }))
}

/// Rewrite the path field of every frame in the manifest at `path` and save it.
///
/// Frames without a string path are handed `""`. Returns the number of frames.
pub fn rewrite_manifest<F>(path: &Path, rewrite: F) -> Result<usize>
where
    F: Fn(&str) -> String,
{
    let mut manifest = read_json(path)?;
    let frames = rewrite_frames(&mut manifest, rewrite)
        .ok_or_else(|| PrepError::MissingFrames(path.to_path_buf()))?;
    write_json(path, &manifest)?;
    Ok(frames)
}

/// Rewrite frame paths in place. `None` when the manifest has no `frames` array.
pub fn rewrite_frames<F>(manifest: &mut Value, rewrite: F) -> Option<usize>
where
    F: Fn(&str) -> String,
{
    let frames = manifest.get_mut(FRAMES_FIELD)?.as_array_mut()?;
    for frame in frames.iter_mut() {
        let new_path = rewrite(frame_path(frame));
        if let Some(fields) = frame.as_object_mut() {
            fields.insert(FRAME_PATH_FIELD.to_string(), Value::String(new_path));
        }
    }
    Some(frames.len())
}

/// Path of a frame record, or `""` when absent or not a string.
pub fn frame_path(frame: &Value) -> &str {
    frame
        .get(FRAME_PATH_FIELD)
        .and_then(Value::as_str)
        .unwrap_or("")
}

fn missing_inputs(dir: &Path, manifest: &Path) -> Option<Vec<PathBuf>> {
    let missing: Vec<PathBuf> = [dir, manifest]
        .into_iter()
        .filter(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect();
    (!missing.is_empty()).then_some(missing)
}
