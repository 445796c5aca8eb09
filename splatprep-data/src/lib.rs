//! Splatprep Data Crate
//!
//! Dataset preparation for Gaussian splatting and surface reconstruction:
//! splitting trainer camera files into train/test subsets and merging
//! Shelly/Blender-style train and test image folders into one `images/`
//! folder with matching manifests. All operations are single-pass and
//! synchronous.

pub mod cameras;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod images;
pub mod json;
pub mod paths;

pub use cameras::{CameraPartition, SplitConfig, SplitSummary, partition_cameras, split_cameras};
pub use dataset::{
    ReorganizeConfig, ReorganizeReport, SplitOutcome, SplitReport, process_test_split,
    process_train_split, reorganize_dataset,
};
pub use error::{PrepError, Result};
