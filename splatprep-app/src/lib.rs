//! Splatprep Application
//!
//! Shared setup for the dataset preparation binaries:
//! - `filter-cameras`: split a trainer's `cameras.json` into train and test
//! - `preprocess-shelly`: merge a Shelly/Blender dataset into one `images/` folder

pub mod logging;

pub use logging::{LoggingConfig, init_logging};
