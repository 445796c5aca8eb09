//! Merge the train and test folders of a Shelly/Blender dataset into `images/`.

use clap::Parser;
use splatprep_app::{LoggingConfig, init_logging};
use splatprep_data::{ReorganizeConfig, SplitOutcome, reorganize_dataset};
use std::path::PathBuf;
use tracing::{error, info};

/// Preprocess a Shelly/Blender dataset for surface reconstruction
#[derive(Parser, Debug)]
#[command(name = "preprocess-shelly")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the dataset root
    #[arg(short, long)]
    path: PathBuf,
}

fn describe(outcome: &SplitOutcome) -> String {
    match outcome {
        SplitOutcome::Processed(report) => format!(
            "{} copied, {} renamed, {} frames",
            report.copied, report.renamed, report.frames
        ),
        SplitOutcome::Skipped { .. } => "skipped".to_string(),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(&LoggingConfig::default());

    match reorganize_dataset(&ReorganizeConfig::new(args.path)) {
        Ok(report) => info!(
            "Done. train: {}; test: {}",
            describe(&report.train),
            describe(&report.test)
        ),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
