//! Split `cameras.json` so surface extraction only sees training cameras.

use clap::Parser;
use splatprep_app::{LoggingConfig, init_logging};
use splatprep_data::{SplitConfig, split_cameras};
use std::path::PathBuf;
use tracing::{error, info};

/// Filter cameras.json to isolate training cameras
#[derive(Parser, Debug)]
#[command(name = "filter-cameras")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the model output directory (e.g. output/vanilla_gs/khady)
    #[arg(short = 'm', long = "model_path")]
    model_path: PathBuf,
}

fn main() {
    let args = Args::parse();
    init_logging(&LoggingConfig::default());

    match split_cameras(&SplitConfig::new(args.model_path)) {
        Ok(summary) => info!(
            "Done: {} train / {} test cameras (backup at {})",
            summary.train,
            summary.test,
            summary.backup_path.display()
        ),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_model_path_flags() {
        let args = Args::try_parse_from(["filter-cameras", "--model_path", "output/khady"]).unwrap();
        assert_eq!(args.model_path, PathBuf::from("output/khady"));
        let args = Args::try_parse_from(["filter-cameras", "-m", "out"]).unwrap();
        assert_eq!(args.model_path, PathBuf::from("out"));
        assert!(Args::try_parse_from(["filter-cameras"]).is_err());
    }
}
