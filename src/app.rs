//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - maps argument failures to the documented exit code
//! - runs the overlay pipeline

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::{self, Cli};
use crate::domain::PlotConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `roc-overlay` binary.
pub fn run() -> Result<(), AppError> {
    run_from(std::env::args())
}

/// Run the pipeline for an explicit argv list.
///
/// Missing positional arguments must exit with status 1 rather than clap's
/// default of 2, so parse failures are surfaced as an `AppError` carrying
/// clap's rendered usage text (printed to stderr by `main`).
pub fn run_from<I, T>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // `--help` / `--version` go to stdout and are a normal exit.
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(AppError::usage(err.to_string())),
    };

    let config = plot_config_from_cli(&cli);
    pipeline::run_plot(&config)?;
    Ok(())
}

pub fn plot_config_from_cli(cli: &Cli) -> PlotConfig {
    PlotConfig {
        output_dir: cli.output_dir.clone(),
        algo: cli.algo.clone(),
        ntrees: cli
            .ntrees
            .iter()
            .map(|t| cli::parse_run_parameter(t))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_resolves_run_parameters() {
        let cli = Cli::try_parse_from(["roc-overlay", "results", "BDT", "50", "junk", "100"])
            .unwrap();
        let config = plot_config_from_cli(&cli);

        assert_eq!(config.output_dir, std::path::PathBuf::from("results"));
        assert_eq!(config.algo, "BDT");
        // Non-integer tokens keep their position as 0.
        assert_eq!(config.ntrees, vec![50, 0, 100]);
    }

    #[test]
    fn single_positional_argument_exits_1_with_usage() {
        let err = run_from(["roc-overlay", "onlyOneArg"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);

        let msg = err.to_string();
        assert!(msg.contains("Usage"));
        assert!(msg.contains("ALGO"));
    }

    #[test]
    fn no_arguments_also_exit_1() {
        let err = run_from(["roc-overlay"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("Usage"));
    }
}
