//! Command-line parsing for the ROC overlay plotter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! curve-loading and rendering code.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "roc-overlay",
    version,
    about = "Overlay BDT ROC curves for different NTrees values into one PNG"
)]
pub struct Cli {
    /// Directory holding the per-NTrees result files. The output image is
    /// written into the same directory.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Algorithm name used in the result-file naming convention.
    #[arg(value_name = "ALGO")]
    pub algo: String,

    /// NTrees values selecting which result files to load, one curve each.
    /// May be empty, in which case an empty plot is still produced.
    #[arg(value_name = "NTREES")]
    pub ntrees: Vec<String>,
}

/// Parse one run-parameter token.
///
/// Non-integer tokens silently map to 0 (atoi semantics); no validation or
/// deduplication is applied beyond that.
pub fn parse_run_parameter(token: &str) -> i32 {
    token.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_positional_arguments() {
        let cli = Cli::try_parse_from(["roc-overlay", "results", "BDT", "50", "100"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("results"));
        assert_eq!(cli.algo, "BDT");
        assert_eq!(cli.ntrees, vec!["50".to_string(), "100".to_string()]);
    }

    #[test]
    fn run_parameter_list_may_be_empty() {
        let cli = Cli::try_parse_from(["roc-overlay", "results", "BDT"]).unwrap();
        assert!(cli.ntrees.is_empty());
    }

    #[test]
    fn rejects_single_positional_argument() {
        let err = Cli::try_parse_from(["roc-overlay", "onlyOneArg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn run_parameter_tokens_use_atoi_semantics() {
        assert_eq!(parse_run_parameter("50"), 50);
        assert_eq!(parse_run_parameter("-7"), -7);
        assert_eq!(parse_run_parameter(" 200 "), 200);
        assert_eq!(parse_run_parameter("abc"), 0);
        assert_eq!(parse_run_parameter("12.5"), 0);
        assert_eq!(parse_run_parameter(""), 0);
    }
}
