//! Locate and load per-NTrees result files.
//!
//! Result files are produced by an external evaluation tool; this module is
//! a strict consumer of their layout:
//!
//! - naming convention `{outputDir}/{algo}_NTrees{N}.json`
//! - a nested container at the logical path `dataset/Method_BDT/BDT`
//! - a named curve object `MVA_BDT_rejBvsS` holding `x`/`y` coordinate arrays
//!
//! Every failure here is recoverable and returned as a `LoadError` whose
//! `Display` is the diagnostic line; the caller decides where to print it
//! and continues with the rest of the run-parameter list.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::{CurvePayload, RocCurve};

/// Fixed container path inside each results file.
const METHOD_DIR: [&str; 3] = ["dataset", "Method_BDT", "BDT"];

/// Fixed name of the curve object inside the container.
const CURVE_NAME: &str = "MVA_BDT_rejBvsS";

/// Why one results file yielded no curve.
///
/// Each variant names the failing path; the rendered message is the exact
/// diagnostic line emitted for that run parameter.
#[derive(Debug, Clone)]
pub enum LoadError {
    /// The file could not be opened.
    Open { path: PathBuf, detail: String },
    /// The file opened but is not a readable document.
    Unreadable { path: PathBuf, detail: String },
    /// The fixed container path is absent.
    MissingMethodDir { path: PathBuf },
    /// The container exists but holds no curve object of the fixed name.
    MissingCurve { path: PathBuf },
    /// The curve object exists but its payload is malformed.
    MalformedCurve { path: PathBuf, detail: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Open { path, detail } => {
                write!(f, "Error: Could not open file {}: {detail}", path.display())
            }
            LoadError::Unreadable { path, detail } => {
                write!(
                    f,
                    "Error: Unreadable results file {}: {detail}",
                    path.display()
                )
            }
            LoadError::MissingMethodDir { path } => {
                write!(
                    f,
                    "Error: Could not find BDT directory in file {}",
                    path.display()
                )
            }
            LoadError::MissingCurve { path } => {
                write!(
                    f,
                    "Error: Could not find ROC curve in file {}",
                    path.display()
                )
            }
            LoadError::MalformedCurve { path, detail } => {
                write!(
                    f,
                    "Error: Malformed ROC curve in file {}: {detail}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Build the results-file path for one run parameter.
///
/// Pure template substitution; neither the directory nor the algorithm name
/// is validated.
pub fn results_path(output_dir: &Path, algo: &str, ntrees: i32) -> PathBuf {
    output_dir.join(format!("{algo}_NTrees{ntrees}.json"))
}

/// Load the ROC curve from one results file.
///
/// On success the curve owns its points; the file handle and parsed document
/// are dropped before returning. On failure the returned `LoadError` renders
/// the diagnostic line for that run parameter.
pub fn load_roc_curve(path: &Path) -> Result<RocCurve, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Open {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let root: Value = serde_json::from_reader(file).map_err(|e| LoadError::Unreadable {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let dir = method_dir(&root).ok_or_else(|| LoadError::MissingMethodDir {
        path: path.to_path_buf(),
    })?;

    let curve = dir.get(CURVE_NAME).ok_or_else(|| LoadError::MissingCurve {
        path: path.to_path_buf(),
    })?;

    let payload: CurvePayload =
        serde_json::from_value(curve.clone()).map_err(|e| LoadError::MalformedCurve {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    payload.into_curve().ok_or_else(|| LoadError::MalformedCurve {
        path: path.to_path_buf(),
        detail: "x/y length mismatch".to_string(),
    })
}

/// Walk the fixed container path, short-circuiting on the first missing level.
fn method_dir(root: &Value) -> Option<&Value> {
    METHOD_DIR.iter().try_fold(root, |v, key| v.get(key))
}
