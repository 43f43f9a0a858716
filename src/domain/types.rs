//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - deserialized straight out of results files
//! - held in-memory across the accumulate/render pass

use std::path::PathBuf;

use serde::Deserialize;

/// Run configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Directory holding the result files and receiving the output image.
    pub output_dir: PathBuf,
    /// Algorithm name used in the result-file naming convention.
    pub algo: String,
    /// Run parameters in input order, one candidate curve per entry.
    pub ntrees: Vec<i32>,
}

/// A ROC curve detached from its source file.
///
/// Points are `(signal efficiency, background rejection)` pairs in the order
/// the producing tool wrote them.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub points: Vec<(f64, f64)>,
}

/// On-disk payload of the named curve object inside a results file.
///
/// The producing tool stores the two coordinate arrays separately; they must
/// agree in length.
#[derive(Debug, Clone, Deserialize)]
pub struct CurvePayload {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurvePayload {
    /// Zip the coordinate arrays into an owned curve.
    ///
    /// Returns `None` when the arrays disagree in length, which counts as a
    /// corrupt curve object.
    pub fn into_curve(self) -> Option<RocCurve> {
        if self.x.len() != self.y.len() {
            return None;
        }
        Some(RocCurve {
            points: self.x.into_iter().zip(self.y).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_zips_coordinates_in_order() {
        let payload = CurvePayload {
            x: vec![0.0, 0.5, 1.0],
            y: vec![1.0, 0.8, 0.0],
        };
        let curve = payload.into_curve().unwrap();
        assert_eq!(curve.points, vec![(0.0, 1.0), (0.5, 0.8), (1.0, 0.0)]);
    }

    #[test]
    fn payload_with_mismatched_lengths_is_rejected() {
        let payload = CurvePayload {
            x: vec![0.0, 1.0],
            y: vec![1.0],
        };
        assert!(payload.into_curve().is_none());
    }
}
