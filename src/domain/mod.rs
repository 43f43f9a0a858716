//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the resolved run configuration (`PlotConfig`)
//! - the detached ROC curve (`RocCurve`)
//! - the on-disk curve payload schema (`CurvePayload`)

pub mod types;

pub use types::*;
