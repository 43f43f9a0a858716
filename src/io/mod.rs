//! Input helpers.
//!
//! - results-file path construction + ROC curve loading (`results`)

pub mod results;

pub use results::*;
