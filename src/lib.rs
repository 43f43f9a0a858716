//! `roc-overlay` library crate.
//!
//! The binary (`roc-overlay`) is a thin wrapper around this library so that:
//!
//! - the plotting pipeline is testable without spawning processes
//! - modules stay reusable (e.g., driving the loader from another tool)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
