//! Plot assembly and rendering.
//!
//! - overlay accumulation with per-curve style/label metadata (`overlay`)
//! - PNG rendering via Plotters (`png`)

pub mod overlay;
pub mod png;

pub use overlay::*;
pub use png::*;
