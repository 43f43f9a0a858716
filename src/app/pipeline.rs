//! The overlay pipeline shared by the binary and the tests.
//!
//! One linear pass:
//! path build -> curve load -> overlay accumulate -> render
//!
//! Per-item load failures are reported and skipped; only a rendering failure
//! aborts the run.

use std::path::PathBuf;

use crate::domain::PlotConfig;
use crate::error::AppError;
use crate::io::{load_roc_curve, results_path};
use crate::plot::{self, Overlay};

/// Outputs of one plotting run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Number of run parameters attempted.
    pub attempted: usize,
    /// Number of curves actually drawn.
    pub plotted: usize,
    /// Where the image was written.
    pub image_path: PathBuf,
}

/// Execute the full pipeline: collect the overlay and write the PNG.
pub fn run_plot(config: &PlotConfig) -> Result<RunOutput, AppError> {
    // 1) Load every resolvable curve, keeping input order.
    let overlay = collect_overlay(config);

    // 2) Render, overwriting any previous image. An empty overlay still
    //    produces an image with axes and titles.
    let image_path = config.output_dir.join(plot::OUTPUT_IMAGE);
    plot::render_overlay(&image_path, &overlay)?;

    Ok(RunOutput {
        attempted: config.ntrees.len(),
        plotted: overlay.len(),
        image_path,
    })
}

/// Build the overlay for the configured run parameters.
///
/// Load failures print their diagnostic line to stderr here and are skipped.
/// The palette slot is the loop counter, not a success counter, so a failed
/// item leaves a color gap for the curves after it.
pub fn collect_overlay(config: &PlotConfig) -> Overlay {
    let mut overlay = Overlay::new();

    for (i, &ntrees) in config.ntrees.iter().enumerate() {
        let path = results_path(&config.output_dir, &config.algo, ntrees);
        let curve = match load_roc_curve(&path) {
            Ok(curve) => curve,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        overlay.add(curve, i, ntrees);
    }

    overlay
}
