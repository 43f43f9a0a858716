//! PNG rendering of the curve overlay.
//!
//! Plotters owns the whole raster pipeline; this module only describes the
//! chart. Every graphics resource (drawing area, chart context, legend) is a
//! scoped value, so all of them are released on every exit path, including
//! early error returns.

use std::path::Path;

use plotters::prelude::*;

use crate::error::AppError;
use crate::plot::overlay::{LINE_WIDTH, Overlay};

/// Fixed output file name inside the output directory.
pub const OUTPUT_IMAGE: &str = "ROC_Curves_Different_NTrees.png";

const CANVAS_SIZE: (u32, u32) = (800, 600);
const CAPTION: &str = "ROC Curves for Different NTrees";
const X_TITLE: &str = "Signal efficiency";
const Y_TITLE: &str = "Background rejection";

/// Render the overlay and write the PNG at `path`, overwriting any existing
/// file of that name.
///
/// An empty overlay still produces an image with axes and titles, just no
/// curves or legend entries.
pub fn render_overlay(path: &Path, overlay: &Overlay) -> Result<(), AppError> {
    let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    // Both ROC measures are fractions, so the axes stay fixed to [0, 1]
    // regardless of which curves loaded.
    let mut chart = ChartBuilder::on(&root)
        .caption(CAPTION, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(|e| render_error(path, e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(X_TITLE)
        .y_desc(Y_TITLE)
        .draw()
        .map_err(|e| render_error(path, e))?;

    for curve in overlay.curves() {
        let style = Palette99::pick(curve.color_index)
            .to_rgba()
            .stroke_width(LINE_WIDTH);
        chart
            .draw_series(LineSeries::new(curve.points.iter().copied(), style))
            .map_err(|e| render_error(path, e))?
            .label(&curve.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], style));
    }

    // Legend box at a fixed lower-left position, one entry per drawn curve.
    // With no curves there is nothing to annotate, so the box is skipped
    // rather than drawn as an empty frame.
    if !overlay.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerLeft)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| render_error(path, e))?;
    }

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}

fn render_error(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::render(format!(
        "Failed to render overlay PNG '{}': {err}",
        path.display()
    ))
}
