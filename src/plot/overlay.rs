//! Overlay accumulation.
//!
//! The overlay is a render-only description: all curves and styles are
//! decided here, outside the render call, which keeps the renderer focused
//! on drawing and makes the accumulation logic testable without a canvas.

use crate::domain::RocCurve;

/// Line width shared by every curve in the overlay.
pub const LINE_WIDTH: u32 = 2;

/// One curve staged for rendering.
#[derive(Debug, Clone)]
pub struct OverlayCurve {
    /// Legend label, derived from the run parameter.
    pub label: String,
    /// Palette slot. This is the caller's loop counter over the run-parameter
    /// list, so a failed attempt leaves a visible gap in the palette.
    pub color_index: usize,
    pub points: Vec<(f64, f64)>,
}

/// A render-ready collection of styled curves.
///
/// Curves keep input iteration order filtered by load success, and the
/// overlay has exactly one consumer: the PNG renderer.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    curves: Vec<OverlayCurve>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage one loaded curve with its legend label and palette slot.
    pub fn add(&mut self, curve: RocCurve, color_index: usize, ntrees: i32) {
        self.curves.push(OverlayCurve {
            label: format!("NTrees = {ntrees}"),
            color_index,
            points: curve.points,
        });
    }

    pub fn curves(&self) -> &[OverlayCurve] {
        &self.curves
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }
}
