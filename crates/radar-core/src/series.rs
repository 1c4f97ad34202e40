// File: crates/radar-core/src/series.rs
// Summary: Series model: named per-axis values with stroke and optional fill colors.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// One (axis name, value) pair of a single-series chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawDatum {
    pub name: String,
    pub value: f64,
}

impl DrawDatum {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }
}

/// A named polygon: one value per axis, in axis order.
#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    pub stroke: skia::Color,
    /// Interior color. `None`, or any color with alpha 0, disables the fill.
    pub fill: Option<skia::Color>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>, stroke: skia::Color) -> Self {
        Self { name: name.into(), values, stroke, fill: None }
    }

    pub fn with_fill(mut self, fill: skia::Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Fill color if it would paint anything.
    pub fn visible_fill(&self) -> Option<skia::Color> {
        self.fill.filter(|c| c.a() > 0)
    }

    /// Check that the series has exactly `axis_count` values.
    pub fn check_shape(&self, axis_count: usize) -> Result<()> {
        if self.values.len() != axis_count {
            return Err(ChartError::DataShapeMismatch {
                series: self.name.clone(),
                expected: axis_count,
                got: self.values.len(),
            });
        }
        Ok(())
    }
}
