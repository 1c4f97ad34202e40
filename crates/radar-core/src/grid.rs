// File: crates/radar-core/src/grid.rs
// Summary: Reference ring scale (outer to inner) and evenly spaced ring helpers.

use crate::error::{ChartError, Result};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Ring values from the outer ring inwards. The first value is the
/// normalization maximum for every ring and series.
#[derive(Clone, Debug, PartialEq)]
pub struct RingScale {
    pub values: Vec<f64>,
}

impl RingScale {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// `count` rings from `max` down to 0.
    pub fn linear(max: f64, count: usize) -> Self {
        Self::new(linspace(max, 0.0, count))
    }

    pub fn max(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn validate(&self) -> Result<f64> {
        let max = self.max().ok_or(ChartError::EmptyRings)?;
        if !max.is_finite() || max <= 0.0 {
            return Err(ChartError::InvalidRingMax { max });
        }
        for (index, &value) in self.values.iter().enumerate().skip(1) {
            // NaN fails the comparison too.
            if !(value.is_finite() && value <= max) {
                return Err(ChartError::RingOutOfRange { index, value, max });
            }
        }
        Ok(max)
    }

    /// Ring values paired with their ratio to the outer ring.
    pub fn ratios(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let max = self.max().unwrap_or(1.0);
        self.values.iter().map(move |&v| (v, v / max))
    }
}

impl Default for RingScale {
    fn default() -> Self {
        Self::linear(100.0, 6)
    }
}

/// Tick label text: integral values print without a fractional part.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
