// File: crates/radar-core/src/axis.rs
// Summary: Axis model: ordered spoke names, index 0 pointing up and the rest clockwise.

use crate::error::{ChartError, Result};
use crate::geometry::MIN_AXES;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisSpec {
    pub names: Vec<String>,
}

impl AxisSpec {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.names.len() < MIN_AXES {
            return Err(ChartError::InsufficientAxes { got: self.names.len() });
        }
        Ok(())
    }
}
