// File: crates/radar-core/src/lib.rs
// Summary: Core library entry point; exports the radar chart model, render pipeline and raster primitives.

pub mod axis;
pub mod canvas;
pub mod chart;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod grid;
pub mod labels;
pub mod raster;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::AxisSpec;
pub use canvas::Canvas;
pub use chart::{ChartData, RadarChart, RenderOptions};
pub use error::{ChartError, Result};
pub use grid::RingScale;
pub use series::{DrawDatum, Series};
pub use text::{BlankText, GlyphProvider, SkiaFace};
pub use theme::Theme;
pub use types::Point;
