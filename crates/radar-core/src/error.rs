// File: crates/radar-core/src/error.rs
// Summary: Structured errors surfaced by validation, font loading, rendering and encoding.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The configured font file could not be read or parsed.
    #[error("cannot load font {path:?}: {detail}")]
    FontLoad { path: PathBuf, detail: String },

    #[error("a radar chart needs at least 3 axes, got {got}")]
    InsufficientAxes { got: usize },

    /// A series does not carry exactly one value per axis.
    #[error("series '{series}' has {got} values but the chart has {expected} axes")]
    DataShapeMismatch { series: String, expected: usize, got: usize },

    #[error("ring scale is empty")]
    EmptyRings,

    /// The outer ring value is the normalization denominator.
    #[error("outer ring value must be positive and finite, got {max}")]
    InvalidRingMax { max: f64 },

    /// Every ring must lie on or inside the outer ring.
    #[error("ring {index} value {value} is outside the outer ring value {max}")]
    RingOutOfRange { index: usize, value: f64, max: f64 },

    /// Text is drawn through a premultiplied view of the canvas, which is
    /// only exact while every pixel is opaque.
    #[error("theme background must be opaque, got alpha {alpha}")]
    TranslucentBackground { alpha: u8 },

    #[error("canvas {width}x{height} leaves no room for the chart body")]
    CanvasTooSmall { width: i32, height: i32 },

    #[error("image encoding failed")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
