// File: crates/radar-core/src/types.rs
// Summary: Shared types and constants (pixel points, default sizes, stroke widths, text DPI).

/// Default canvas width in pixels.
pub const WIDTH: i32 = 500;
/// Default canvas height in pixels (chart body, excluding the legend band).
pub const HEIGHT: i32 = 400;

/// Default title size, in points.
pub const TITLE_FONT_SIZE: i32 = 24;
/// Default body text size, in points.
pub const FONT_SIZE: i32 = 12;

/// Resolution used to convert point sizes to pixels.
pub const DPI: f32 = 92.0;

/// Stroke width of ring outlines.
pub const GRID_STROKE: i32 = 1;
/// Stroke width of series outlines and legend swatches.
pub const SERIES_STROKE: i32 = 3;

/// Horizontal gap between an axis vertex and its name.
pub const LABEL_MARGIN: i32 = 5;

/// Extra rows appended below the chart body when a legend is drawn.
pub const LEGEND_BAND: i32 = 50;

/// Integer pixel coordinate. `y` grows downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`.
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Convert a point size to pixels at [`DPI`].
#[inline]
pub fn points_to_px(points: f32) -> f32 {
    points * DPI / 72.0
}
