// File: crates/radar-core/src/labels.rs
// Summary: Anchor rules for ring tick labels, axis names and legend entries.

use crate::types::{Point, LABEL_MARGIN};

/// Horizontal distance between consecutive legend entries.
pub const LEGEND_SPACING: i32 = 150;
/// Length of a legend swatch stroke.
pub const SWATCH_LENGTH: i32 = 40;
/// Offset from swatch start to the legend name caret.
pub const LEGEND_TEXT_OFFSET: (i32, i32) = (45, 5);
/// Distance from the bottom of the chart body to the legend row.
pub const LEGEND_ROW_OFFSET: i32 = 20;

/// Baseline anchor for a ring's value label: midway between the ring's first
/// and last vertex, so labels stack along the edge left of the top axis.
pub fn place_ring_label(first: Point, last: Point) -> Point {
    Point::new(first.x / 2 + last.x / 2, first.y / 2 + last.y / 2)
}

/// Baseline anchor for an axis name next to its outer ring `vertex`.
///
/// * straight below the center: one line lower, clear of the axis;
/// * right of the center: a small gap to the right;
/// * left of the center: right-aligned against the vertex;
/// * straight above the center: at the vertex.
pub fn place_axis_label(vertex: Point, center: Point, font_size: i32, text_width: i32) -> Point {
    if vertex.x == center.x && vertex.y > center.y {
        vertex.shifted(0, font_size)
    } else if vertex.x > center.x {
        vertex.shifted(LABEL_MARGIN, 0)
    } else if vertex.x < center.x {
        vertex.shifted(-(text_width + LABEL_MARGIN), 0)
    } else {
        vertex
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendSlot {
    pub swatch_start: Point,
    pub swatch_end: Point,
    pub text: Point,
}

/// Left-to-right legend layout under a chart body of `body_height` rows.
pub fn legend_slots(count: usize, edge: i32, body_height: i32) -> Vec<LegendSlot> {
    let y = body_height + LEGEND_ROW_OFFSET;
    (0..count as i32)
        .map(|k| {
            let start = Point::new(edge / 2 + k * LEGEND_SPACING, y);
            LegendSlot {
                swatch_start: start,
                swatch_end: start.shifted(SWATCH_LENGTH, 0),
                text: start.shifted(LEGEND_TEXT_OFFSET.0, LEGEND_TEXT_OFFSET.1),
            }
        })
        .collect()
}
