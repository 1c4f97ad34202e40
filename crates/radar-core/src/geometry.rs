// File: crates/radar-core/src/geometry.rs
// Summary: Radar layout math: chart frame, ring/series vertices, closed edges and pixel bounds.

use std::f64::consts::PI;

use crate::error::{ChartError, Result};
use crate::types::Point;

/// Minimum number of axes a radar chart can be drawn with.
pub const MIN_AXES: usize = 3;

/// Square region the rings are inscribed in.
///
/// `edge` is the diameter of the outer ring. The frame is centered
/// horizontally and sits below the title with one body line of padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub edge: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl Frame {
    /// Lay out the chart body for a canvas of `width` x `height` pixels.
    pub fn for_canvas(width: i32, height: i32, title_size: i32, font_size: i32) -> Result<Self> {
        let edge = height - title_size - 2 * font_size - 10;
        if width <= 0 || edge <= 0 {
            return Err(ChartError::CanvasTooSmall { width, height });
        }
        Ok(Self {
            edge,
            x_offset: width / 2 - edge / 2,
            y_offset: title_size + font_size,
        })
    }

    pub const fn center(&self) -> Point {
        Point::new(self.edge / 2 + self.x_offset, self.edge / 2 + self.y_offset)
    }
}

/// Angle of axis `index` out of `axis_count`, clockwise from straight up.
#[inline]
pub fn axis_angle(index: usize, axis_count: usize) -> f64 {
    index as f64 * 2.0 * PI / axis_count as f64
}

/// Place a point `radius` pixels from `center` along axis angle `theta`.
#[inline]
pub fn polar_to_pixel(theta: f64, radius: f64, center: Point) -> Point {
    let x = theta.sin() * radius + center.x as f64;
    let y = -theta.cos() * radius + center.y as f64;
    Point::new(x.round() as i32, y.round() as i32)
}

fn check_axes(axis_count: usize) -> Result<()> {
    if axis_count < MIN_AXES {
        return Err(ChartError::InsufficientAxes { got: axis_count });
    }
    Ok(())
}

/// Vertices of one ring, in axis order.
///
/// `ring_ratio` is the ring value divided by the outer ring value, so the
/// outer ring has ratio 1 and a zero ring collapses onto `center`.
pub fn ring_vertices(axis_count: usize, ring_ratio: f64, edge: i32, center: Point) -> Result<Vec<Point>> {
    check_axes(axis_count)?;
    let radius = ring_ratio * edge as f64 / 2.0;
    Ok((0..axis_count)
        .map(|i| polar_to_pixel(axis_angle(i, axis_count), radius, center))
        .collect())
}

/// Vertices of one data series, one per axis.
///
/// Each value is normalized by `max_value` (the outer ring value). A value
/// equal to `max_value` lands on the outer ring vertex of its axis.
pub fn series_vertices(
    values: &[f64],
    max_value: f64,
    axis_count: usize,
    edge: i32,
    center: Point,
) -> Result<Vec<Point>> {
    check_axes(axis_count)?;
    if values.len() != axis_count {
        return Err(ChartError::DataShapeMismatch {
            series: String::new(),
            expected: axis_count,
            got: values.len(),
        });
    }
    Ok(values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let radius = v / max_value * edge as f64 / 2.0;
            polar_to_pixel(axis_angle(i, axis_count), radius, center)
        })
        .collect())
}

/// Segments of the closed outline through `points`: `(p[i], p[(i + 1) % n])`.
pub fn closed_edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Inclusive integer rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Smallest rectangle holding every point, or `None` for no points.
    pub fn bounding(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut r = Self::from_ltrb(first.x, first.y, first.x, first.y);
        for p in it {
            r.left = r.left.min(p.x);
            r.top = r.top.min(p.y);
            r.right = r.right.max(p.x);
            r.bottom = r.bottom.max(p.y);
        }
        Some(r)
    }

    pub const fn inflate(&self, by: i32) -> Self {
        Self::from_ltrb(
            self.left.saturating_sub(by),
            self.top.saturating_sub(by),
            self.right.saturating_add(by),
            self.bottom.saturating_add(by),
        )
    }

    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// Clip to a `width` x `height` pixel grid. `None` if nothing remains.
    pub fn clip_to(&self, width: i32, height: i32) -> Option<Self> {
        let r = Self::from_ltrb(
            clamp(self.left, 0, width - 1),
            clamp(self.top, 0, height - 1),
            clamp(self.right, 0, width - 1),
            clamp(self.bottom, 0, height - 1),
        );
        let disjoint = self.right < 0 || self.bottom < 0 || self.left >= width || self.top >= height;
        if disjoint || r.left > r.right || r.top > r.bottom {
            None
        } else {
            Some(r)
        }
    }
}

/// Clip the segment `p0`-`p1` to `rect` (Liang-Barsky), rounding the new
/// endpoints back onto the pixel grid. `None` when the segment misses `rect`.
pub fn clip_segment(p0: Point, p1: Point, rect: RectI32) -> Option<(Point, Point)> {
    if rect.contains(p0) && rect.contains(p1) {
        return Some((p0, p1));
    }
    let (x0, y0) = (p0.x as f64, p0.y as f64);
    let (dx, dy) = (p1.x as f64 - x0, p1.y as f64 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    let edges = [
        (-dx, x0 - rect.left as f64),
        (dx, rect.right as f64 - x0),
        (-dy, y0 - rect.top as f64),
        (dy, rect.bottom as f64 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }
    let at = |t: f64| {
        let x = (x0 + t * dx).round() as i32;
        let y = (y0 + t * dy).round() as i32;
        Point::new(clamp(x, rect.left, rect.right), clamp(y, rect.top, rect.bottom))
    };
    Some((at(t0), at(t1)))
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
