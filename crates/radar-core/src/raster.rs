// File: crates/radar-core/src/raster.rs
// Summary: Straight-segment rasterization: aliased integer walk for hairlines, anti-aliased capsules otherwise.
//
// Segments are first rasterized into a coverage mask, then composited. A
// pixel touched by several segments of one outline keeps its highest
// coverage and is blended once, so joins are no darker than edges.

use skia_safe as skia;

use crate::canvas::Canvas;
use crate::geometry::{clip_segment, closed_edges, RectI32};
use crate::types::Point;

/// Per-pixel stroke coverage over a region of the canvas.
#[derive(Clone, Debug)]
pub struct CoverageMask {
    bounds: RectI32,
    coverage: Vec<f32>,
}

impl CoverageMask {
    /// Mask covering `points` plus `pad` pixels, clipped to the canvas.
    /// `None` when nothing of it lands on the canvas.
    pub fn around(canvas: &Canvas, points: &[Point], pad: i32) -> Option<Self> {
        let bounds = RectI32::bounding(points.iter().copied())?
            .inflate(pad)
            .clip_to(canvas.width(), canvas.height())?;
        let w = (bounds.right - bounds.left + 1) as usize;
        let h = (bounds.bottom - bounds.top + 1) as usize;
        Some(Self { bounds, coverage: vec![0.0; w * h] })
    }

    pub fn bounds(&self) -> RectI32 {
        self.bounds
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(Point::new(x, y)) {
            return None;
        }
        let w = (self.bounds.right - self.bounds.left + 1) as usize;
        Some((y - self.bounds.top) as usize * w + (x - self.bounds.left) as usize)
    }

    /// Coverage at `(x, y)`; 0 outside the mask.
    pub fn get(&self, x: i32, y: i32) -> f32 {
        self.index(x, y).map_or(0.0, |i| self.coverage[i])
    }

    /// Raise the coverage at `(x, y)` to `value` if it is higher.
    #[inline]
    pub fn raise(&mut self, x: i32, y: i32, value: f32) {
        if let Some(i) = self.index(x, y) {
            let c = &mut self.coverage[i];
            *c = c.max(value.min(1.0));
        }
    }

    /// Add a 1 px aliased segment, clipped to the mask first.
    pub fn add_hairline(&mut self, p0: Point, p1: Point) {
        let Some((a, b)) = clip_segment(p0, p1, self.bounds) else {
            return;
        };
        for p in hairline_pixels(a, b) {
            self.raise(p.x, p.y, 1.0);
        }
    }

    /// Add a capsule of diameter `width` with round caps.
    ///
    /// Coverage falls off linearly over the outermost pixel.
    pub fn add_capsule(&mut self, p0: Point, p1: Point, width: f32) {
        let radius = width / 2.0;
        let Some(seg) = RectI32::bounding([p0, p1]).map(|r| r.inflate(capsule_pad(width))) else {
            return;
        };
        let r = RectI32::from_ltrb(
            seg.left.max(self.bounds.left),
            seg.top.max(self.bounds.top),
            seg.right.min(self.bounds.right),
            seg.bottom.min(self.bounds.bottom),
        );
        for y in r.top..=r.bottom {
            for x in r.left..=r.right {
                let d = distance_to_segment(x as f32, y as f32, p0, p1);
                let coverage = radius + 0.5 - d;
                if coverage > 0.0 {
                    self.raise(x, y, coverage);
                }
            }
        }
    }

    /// Add a segment of stroke `width`: hairline at 1 px or less, capsule above.
    pub fn add_segment(&mut self, p0: Point, p1: Point, width: i32) {
        if width <= 1 {
            self.add_hairline(p0, p1);
        } else {
            self.add_capsule(p0, p1, width as f32);
        }
    }

    /// Blend `color` once into every covered pixel. Returns the pixel count.
    pub fn composite(&self, canvas: &mut Canvas, color: skia::Color) -> usize {
        let mut blended = 0;
        for y in self.bounds.top..=self.bounds.bottom {
            for x in self.bounds.left..=self.bounds.right {
                let c = self.get(x, y);
                if c > 0.0 {
                    canvas.blend(x, y, color, c);
                    blended += 1;
                }
            }
        }
        blended
    }
}

/// Pixels a capsule of `width` may reach beyond its segment's bounding box.
#[inline]
fn capsule_pad(width: f32) -> i32 {
    (width / 2.0).ceil() as i32 + 1
}

#[inline]
fn stroke_pad(width: i32) -> i32 {
    if width <= 1 { 0 } else { capsule_pad(width as f32) }
}

/// Draw a straight stroke from `p0` to `p1`.
///
/// Widths of 1 or less use [`draw_hairline`]; wider strokes use
/// [`draw_capsule`] so chained segments join without gaps.
pub fn draw_segment(canvas: &mut Canvas, color: skia::Color, p0: Point, p1: Point, width: i32) {
    stroke_open(canvas, color, &[p0, p1], width);
}

/// 8-connected Bresenham walk, inclusive of both endpoints, clipped to the
/// canvas before walking.
pub fn draw_hairline(canvas: &mut Canvas, color: skia::Color, p0: Point, p1: Point) {
    if let Some(mut mask) = CoverageMask::around(canvas, &[p0, p1], 0) {
        mask.add_hairline(p0, p1);
        mask.composite(canvas, color);
    }
}

/// Stroke a segment as a capsule of diameter `width` with round caps.
pub fn draw_capsule(canvas: &mut Canvas, color: skia::Color, p0: Point, p1: Point, width: f32) {
    if let Some(mut mask) = CoverageMask::around(canvas, &[p0, p1], capsule_pad(width)) {
        mask.add_capsule(p0, p1, width);
        mask.composite(canvas, color);
    }
}

/// Pixels visited by [`draw_hairline`], in walk order. Not clipped.
pub fn hairline_pixels(p0: Point, p1: Point) -> Vec<Point> {
    let mut out = Vec::new();
    let (x1, y1) = (p1.x as i64, p1.y as i64);
    let (mut x, mut y) = (p0.x as i64, p0.y as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        out.push(Point::new(x as i32, y as i32));
        if x == x1 && y == y1 {
            return out;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Distance from `(px, py)` to the segment `a`-`b`.
///
/// Computed in `f64` so endpoints far outside the canvas keep sub-pixel
/// precision near it.
pub fn distance_to_segment(px: f32, py: f32, a: Point, b: Point) -> f32 {
    let (px, py) = (px as f64, py as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (vx, vy) = (b.x as f64 - ax, b.y as f64 - ay);
    let len2 = vx * vx + vy * vy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - ax) * vx + (py - ay) * vy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * vx, ay + t * vy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt() as f32
}

fn stroke_open(canvas: &mut Canvas, color: skia::Color, points: &[Point], width: i32) {
    let Some(mut mask) = CoverageMask::around(canvas, points, stroke_pad(width)) else {
        return;
    };
    for w in points.windows(2) {
        mask.add_segment(w[0], w[1], width);
    }
    mask.composite(canvas, color);
}

/// Stroke the closed outline through `points`, returning the number of
/// segments drawn (equal to `points.len()`).
pub fn stroke_closed(canvas: &mut Canvas, color: skia::Color, points: &[Point], width: i32) -> usize {
    let Some(mut mask) = CoverageMask::around(canvas, points, stroke_pad(width)) else {
        return points.len();
    };
    let mut drawn = 0;
    for (a, b) in closed_edges(points) {
        mask.add_segment(a, b, width);
        drawn += 1;
    }
    mask.composite(canvas, color);
    drawn
}
