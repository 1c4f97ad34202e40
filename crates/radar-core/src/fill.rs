// File: crates/radar-core/src/fill.rs
// Summary: Fan-triangulated polygon mask and semi-transparent polygon fill.
//
// A polygon is decomposed into triangles (apex, v[i], v[i + 1]) around a fixed
// apex (the chart center). A pixel is inside the polygon when any fan triangle
// contains it, boundary included, so adjacent triangles leave no seams.

use skia_safe as skia;

use crate::canvas::Canvas;
use crate::geometry::{closed_edges, RectI32};
use crate::types::Point;

/// 8-bit channels widen to 16 bits by multiplying with this (0xff -> 0xffff).
pub const CHANNEL_SCALE_16: u32 = 257;
/// Full scale of a 16-bit channel.
pub const CHANNEL_MAX_16: f32 = 65535.0;
/// Full scale of an 8-bit channel.
pub const CHANNEL_MAX_8: f32 = 255.0;

/// Cross product of `p1->p2` and `p1->p3`; positive when `p3` is on the
/// counter-clockwise side of `p1->p2`.
#[inline]
pub fn cross(p1: Point, p2: Point, p3: Point) -> i64 {
    let (ax, ay) = ((p2.x - p1.x) as i64, (p2.y - p1.y) as i64);
    let (bx, by) = ((p3.x - p1.x) as i64, (p3.y - p1.y) as i64);
    ax * by - ay * bx
}

/// `o` lies on the closed segment `p1`-`p2`.
pub fn on_segment(p1: Point, p2: Point, o: Point) -> bool {
    cross(p1, p2, o) == 0
        && o.x >= p1.x.min(p2.x)
        && o.x <= p1.x.max(p2.x)
        && o.y >= p1.y.min(p2.y)
        && o.y <= p1.y.max(p2.y)
}

/// Closed point-in-triangle test: interior points and points on any edge
/// (including the vertices) are inside. Works for either winding.
pub fn point_in_triangle(p1: Point, p2: Point, p3: Point, o: Point) -> bool {
    let (p2, p3) = if cross(p1, p2, p3) < 0 { (p3, p2) } else { (p2, p3) };
    if cross(p1, p2, o) > 0 && cross(p2, p3, o) > 0 && cross(p3, p1, o) > 0 {
        return true;
    }
    on_segment(p1, p2, o) || on_segment(p2, p3, o) || on_segment(p3, p1, o)
}

/// Membership mask for a polygon fanned around `apex`.
#[derive(Clone, Copy, Debug)]
pub struct FanMask<'a> {
    pub apex: Point,
    pub vertices: &'a [Point],
}

impl<'a> FanMask<'a> {
    pub fn new(apex: Point, vertices: &'a [Point]) -> Self {
        Self { apex, vertices }
    }

    pub fn contains(&self, p: Point) -> bool {
        closed_edges(self.vertices).any(|(a, b)| point_in_triangle(self.apex, a, b, p))
    }

    /// Bounding box of the apex and every vertex; every inside pixel lies in it.
    pub fn bounds(&self) -> Option<RectI32> {
        RectI32::bounding(std::iter::once(self.apex).chain(self.vertices.iter().copied()))
    }
}

/// Blend one 8-bit channel with 16-bit intermediate precision.
///
/// Reproduces `src·α + dst·(1−α)` with both channels and alpha expanded to
/// the 16-bit range first, truncating the result.
#[inline]
pub fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let s = (src as u32 * CHANNEL_SCALE_16) as f32;
    let d = (dst as u32 * CHANNEL_SCALE_16) as f32;
    let a = (alpha as u32 * CHANNEL_SCALE_16) as f32;
    let v = s / CHANNEL_MAX_16 * a / CHANNEL_MAX_16 * CHANNEL_MAX_8
        + d / CHANNEL_MAX_16 * (CHANNEL_MAX_16 - a) / CHANNEL_MAX_16 * CHANNEL_MAX_8;
    v as u8
}

/// Alpha-blend `fill` into every pixel of the polygon fanned around `apex`.
///
/// Blended pixels are written fully opaque. A fill with alpha 0 leaves the
/// canvas untouched. Returns the number of pixels written.
pub fn fill_polygon(canvas: &mut Canvas, fill: skia::Color, apex: Point, vertices: &[Point]) -> usize {
    if fill.a() == 0 || vertices.is_empty() {
        return 0;
    }
    let mask = FanMask::new(apex, vertices);
    let Some(bounds) = mask.bounds().and_then(|b| b.clip_to(canvas.width(), canvas.height())) else {
        return 0;
    };

    let mut written = 0;
    for y in bounds.top..=bounds.bottom {
        for x in bounds.left..=bounds.right {
            let p = Point::new(x, y);
            if !mask.contains(p) {
                continue;
            }
            let Some(dst) = canvas.pixel(x, y) else { continue };
            let out = skia::Color::from_argb(
                255,
                blend_channel(fill.r(), dst.r(), fill.a()),
                blend_channel(fill.g(), dst.g(), fill.a()),
                blend_channel(fill.b(), dst.b(), fill.a()),
            );
            canvas.put(x, y, out);
            written += 1;
        }
    }
    written
}
