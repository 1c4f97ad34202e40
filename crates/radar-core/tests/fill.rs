// File: crates/radar-core/tests/fill.rs
// Purpose: Validate the point-in-triangle test, fan mask membership and polygon fill blending.

use radar_core::fill::{blend_channel, fill_polygon, point_in_triangle, FanMask};
use radar_core::{Canvas, Point};
use skia_safe::Color;

fn white_canvas() -> Canvas {
    Canvas::new(20, 20, Color::from_argb(255, 255, 255, 255))
}

#[test]
fn triangle_contains_its_vertices_and_edge_midpoints() {
    let (a, b, c) = (Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
    for (p1, p2, p3) in [(a, b, c), (a, c, b)] {
        for v in [a, b, c] {
            assert!(point_in_triangle(p1, p2, p3, v), "vertex {v:?}");
        }
        for m in [Point::new(5, 0), Point::new(5, 5), Point::new(0, 5)] {
            assert!(point_in_triangle(p1, p2, p3, m), "midpoint {m:?}");
        }
        assert!(point_in_triangle(p1, p2, p3, Point::new(2, 2)));
        assert!(!point_in_triangle(p1, p2, p3, Point::new(6, 6)));
        assert!(!point_in_triangle(p1, p2, p3, Point::new(-1, 3)));
    }
}

#[test]
fn degenerate_triangle_only_contains_its_segment() {
    let (a, b, c) = (Point::new(0, 0), Point::new(4, 4), Point::new(8, 8));
    assert!(point_in_triangle(a, b, c, Point::new(6, 6)));
    assert!(!point_in_triangle(a, b, c, Point::new(6, 5)));
    assert!(!point_in_triangle(a, b, c, Point::new(9, 9)));
}

#[test]
fn fan_mask_handles_concave_polygons() {
    // Arrow shape with a notch at the top: (10, 6) is inside, (10, 3) is not.
    let verts = [Point::new(2, 2), Point::new(10, 8), Point::new(18, 2), Point::new(10, 18)];
    let mask = FanMask::new(Point::new(10, 10), &verts);
    assert!(mask.contains(Point::new(10, 9)));
    assert!(mask.contains(Point::new(10, 17)));
    assert!(!mask.contains(Point::new(10, 3)));
    assert!(!mask.contains(Point::new(1, 18)));
}

#[test]
fn zero_alpha_fill_is_a_no_op() {
    let mut canvas = white_canvas();
    let before = canvas.clone();
    let square = [Point::new(5, 5), Point::new(15, 5), Point::new(15, 15), Point::new(5, 15)];
    let written = fill_polygon(&mut canvas, Color::from_argb(0, 255, 0, 0), Point::new(10, 10), &square);
    assert_eq!(written, 0);
    assert_eq!(canvas, before);
}

#[test]
fn opaque_fill_covers_closed_square() {
    let mut canvas = white_canvas();
    let red = Color::from_argb(255, 255, 0, 0);
    let square = [Point::new(5, 5), Point::new(15, 5), Point::new(15, 15), Point::new(5, 15)];
    let written = fill_polygon(&mut canvas, red, Point::new(10, 10), &square);
    assert_eq!(written, 11 * 11);
    assert_eq!(canvas.pixel(10, 10), Some(red));
    assert_eq!(canvas.pixel(5, 15), Some(red));
    assert_eq!(canvas.pixel(2, 2), Some(Color::from_argb(255, 255, 255, 255)));
    assert_eq!(canvas.pixel(16, 10), Some(Color::from_argb(255, 255, 255, 255)));
}

#[test]
fn translucent_fill_mixes_and_writes_opaque_alpha() {
    let mut canvas = Canvas::new(20, 20, Color::from_argb(255, 0, 0, 0));
    let square = [Point::new(5, 5), Point::new(15, 5), Point::new(15, 15), Point::new(5, 15)];
    fill_polygon(&mut canvas, Color::from_argb(100, 255, 255, 255), Point::new(10, 10), &square);
    let px = canvas.pixel(10, 10).expect("in bounds");
    assert_eq!(px.a(), 255);
    // 255 * 100 / 255 with truncation lands on 99 or 100
    assert!((99..=100).contains(&px.r()), "got {}", px.r());
    assert_eq!(px.r(), px.g());
    assert_eq!(px.g(), px.b());
}

#[test]
fn blend_channel_extremes() {
    assert_eq!(blend_channel(255, 0, 255), 255);
    assert_eq!(blend_channel(0, 255, 255), 0);
    assert_eq!(blend_channel(255, 255, 255), 255);
}

#[test]
fn fill_is_clipped_to_canvas() {
    let mut canvas = white_canvas();
    let big = [Point::new(-50, -50), Point::new(70, -50), Point::new(70, 70), Point::new(-50, 70)];
    let written = fill_polygon(&mut canvas, Color::from_argb(255, 0, 0, 255), Point::new(10, 10), &big);
    assert_eq!(written, 20 * 20);
}
