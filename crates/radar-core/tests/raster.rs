// File: crates/radar-core/tests/raster.rs
// Purpose: Validate hairline walks, capsule strokes, clipping and closed outlines.

use radar_core::raster::{distance_to_segment, draw_hairline, draw_segment, hairline_pixels, stroke_closed};
use radar_core::{Canvas, Point};
use skia_safe::Color;

const WHITE: Color = Color::WHITE;
const BLACK: Color = Color::BLACK;

#[test]
fn hairline_is_eight_connected_and_ends_on_target() {
    for (p0, p1) in [
        (Point::new(0, 0), Point::new(5, 2)),
        (Point::new(7, 1), Point::new(2, 9)),
        (Point::new(3, 3), Point::new(3, -4)),
        (Point::new(4, 4), Point::new(4, 4)),
    ] {
        let px = hairline_pixels(p0, p1);
        assert_eq!(px.first(), Some(&p0));
        assert_eq!(px.last(), Some(&p1));
        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();
        assert_eq!(px.len() as i32, dx.max(dy) + 1);
        for w in px.windows(2) {
            let step = ((w[1].x - w[0].x).abs(), (w[1].y - w[0].y).abs());
            assert!(step.0 <= 1 && step.1 <= 1 && step != (0, 0), "bad step {step:?}");
        }
    }
}

#[test]
fn one_pixel_segment_replaces_pixels() {
    let mut canvas = Canvas::new(10, 10, WHITE);
    draw_segment(&mut canvas, BLACK, Point::new(1, 1), Point::new(8, 1), 1);
    for x in 1..=8 {
        assert_eq!(canvas.pixel(x, 1), Some(BLACK));
    }
    assert_eq!(canvas.pixel(0, 1), Some(WHITE));
    assert_eq!(canvas.pixel(4, 2), Some(WHITE));
}

#[test]
fn capsule_has_round_caps_and_width() {
    let mut canvas = Canvas::new(40, 40, WHITE);
    draw_segment(&mut canvas, BLACK, Point::new(5, 20), Point::new(30, 20), 3);
    for p in [(5, 20), (17, 20), (30, 20), (17, 21), (17, 19), (4, 20), (31, 20)] {
        assert_eq!(canvas.pixel(p.0, p.1), Some(BLACK), "{p:?}");
    }
    for p in [(17, 22), (17, 18), (3, 20), (32, 20), (17, 25)] {
        assert_eq!(canvas.pixel(p.0, p.1), Some(WHITE), "{p:?}");
    }
}

#[test]
fn capsule_edges_are_antialiased() {
    let mut canvas = Canvas::new(40, 40, WHITE);
    draw_segment(&mut canvas, BLACK, Point::new(5, 5), Point::new(30, 30), 3);
    // Pixels straddling the stroke boundary blend partially.
    let partial = (0..40)
        .flat_map(|y| (0..40).map(move |x| (x, y)))
        .filter_map(|(x, y)| canvas.pixel(x, y))
        .filter(|c| c.r() > 0 && c.r() < 255)
        .count();
    assert!(partial > 0);
}

#[test]
fn segments_outside_the_canvas_are_clipped() {
    let mut canvas = Canvas::new(10, 10, WHITE);
    let before = canvas.clone();
    draw_segment(&mut canvas, BLACK, Point::new(-100, -100), Point::new(-50, -80), 3);
    draw_segment(&mut canvas, BLACK, Point::new(-100, -100), Point::new(-50, -80), 1);
    assert_eq!(canvas, before);

    draw_segment(&mut canvas, BLACK, Point::new(-10, 5), Point::new(20, 5), 3);
    assert_eq!(canvas.pixel(0, 5), Some(BLACK));
    assert_eq!(canvas.pixel(9, 5), Some(BLACK));
}

#[test]
fn closed_outline_draws_one_segment_per_vertex() {
    let mut canvas = Canvas::new(30, 30, WHITE);
    let square = [Point::new(5, 5), Point::new(25, 5), Point::new(25, 25), Point::new(5, 25)];
    assert_eq!(stroke_closed(&mut canvas, BLACK, &square, 1), 4);
    // closing edge from the last vertex back to the first
    assert_eq!(canvas.pixel(5, 15), Some(BLACK));
    assert_eq!(canvas.pixel(15, 15), Some(WHITE));
}

#[test]
fn distance_to_degenerate_segment_is_point_distance() {
    let p = Point::new(3, 3);
    assert!((distance_to_segment(6.0, 7.0, p, p) - 5.0).abs() < 1e-6);
    assert!((distance_to_segment(5.0, 0.0, Point::new(0, 0), Point::new(10, 0))).abs() < 1e-6);
}

#[test]
fn translucent_outline_joins_match_edges() {
    let mut canvas = Canvas::new(40, 40, WHITE);
    let triangle = [Point::new(10, 10), Point::new(30, 10), Point::new(20, 30)];
    stroke_closed(&mut canvas, Color::from_argb(128, 0, 0, 0), &triangle, 3);
    let vertex = canvas.pixel(10, 10).unwrap();
    let edge = canvas.pixel(20, 10).unwrap();
    assert_eq!(vertex, edge);
    assert_eq!(edge, Color::from_argb(255, 127, 127, 127));
}

#[test]
fn translucent_hairline_outline_blends_shared_vertices_once() {
    let mut canvas = Canvas::new(30, 30, WHITE);
    let square = [Point::new(5, 5), Point::new(25, 5), Point::new(25, 25), Point::new(5, 25)];
    stroke_closed(&mut canvas, Color::from_argb(128, 0, 0, 0), &square, 1);
    assert_eq!(canvas.pixel(5, 5), canvas.pixel(15, 5));
}

#[test]
fn far_off_canvas_hairline_is_clipped_before_walking() {
    let mut canvas = Canvas::new(500, 400, WHITE);
    let before = canvas.clone();
    let far = Point::new(250, -1_709_999_793);
    draw_hairline(&mut canvas, BLACK, far, Point::new(420, -1_500_000_000));
    assert_eq!(canvas, before);

    draw_hairline(&mut canvas, BLACK, far, Point::new(250, 200));
    for y in 0..=200 {
        assert_eq!(canvas.pixel(250, y), Some(BLACK), "row {y}");
    }
    assert_eq!(canvas.pixel(250, 201), Some(WHITE));
}

#[test]
fn hairline_walk_handles_extreme_coordinates() {
    let px = hairline_pixels(Point::new(i32::MAX - 2, i32::MIN), Point::new(i32::MAX, i32::MIN + 2));
    assert_eq!(px.len(), 3);
    assert_eq!(px.last(), Some(&Point::new(i32::MAX, i32::MIN + 2)));
}

#[test]
fn wide_stroke_with_saturated_endpoint_stays_bounded() {
    let mut canvas = Canvas::new(20, 20, WHITE);
    draw_segment(&mut canvas, BLACK, Point::new(10, 10), Point::new(10, i32::MAX), 3);
    assert_eq!(canvas.pixel(10, 19), Some(BLACK));
    assert_eq!(canvas.pixel(10, 8), Some(WHITE));
}
