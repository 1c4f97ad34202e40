// File: crates/radar-examples/src/bin/multi.rs
// Summary: Example with several filled and unfilled series plus a legend, written to JPEG.

use anyhow::Result;
use radar_core::{AxisSpec, ChartData, RadarChart, RenderOptions, RingScale, Series, SkiaFace};
use skia_safe::Color;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let axes = AxisSpec::new(["height", "weight", "BMI", "lung capacity", "long run", "sprint", "jump"]);
    let class = Color::from_argb(255, 12, 14, 255);
    let grade = Color::from_argb(255, 0x40, 0x9e, 0xff);
    let series = vec![
        Series::new("class average", vec![80.0, 66.0, 77.0, 44.0, 76.0, 100.0, 88.0], class)
            .with_fill(Color::from_argb(100, 12, 14, 255)),
        Series::new("grade average", vec![58.0, 0.0, 92.0, 70.0, 76.0, 57.0, 66.0], grade)
            .with_fill(Color::from_argb(100, 0x40, 0x9e, 0xff)),
        Series::new("my scores", vec![98.0, 85.0, 92.0, 80.0, 80.0, 60.0, 55.0], Color::from_argb(255, 34, 139, 34)),
    ];
    let chart = RadarChart::new(RingScale::linear(100.0, 6), ChartData::Multi { axes, series })
        .with_title("Fitness");

    let opts = RenderOptions { width: 1024, height: 600, ..RenderOptions::default() };
    let face = SkiaFace::bundled()?;

    let out = "target/out/example_multi.jpg";
    chart.render_to_file(&opts, &face, out)?;
    println!("Wrote {}", out);
    Ok(())
}
