// File: crates/radar-examples/src/bin/single.rs
// Summary: Minimal example that renders a single-series radar chart to JPEG and PNG.

use anyhow::Result;
use radar_core::{ChartData, DrawDatum, RadarChart, RenderOptions, RingScale, SkiaFace};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let data = vec![
        DrawDatum::new("one", 90.0),
        DrawDatum::new("two", 74.0),
        DrawDatum::new("three", 68.0),
        DrawDatum::new("four", 60.0),
        DrawDatum::new("five", 77.0),
        DrawDatum::new("six", 88.0),
    ];
    let chart = RadarChart::new(RingScale::new(vec![100.0, 80.0, 60.0, 40.0, 20.0, 0.0]), ChartData::Single(data))
        .with_title("Title");

    // A CJK-capable font can be supplied through `font_file`, e.g. "./msyh.ttf".
    let opts = RenderOptions { width: 1024, height: 600, ..RenderOptions::default() };
    let face = SkiaFace::bundled()?;

    let canvas = chart.render(&opts, &face)?;
    for out in ["target/out/example_single.jpg", "target/out/example_single.png"] {
        canvas.save(out)?;
        println!("Wrote {}", out);
    }
    Ok(())
}
