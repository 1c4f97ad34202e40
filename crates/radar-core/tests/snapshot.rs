// File: crates/radar-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts (no glyphs) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, fails: snapshots are committed under tests/__snapshots__.

use radar_core::{AxisSpec, BlankText, ChartData, RadarChart, RenderOptions, RingScale, Series};
use skia_safe::Color;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        panic!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

#[test]
fn golden_single_series() {
    let bytes = RadarChart::single_default()
        .render_to_png_bytes(&RenderOptions::default(), &BlankText)
        .expect("render bytes");
    write_or_compare("single.png", &bytes);
}

#[test]
fn golden_filled_series() {
    let axes = AxisSpec::new(["height", "weight", "bmi", "lung", "run", "jump", "reach"]);
    let series = vec![
        Series::new("class", vec![80.0, 66.0, 77.0, 44.0, 76.0, 100.0, 88.0], Color::from_argb(255, 12, 14, 255))
            .with_fill(Color::from_argb(100, 12, 14, 255)),
        Series::new("grade", vec![58.0, 0.0, 92.0, 70.0, 76.0, 57.0, 66.0], Color::from_argb(255, 0x40, 0x9e, 0xff))
            .with_fill(Color::from_argb(100, 0x40, 0x9e, 0xff)),
        Series::new("mine", vec![98.0, 85.0, 92.0, 80.0, 80.0, 60.0, 55.0], Color::from_argb(255, 34, 139, 34)),
    ];
    let chart = RadarChart::new(RingScale::default(), ChartData::Multi { axes, series });
    let opts = RenderOptions { width: 640, height: 480, ..RenderOptions::default() };
    let bytes = chart.render_to_png_bytes(&opts, &BlankText).expect("render bytes");
    write_or_compare("filled.png", &bytes);
}
