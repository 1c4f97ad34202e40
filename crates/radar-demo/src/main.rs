// File: crates/radar-demo/src/main.rs
// Summary: Demo loads series from a CSV and renders a radar chart to PNG.
//
// Usage: radar-demo [input.csv] [output.png|jpg] [theme] [font.ttf]
//
// CSV layout: the first column names the series; optional `stroke` and
// `fill` columns hold `#rrggbb` / `#rrggbbaa` colors; every other column is
// an axis, in order.

use anyhow::{bail, Context, Result};
use radar_core::theme::{self, series_palette};
use radar_core::{AxisSpec, ChartData, RadarChart, RenderOptions, RingScale, Series, SkiaFace};
use skia_safe as skia;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next();
    let output = args.next().map(PathBuf::from);
    let theme = theme::find(args.next().as_deref().unwrap_or("classic"));
    let font_file = args.next().map(PathBuf::from);

    // Built once and shared by every render in this process.
    let face = SkiaFace::bundled().context("bundled font failed to parse")?;

    let chart = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            if !path.exists() {
                bail!("file not found: {}", path.display());
            }
            info!("Using input file: {}", path.display());
            let (axes, series) =
                load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            if series.is_empty() {
                bail!("no series loaded; check headers/delimiter.");
            }
            let max = series.iter().flat_map(|s| s.values.iter().copied()).fold(0.0_f64, f64::max);
            info!("Loaded {} series over {} axes, max value {}", series.len(), axes.len(), max);
            let title = path.file_stem().and_then(|s| s.to_str()).unwrap_or("radar").to_string();
            RadarChart::new(RingScale::linear(nice_ceiling(max), 6), ChartData::Multi { axes, series })
                .with_title(title)
        }
        None => {
            info!("No input file; rendering the built-in sample");
            RadarChart::multi_default().with_title("Sample")
        }
    };

    let opts = RenderOptions { width: 1024, height: 600, theme, font_file, ..RenderOptions::default() };
    let out = output.unwrap_or_else(|| out_name_with(input.as_deref().map(Path::new), theme.name));
    chart
        .render_to_file(&opts, &face, &out)
        .with_context(|| format!("rendering {}", out.display()))?;
    info!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/radar_<stem>_<theme>.png
fn out_name_with(input: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input.and_then(|p| p.file_stem()).and_then(|s| s.to_str()).unwrap_or("sample");
    let mut out = PathBuf::from("target/out");
    out.push(format!("radar_{}_{}.png", stem, suffix));
    out
}

/// Round up to the next multiple of 10 (at least 10), so rings read as round numbers.
fn nice_ceiling(max: f64) -> f64 {
    ((max / 10.0).ceil() * 10.0).max(10.0)
}

/// Load axis names and one series per row.
fn load_series_csv(path: &Path) -> Result<(AxisSpec, Vec<Series>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    info!("Headers: {:?}", headers);

    let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let i_stroke = find("stroke");
    let i_fill = find("fill");
    let axis_cols = (1..headers.len())
        .filter(|i| Some(*i) != i_stroke && Some(*i) != i_fill)
        .collect::<Vec<_>>();
    let axes = AxisSpec::new(axis_cols.iter().map(|&i| headers[i].clone()));

    let palette = series_palette();
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).unwrap_or_default().to_string();
        let values = axis_cols
            .iter()
            .map(|&i| {
                let cell = rec.get(i).unwrap_or_default();
                cell.parse::<f64>()
                    .with_context(|| format!("row {}: '{}' is not a number ({})", row + 1, cell, headers[i]))
            })
            .collect::<Result<Vec<_>>>()?;

        let stroke = i_stroke
            .and_then(|i| rec.get(i))
            .and_then(parse_hex_color)
            .unwrap_or(palette[row % palette.len()]);
        let mut series = Series::new(name, values, stroke);
        if let Some(cell) = i_fill.and_then(|i| rec.get(i)).filter(|c| !c.is_empty()) {
            match parse_hex_color(cell) {
                Some(fill) => series = series.with_fill(fill),
                None => warn!("row {}: ignoring unreadable fill color '{}'", row + 1, cell),
            }
        }
        out.push(series);
    }
    Ok((axes, out))
}

/// `#rrggbb` or `#rrggbbaa`.
fn parse_hex_color(s: &str) -> Option<skia::Color> {
    let hex = s.trim().strip_prefix('#')?;
    let byte = |i: usize| hex.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
    match hex.len() {
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}
