// File: crates/radar-core/src/chart.rs
// Summary: RadarChart model and the render pipeline (rings, labels, series, legend) into a Canvas.

use std::path::{Path, PathBuf};

use skia_safe as skia;
use tracing::{debug, trace};

use crate::axis::AxisSpec;
use crate::canvas::Canvas;
use crate::error::{ChartError, Result};
use crate::fill::fill_polygon;
use crate::geometry::{ring_vertices, series_vertices, Frame};
use crate::grid::{format_tick, RingScale};
use crate::labels::{legend_slots, place_axis_label, place_ring_label};
use crate::raster::{draw_segment, stroke_closed};
use crate::series::{DrawDatum, Series};
use crate::text::{GlyphProvider, SkiaFace};
use crate::theme::{self, Theme};
use crate::types::{Point, FONT_SIZE, GRID_STROKE, HEIGHT, LEGEND_BAND, SERIES_STROKE, TITLE_FONT_SIZE, WIDTH};

/// Canvas size, colors, text sizes and font selection.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    /// Height of the chart body. A legend, when drawn, adds [`LEGEND_BAND`] rows.
    pub height: i32,
    pub theme: Theme,
    /// Title size, in points.
    pub title_font_size: i32,
    /// Tick, axis and legend text size, in points.
    pub font_size: i32,
    /// TrueType/OpenType file to draw text with. `None` uses the face passed to
    /// [`RadarChart::render`].
    pub font_file: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::default(),
            title_font_size: TITLE_FONT_SIZE,
            font_size: FONT_SIZE,
            font_file: None,
        }
    }
}

/// Chart data in one of its two input shapes.
#[derive(Clone, Debug)]
pub enum ChartData {
    /// One polygon given as (axis name, value) pairs, stroked with the
    /// theme's link line color and never filled or given a legend.
    Single(Vec<DrawDatum>),
    /// Named axes plus any number of series, one value per axis each.
    Multi { axes: AxisSpec, series: Vec<Series> },
}

impl ChartData {
    /// Split into axis names and series.
    pub fn resolve(&self, link_line: skia::Color) -> (AxisSpec, Vec<Series>) {
        match self {
            ChartData::Single(data) => {
                let axes = AxisSpec::new(data.iter().map(|d| d.name.clone()));
                let values = data.iter().map(|d| d.value).collect();
                (axes, vec![Series::new("", values, link_line)])
            }
            ChartData::Multi { axes, series } => (axes.clone(), series.clone()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RadarChart {
    pub title: String,
    pub rings: RingScale,
    pub data: ChartData,
}

impl RadarChart {
    pub fn new(rings: RingScale, data: ChartData) -> Self {
        Self { title: String::new(), rings, data }
    }

    /// Six axes, rings 100..0 by 20, one sample polygon.
    pub fn single_default() -> Self {
        let data = [("one", 90.0), ("two", 74.0), ("three", 68.0), ("four", 60.0), ("five", 77.0), ("six", 88.0)]
            .into_iter()
            .map(|(n, v)| DrawDatum::new(n, v))
            .collect();
        Self::new(RingScale::default(), ChartData::Single(data))
    }

    /// Six axes, rings 100..0 by 20, two sample series.
    pub fn multi_default() -> Self {
        let palette = theme::series_palette();
        let axes = AxisSpec::new(["one", "two", "three", "four", "five", "six"]);
        let series = vec![
            Series::new("first line", vec![1.0, 50.0, 60.0, 70.0, 80.0, 10.0], palette[0]),
            Series::new("second line", vec![80.0, 50.0, 50.0, 88.0, 100.0, 30.0], palette[1]),
        ];
        Self::new(RingScale::default(), ChartData::Multi { axes, series })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render the chart into a fresh canvas.
    ///
    /// Text uses `opts.font_file` when set, else `fallback`. Validation and
    /// font loading happen before anything is drawn; on error no canvas is
    /// returned.
    pub fn render(&self, opts: &RenderOptions, fallback: &dyn GlyphProvider) -> Result<Canvas> {
        let (axes, series) = self.data.resolve(opts.theme.link_line);
        axes.validate()?;
        for s in &series {
            s.check_shape(axes.len())?;
        }
        let max = self.rings.validate()?;
        let frame = Frame::for_canvas(opts.width, opts.height, opts.title_font_size, opts.font_size)?;
        if opts.theme.background.a() != 255 {
            return Err(ChartError::TranslucentBackground { alpha: opts.theme.background.a() });
        }
        let center = frame.center();

        let loaded;
        let face: &dyn GlyphProvider = match &opts.font_file {
            Some(path) => {
                loaded = SkiaFace::from_file(path)?;
                &loaded
            }
            None => fallback,
        };

        let with_legend = series.len() > 1;
        let height = opts.height + if with_legend { LEGEND_BAND } else { 0 };
        debug!(
            width = opts.width,
            height,
            axes = axes.len(),
            rings = self.rings.values.len(),
            series = series.len(),
            edge = frame.edge,
            "rendering radar chart"
        );

        let mut canvas = Canvas::new(opts.width, height, opts.theme.background);

        face.draw_text(
            &mut canvas,
            &self.title,
            opts.title_font_size,
            opts.theme.title,
            Point::new(0, opts.title_font_size),
        );

        let mut outer = Vec::new();
        for (j, (value, ratio)) in self.rings.ratios().enumerate() {
            let pts = ring_vertices(axes.len(), ratio, frame.edge, center)?;
            stroke_closed(&mut canvas, opts.theme.grid, &pts, GRID_STROKE);
            if let (Some(&first), Some(&last)) = (pts.first(), pts.last()) {
                let anchor = place_ring_label(first, last);
                face.draw_text(&mut canvas, &format_tick(value), opts.font_size, opts.theme.label, anchor);
            }
            trace!(ring = j, value, "ring drawn");
            if j == 0 {
                outer = pts;
            }
        }

        for (vertex, name) in outer.iter().zip(&axes.names) {
            let text_width = if vertex.x < center.x { face.advance_width(name, opts.font_size) } else { 0 };
            let anchor = place_axis_label(*vertex, center, opts.font_size, text_width);
            face.draw_text(&mut canvas, name, opts.font_size, opts.theme.label, anchor);
        }

        for s in &series {
            let pts = series_vertices(&s.values, max, axes.len(), frame.edge, center)?;
            let filled = match s.visible_fill() {
                Some(fill) => fill_polygon(&mut canvas, fill, center, &pts),
                None => 0,
            };
            stroke_closed(&mut canvas, s.stroke, &pts, SERIES_STROKE);
            trace!(series = %s.name, filled, "series drawn");
        }

        if with_legend {
            for (slot, s) in legend_slots(series.len(), frame.edge, opts.height).iter().zip(&series) {
                draw_segment(&mut canvas, s.stroke, slot.swatch_start, slot.swatch_end, SERIES_STROKE);
                face.draw_text(&mut canvas, &s.name, opts.font_size, opts.theme.label, slot.text);
                trace!(series = %s.name, x = slot.swatch_start.x, "legend entry drawn");
            }
        }

        Ok(canvas)
    }

    /// Render and return `(pixels, width, height, stride)` in RGBA8 order.
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
        fallback: &dyn GlyphProvider,
    ) -> Result<(Vec<u8>, i32, i32, usize)> {
        let canvas = self.render(opts, fallback)?;
        let (w, h, stride) = (canvas.width(), canvas.height(), canvas.stride());
        Ok((canvas.into_raw(), w, h, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions, fallback: &dyn GlyphProvider) -> Result<Vec<u8>> {
        self.render(opts, fallback)?.encode_png()
    }

    /// Render and write to `path` (PNG or JPEG, by extension).
    pub fn render_to_file(
        &self,
        opts: &RenderOptions,
        fallback: &dyn GlyphProvider,
        output_path: impl AsRef<Path>,
    ) -> Result<()> {
        self.render(opts, fallback)?.save(output_path)
    }
}
