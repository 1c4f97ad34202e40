// File: crates/radar-core/src/text.rs
// Summary: Glyph provider seam and its Skia-backed implementation (measure + draw into a Canvas).

use std::path::Path;

use skia_safe as skia;

use crate::canvas::Canvas;
use crate::error::{ChartError, Result};
use crate::types::{points_to_px, Point};

const BUNDLED_FONT_NAME: &str = "assets/fonts/DejaVuSans.ttf";
static BUNDLED_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Text collaborator used by the render pipeline.
///
/// Sizes are in points. `caret` is the left end of the text baseline.
pub trait GlyphProvider {
    /// Advance width of `text` in whole pixels.
    fn advance_width(&self, text: &str, size: i32) -> i32;
    fn draw_text(&self, canvas: &mut Canvas, text: &str, size: i32, color: skia::Color, caret: Point);
}

/// Typeface-backed text drawn through a Skia raster canvas that wraps the
/// chart's own pixel buffer.
#[derive(Clone)]
pub struct SkiaFace {
    typeface: skia::Typeface,
}

impl SkiaFace {
    pub fn new(typeface: skia::Typeface) -> Self {
        Self { typeface }
    }

    /// DejaVu Sans, compiled into the crate. Works without any system fonts.
    pub fn bundled() -> Result<Self> {
        Self::from_bytes(BUNDLED_FONT, Path::new(BUNDLED_FONT_NAME))
    }

    /// Parse a TrueType/OpenType font from memory.
    pub fn from_bytes(bytes: &[u8], origin: &Path) -> Result<Self> {
        skia::FontMgr::default()
            .new_from_data(bytes, None)
            .map(Self::new)
            .ok_or_else(|| ChartError::FontLoad {
                path: origin.to_path_buf(),
                detail: "not a font file skia can parse".into(),
            })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ChartError::FontLoad {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        Self::from_bytes(&bytes, path)
    }

    fn font(&self, size: i32) -> skia::Font {
        let mut font = skia::Font::from_typeface(self.typeface.clone(), points_to_px(size as f32));
        font.set_hinting(skia::FontHinting::None);
        font.set_edging(skia::font::Edging::AntiAlias);
        font
    }
}

impl GlyphProvider for SkiaFace {
    fn advance_width(&self, text: &str, size: i32) -> i32 {
        let (advance, _bounds) = self.font(size).measure_str(text, None);
        advance as i32
    }

    fn draw_text(&self, canvas: &mut Canvas, text: &str, size: i32, color: skia::Color, caret: Point) {
        if text.is_empty() {
            return;
        }
        let info = skia::ImageInfo::new(
            (canvas.width(), canvas.height()),
            skia::ColorType::RGBA8888,
            // Exact only for opaque pixels; `RadarChart::render` rejects
            // translucent backgrounds.
            skia::AlphaType::Premul,
            None,
        );
        let stride = canvas.stride();
        let Some(sk_canvas) = skia::Canvas::from_raster_direct(&info, canvas.as_bytes_mut(), stride, None) else {
            tracing::warn!(width = info.width(), height = info.height(), "cannot wrap canvas for text");
            return;
        };
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(true);
        sk_canvas.draw_str(text, (caret.x as f32, caret.y as f32), &self.font(size), &paint);
    }
}

/// Headless provider: measures every char as half an em and draws nothing.
/// Keeps layouts deterministic where no font is wanted (tests, benches).
#[derive(Clone, Copy, Debug, Default)]
pub struct BlankText;

impl GlyphProvider for BlankText {
    fn advance_width(&self, text: &str, size: i32) -> i32 {
        text.chars().count() as i32 * size / 2
    }

    fn draw_text(&self, _canvas: &mut Canvas, _text: &str, _size: i32, _color: skia::Color, _caret: Point) {}
}
