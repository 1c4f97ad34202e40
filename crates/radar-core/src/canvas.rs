// File: crates/radar-core/src/canvas.rs
// Summary: RGBA8 pixel buffer owned by one render call, plus PNG/JPEG encoding.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::Result;

/// Row-major RGBA8 image, 4 bytes per pixel, no row padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// New canvas filled with `background`. Dimensions must be positive.
    pub fn new(width: i32, height: i32, background: skia::Color) -> Self {
        let len = width.max(0) as usize * height.max(0) as usize * 4;
        let mut canvas = Self { width: width.max(0), height: height.max(0), pixels: vec![0; len] };
        canvas.clear(background);
        canvas
    }

    #[inline]
    pub fn width(&self) -> i32 { self.width }
    #[inline]
    pub fn height(&self) -> i32 { self.height }
    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize { self.width as usize * 4 }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn clear(&mut self, color: skia::Color) {
        let px = [color.r(), color.g(), color.b(), color.a()];
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<skia::Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.index(x, y);
        let p = &self.pixels[i..i + 4];
        Some(skia::Color::from_argb(p[3], p[0], p[1], p[2]))
    }

    /// Overwrite a pixel. Out-of-bounds writes are dropped.
    pub fn put(&mut self, x: i32, y: i32, color: skia::Color) {
        if !self.in_bounds(x, y) {
            return;
        }
        let i = self.index(x, y);
        self.pixels[i..i + 4].copy_from_slice(&[color.r(), color.g(), color.b(), color.a()]);
    }

    /// Source-over blend of `color` scaled by `coverage` in `[0, 1]`.
    pub fn blend(&mut self, x: i32, y: i32, color: skia::Color, coverage: f32) {
        if !self.in_bounds(x, y) {
            return;
        }
        let a = color.a() as f32 / 255.0 * coverage.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let i = self.index(x, y);
        let dst = &mut self.pixels[i..i + 4];
        let src = [color.r(), color.g(), color.b()];
        for c in 0..3 {
            let v = src[c] as f32 * a + dst[c] as f32 * (1.0 - a);
            dst[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        let out_a = a * 255.0 + dst[3] as f32 * (1.0 - a);
        dst[3] = out_a.round().clamp(0.0, 255.0) as u8;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    pub fn to_image(&self) -> image::RgbaImage {
        // Buffer length always equals width * height * 4.
        image::RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let i = self.index(x as i32, y as i32);
            image::Rgba([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
        })
    }

    /// Encode as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(self.to_image()).write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Write to `path`; the format follows the extension. JPEG output drops alpha.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let img = image::DynamicImage::ImageRgba8(self.to_image());
        match image::ImageFormat::from_path(path)? {
            image::ImageFormat::Jpeg => img.to_rgb8().save(path)?,
            _ => img.save(path)?,
        }
        tracing::debug!(path = %path.display(), "saved canvas");
        Ok(())
    }
}
