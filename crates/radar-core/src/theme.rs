// File: crates/radar-core/src/theme.rs
// Summary: Color presets for radar chart backgrounds, rings, text and default series strokes.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Ring outlines.
    pub grid: skia::Color,
    /// Default stroke for single-series charts.
    pub link_line: skia::Color,
    pub title: skia::Color,
    /// Tick values, axis names and legend names.
    pub label: skia::Color,
}

impl Theme {
    /// White canvas with grey rings and a blue data line.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 180, 180, 180),
            link_line: skia::Color::from_argb(255, 0x40, 0x9e, 0xff),
            title: skia::Color::from_argb(255, 0, 0, 0),
            label: skia::Color::from_argb(255, 80, 80, 80),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 220, 220, 228),
            link_line: skia::Color::from_argb(255, 32, 120, 200),
            title: skia::Color::from_argb(255, 20, 20, 30),
            label: skia::Color::from_argb(255, 100, 100, 110),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 60, 60, 68),
            link_line: skia::Color::from_argb(255, 64, 160, 255),
            title: skia::Color::from_argb(255, 235, 235, 245),
            label: skia::Color::from_argb(255, 150, 150, 160),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
            link_line: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}

/// Stroke palette cycled by series that do not pick their own color.
pub fn series_palette() -> [skia::Color; 6] {
    [
        skia::Color::from_argb(255, 12, 14, 255),
        skia::Color::from_argb(255, 0x40, 0x9e, 0xff),
        skia::Color::from_argb(255, 34, 139, 34),
        skia::Color::from_argb(255, 220, 80, 80),
        skia::Color::from_argb(255, 255, 160, 0),
        skia::Color::from_argb(255, 140, 60, 200),
    ]
}
