// File: crates/visualize-core/src/text.rs
// Summary: Label measurement (trait + Skia paragraph shaper + fixed-width stand-in) and text drawing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Rendered extent of a label. Layout depends on this only, never on fonts directly.
pub trait TextMeasure {
    fn text_width(&self, text: &str) -> f32;
    fn text_height(&self, text: &str) -> f32;
}

/// Deterministic measure: every char is `char_width` wide, every line `line_height` tall.
/// Used for headless layout and in tests where font variance is unwanted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMeasure {
    pub char_width: f32,
    pub line_height: f32,
}

impl FixedMeasure {
    pub const fn new(char_width: f32, line_height: f32) -> Self {
        Self { char_width, line_height }
    }
}

impl TextMeasure for FixedMeasure {
    fn text_width(&self, text: &str) -> f32 {
        text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as f32 * self.char_width
    }

    fn text_height(&self, text: &str) -> f32 {
        text.lines().count().max(1) as f32 * self.line_height
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    pub fn measure_height(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0)).height()
    }

    /// Measure adapter at a fixed font size.
    pub fn measure(&self, size: f32) -> FontMeasure<'_> {
        FontMeasure { shaper: self, size }
    }

    /// Paint with the paragraph's top-left corner at `(x, y)`.
    pub fn draw_at(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }

    /// Paint centred horizontally inside `[left, left + width]`, top edge at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, left: f32, width: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        let x = left + (width - p.longest_line()) * 0.5;
        p.paint(canvas, (x, y));
    }
}

/// [`TextShaper`] measurements at one font size.
pub struct FontMeasure<'a> {
    shaper: &'a TextShaper,
    size: f32,
}

impl TextMeasure for FontMeasure<'_> {
    fn text_width(&self, text: &str) -> f32 {
        self.shaper.measure_width(text, self.size)
    }

    fn text_height(&self, text: &str) -> f32 {
        self.shaper.measure_height(text, self.size)
    }
}
