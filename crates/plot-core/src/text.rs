// File: crates/plot-core/src/text.rs
// Summary: Text shaping for titles, axis labels, and tick labels via Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

// Wide enough that single-line labels never wrap.
const LAYOUT_WIDTH: f32 = 10_000.0;

const SANS_FAMILIES: [&str; 6] =
    ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
// Tick labels align better with fixed-width digits.
const MONO_FAMILIES: [&str; 5] =
    ["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        if mono_numeric {
            style.set_font_families(&MONO_FAMILIES);
        } else {
            style.set_font_families(&SANS_FAMILIES);
        }

        let para_style = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&para_style, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(LAYOUT_WIDTH);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        let transparent = skia::Color::from_argb(0, 0, 0, 0);
        self.layout(text, size, transparent, mono_numeric).longest_line()
    }

    // Lays out once and shifts by a fraction of the measured width, so
    // centered and right-aligned text do not pay for a second shaping pass.
    fn paint_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
        anchor: f32,
    ) {
        let p = self.layout(text, size, color, mono_numeric);
        let dx = p.longest_line() * anchor;
        // Paragraph paints from its top-left; `y` is treated as a baseline
        // and pulled up by an approximate ascent.
        p.paint(canvas, (x - dx, y - size * 0.8));
    }

    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        self.paint_anchored(canvas, text, x, y, size, color, mono_numeric, 0.0);
    }

    pub fn draw_center(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        self.paint_anchored(canvas, text, cx, y, size, color, mono_numeric, 0.5);
    }

    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right_x: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        self.paint_anchored(canvas, text, right_x, y, size, color, mono_numeric, 1.0);
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
