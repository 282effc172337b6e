// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming and the default series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub title: skia::Color,
    pub legend_bg: skia::Color,
    pub legend_border: skia::Color,
    /// Default cycle for series without an explicit color.
    pub palette: [skia::Color; 8],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            axis_line: skia::Color::from_argb(255, 30, 30, 30),
            axis_label: skia::Color::from_argb(255, 20, 20, 20),
            tick_label: skia::Color::from_argb(255, 60, 60, 60),
            title: skia::Color::from_argb(255, 10, 10, 10),
            legend_bg: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
                skia::Color::from_argb(255, 0x8c, 0x56, 0x4b),
                skia::Color::from_argb(255, 0xe3, 0x77, 0xc2),
                skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 52, 52, 58),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick_label: skia::Color::from_argb(255, 190, 190, 200),
            title: skia::Color::from_argb(255, 240, 240, 248),
            legend_bg: skia::Color::from_argb(204, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: [
                skia::Color::from_argb(255, 0x40, 0xa0, 0xff),
                skia::Color::from_argb(255, 0xff, 0x9f, 0x40),
                skia::Color::from_argb(255, 0x48, 0xc8, 0x78),
                skia::Color::from_argb(255, 0xe8, 0x55, 0x55),
                skia::Color::from_argb(255, 0xb0, 0x80, 0xe0),
                skia::Color::from_argb(255, 0xa8, 0x78, 0x60),
                skia::Color::from_argb(255, 0xf0, 0x90, 0xd0),
                skia::Color::from_argb(255, 0xa0, 0xa0, 0xa8),
            ],
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

/// Parse a `#rrggbb` or `#rgb` hex string into an opaque color.
pub fn parse_hex(s: &str) -> Option<skia::Color> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
        return None;
    }
    let (r, g, b) = match hex.len() {
        6 => (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ),
        3 => {
            // Each shorthand digit doubles: #fa0 is #ffaa00.
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            (channel(0)?, channel(1)?, channel(2)?)
        }
        _ => return None,
    };
    Some(skia::Color::from_argb(255, r, g, b))
}

