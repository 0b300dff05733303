// File: crates/visualize-core/src/theme.rs
// Summary: Surface themes (background and text colors) and CSS-style hex color parsing.

use skia_safe as skia;

use crate::error::{Result, VisualizeError};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub label: skia::Color,
    pub title: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            label: skia::Color::from_argb(255, 51, 51, 51),
            title: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 250, 250, 255),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            label: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),      // base01
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),      // base03
        }
    }
}

/// Built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_color(text: &str) -> Result<skia::Color> {
    let bad = || VisualizeError::Config(format!("invalid color `{text}`, expected #rgb, #rrggbb or #rrggbbaa"));
    let hex = text.trim().strip_prefix('#').ok_or_else(bad)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let v = channel(&c.to_string())?;
                *slot = v * 17;
            }
            Ok(skia::Color::from_argb(255, rgb[0], rgb[1], rgb[2]))
        }
        6 | 8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = if hex.len() == 8 { channel(&hex[6..8])? } else { 255 };
            Ok(skia::Color::from_argb(a, r, g, b))
        }
        _ => Err(bad()),
    }
}

/// Parse a list of colors, failing on the first bad entry.
pub fn parse_colors<S: AsRef<str>>(texts: &[S]) -> Result<Vec<skia::Color>> {
    texts.iter().map(|t| parse_color(t.as_ref())).collect()
}
