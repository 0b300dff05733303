// File: crates/visualize-core/src/config.rs
// Summary: Chart options, JSON-loadable overrides, and the ordered base <- chart type <- user merge.

use std::path::Path;

use serde::Deserialize;
use skia_safe as skia;
use tracing::warn;

use crate::axis::{AxisOptions, LineTier};
use crate::calendar::MONTH_ABBREVIATIONS;
use crate::error::Result;
use crate::label::LabelFormat;
use crate::range::DEFAULT_TICKS;
use crate::table::{default_parser, CellParser, ColFilter, ParseDirection, RowFilter};
use crate::theme::{parse_color, parse_colors};
use crate::geometry::Insets;

/// Plot width in pixels when neither the user nor the chart type sets one.
pub const DEFAULT_WIDTH: f32 = 640.0;
/// Plot height in pixels when neither the user nor the chart type sets one.
pub const DEFAULT_HEIGHT: f32 = 360.0;

pub const DEFAULT_COLORS: [&str; 9] = [
    "#be1e2d", "#666699", "#92d5ea", "#ee8310", "#8d10ee", "#5a3b16", "#26a4ed", "#f45a90", "#e9e744",
];

/// Day, month, year gridline colors and the weekend highlight.
pub const DEFAULT_LINE_COLORS: [&str; 4] = ["#777", "#aaa", "#eee", "#f4f4f4"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieLabelPos {
    #[default]
    Inside,
    Outside,
}

/// Fully merged options for one render.
#[derive(Clone)]
pub struct ChartOptions {
    pub chart_type: String,
    pub append_title: bool,
    /// Falls back to the table caption when unset.
    pub title: Option<String>,
    pub append_key: bool,
    pub row_filter: RowFilter,
    pub col_filter: ColFilter,
    pub colors: Vec<skia::Color>,
    pub line_colors: Vec<skia::Color>,
    /// Per-series label color; `None` entries use the theme's label color.
    pub text_colors: Vec<Option<skia::Color>>,
    pub parse_direction: ParseDirection,
    pub pie_margin: f32,
    pub pie_labels_as_percent: bool,
    pub pie_label_pos: PieLabelPos,
    pub line_weight: f32,
    pub bar_group_margin: f32,
    pub bar_margin: f32,
    pub y_label_interval: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub ticks: Option<usize>,
    pub parser: Option<CellParser>,
    pub format: Option<LabelFormat>,
    pub center_labels: Option<bool>,
    pub draw_lines: Option<bool>,
    pub from_top: Option<bool>,
    pub theme: String,
    pub font_size: f32,
    pub insets: Insets,
    pub month_names: Vec<String>,
    /// Lay out labels without painting them (deterministic pixels for snapshots).
    pub draw_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            chart_type: "bar".to_string(),
            append_title: true,
            title: None,
            append_key: true,
            row_filter: RowFilter::All,
            col_filter: ColFilter::All,
            colors: hex_defaults(&DEFAULT_COLORS),
            line_colors: hex_defaults(&DEFAULT_LINE_COLORS),
            text_colors: Vec::new(),
            parse_direction: ParseDirection::X,
            pie_margin: 20.0,
            pie_labels_as_percent: true,
            pie_label_pos: PieLabelPos::Inside,
            line_weight: 4.0,
            bar_group_margin: 10.0,
            bar_margin: 1.0,
            y_label_interval: 30.0,
            width: None,
            height: None,
            ticks: None,
            parser: None,
            format: None,
            center_labels: None,
            draw_lines: None,
            from_top: None,
            theme: "light".to_string(),
            font_size: 12.0,
            insets: Insets::default(),
            month_names: MONTH_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
            draw_labels: true,
        }
    }
}

fn hex_defaults(hex: &[&str]) -> Vec<skia::Color> {
    hex.iter().filter_map(|h| parse_color(h).ok()).collect()
}

impl ChartOptions {
    pub fn width(&self) -> f32 {
        self.width.filter(|w| *w > 0.0).unwrap_or(DEFAULT_WIDTH)
    }

    pub fn height(&self) -> f32 {
        self.height.filter(|h| *h > 0.0).unwrap_or(DEFAULT_HEIGHT)
    }

    /// Explicit tick count, else one tick per `y_label_interval` pixels of height.
    pub fn ticks(&self) -> usize {
        if let Some(t) = self.ticks.filter(|t| *t > 0) {
            return t;
        }
        if self.y_label_interval <= 0.0 {
            return DEFAULT_TICKS;
        }
        (self.height() / self.y_label_interval).ceil() as usize
    }

    pub fn parser(&self) -> CellParser {
        self.parser.clone().unwrap_or_else(default_parser)
    }

    /// Axis options carrying the chart-wide `center_labels`/`draw_lines`/`format`/`from_top`.
    pub fn axis_options(&self) -> AxisOptions {
        AxisOptions {
            center_labels: self.center_labels,
            draw_lines: self.draw_lines,
            format: self.format.clone(),
            from_top: self.from_top.unwrap_or(false),
        }
    }

    /// Color of series `i`, cycling through `colors`.
    pub fn series_color(&self, i: usize) -> skia::Color {
        if self.colors.is_empty() {
            return skia::Color::from_argb(255, 0x66, 0x66, 0x99);
        }
        self.colors[i % self.colors.len()]
    }

    pub fn text_color(&self, i: usize) -> Option<skia::Color> {
        self.text_colors.get(i).copied().flatten()
    }

    pub fn line_color(&self, tier: LineTier) -> skia::Color {
        self.tier_color(tier.color_index())
    }

    pub fn weekend_color(&self) -> skia::Color {
        if self.line_colors.len() < 4 {
            warn!(colors = self.line_colors.len(), "no weekend color in line_colors, reusing the last tier");
        }
        self.tier_color(3)
    }

    fn tier_color(&self, index: usize) -> skia::Color {
        self.line_colors
            .get(index)
            .or_else(|| self.line_colors.last())
            .copied()
            .unwrap_or(skia::Color::from_argb(255, 0x77, 0x77, 0x77))
    }
}

/// Partial options layer. Every field is optional; set fields replace the
/// layer below during [`merge_config`]. Field names in JSON follow the
/// camelCase option names (`appendTitle`, `lineColors`, ...).
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(rename = "type")]
    pub chart_type: Option<String>,
    pub append_title: Option<bool>,
    pub title: Option<String>,
    pub append_key: Option<bool>,
    pub row_filter: Option<RowFilter>,
    pub col_filter: Option<ColFilter>,
    pub colors: Option<Vec<String>>,
    pub line_colors: Option<Vec<String>>,
    pub text_colors: Option<Vec<Option<String>>>,
    pub parse_direction: Option<ParseDirection>,
    pub pie_margin: Option<f32>,
    pub pie_labels_as_percent: Option<bool>,
    pub pie_label_pos: Option<PieLabelPos>,
    pub line_weight: Option<f32>,
    pub bar_group_margin: Option<f32>,
    pub bar_margin: Option<f32>,
    pub y_label_interval: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub ticks: Option<usize>,
    #[serde(skip)]
    pub parser: Option<CellParser>,
    #[serde(skip)]
    pub format: Option<LabelFormat>,
    pub center_labels: Option<bool>,
    pub draw_lines: Option<bool>,
    pub from_top: Option<bool>,
    pub theme: Option<String>,
    pub font_size: Option<f32>,
    pub insets: Option<Insets>,
    pub month_names: Option<Vec<String>>,
    pub draw_labels: Option<bool>,
}

impl ConfigOverrides {
    pub fn of_type(chart_type: impl Into<String>) -> Self {
        Self { chart_type: Some(chart_type.into()), ..Self::default() }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Apply this layer on top of `opts`.
    pub fn apply_to(&self, opts: &mut ChartOptions) -> Result<()> {
        macro_rules! replace {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = &self.$field { opts.$field = v.clone(); })*
            };
        }
        macro_rules! optional {
            ($($field:ident),* $(,)?) => {
                $(if self.$field.is_some() { opts.$field = self.$field.clone(); })*
            };
        }

        replace!(
            chart_type, append_title, append_key, row_filter, col_filter, parse_direction,
            pie_margin, pie_labels_as_percent, pie_label_pos, line_weight, bar_group_margin,
            bar_margin, y_label_interval, theme, font_size, insets, month_names, draw_labels,
        );
        optional!(title, width, height, ticks, parser, format, center_labels, draw_lines, from_top);

        if let Some(colors) = &self.colors {
            opts.colors = parse_colors(colors)?;
        }
        if let Some(colors) = &self.line_colors {
            opts.line_colors = parse_colors(colors)?;
        }
        if let Some(colors) = &self.text_colors {
            opts.text_colors = colors
                .iter()
                .map(|c| c.as_deref().map(parse_color).transpose())
                .collect::<Result<_>>()?;
        }
        Ok(())
    }
}

/// Ordered merge: `base`, then the chart type's defaults, then the user's options.
/// Later layers win field by field; nothing is merged inside a field.
pub fn merge_config(
    base: &ChartOptions,
    extension_defaults: &ConfigOverrides,
    user: &ConfigOverrides,
) -> Result<ChartOptions> {
    let mut merged = base.clone();
    extension_defaults.apply_to(&mut merged)?;
    user.apply_to(&mut merged)?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layers_win() {
        let ext = ConfigOverrides { line_weight: Some(2.0), bar_margin: Some(3.0), ..Default::default() };
        let user = ConfigOverrides { line_weight: Some(6.0), title: Some("Sales".into()), ..Default::default() };
        let merged = merge_config(&ChartOptions::default(), &ext, &user).unwrap();
        assert_eq!(merged.line_weight, 6.0);
        assert_eq!(merged.bar_margin, 3.0);
        assert_eq!(merged.title.as_deref(), Some("Sales"));
        assert_eq!(merged.bar_group_margin, 10.0);
    }

    #[test]
    fn ticks_derive_from_height() {
        let mut o = ChartOptions::default();
        o.height = Some(200.0);
        assert_eq!(o.ticks(), 7);
        o.ticks = Some(0);
        assert_eq!(o.ticks(), 7);
        o.ticks = Some(4);
        assert_eq!(o.ticks(), 4);
        o.ticks = None;
        o.y_label_interval = 0.0;
        assert_eq!(o.ticks(), DEFAULT_TICKS);
    }

    #[test]
    fn json_uses_option_names() {
        let o = ConfigOverrides::from_json(
            r##"{"type":"pie","appendKey":false,"lineColors":["#000","#111","#222"],"parseDirection":"y","rowFilter":{"except":[3]}}"##,
        )
        .unwrap();
        let merged = merge_config(&ChartOptions::default(), &ConfigOverrides::default(), &o).unwrap();
        assert_eq!(merged.chart_type, "pie");
        assert!(!merged.append_key);
        assert_eq!(merged.parse_direction, ParseDirection::Y);
        assert_eq!(merged.line_colors.len(), 3);
        // three tiers only: weekend falls back to the year color
        assert_eq!(merged.weekend_color(), merged.line_color(LineTier::Year));
        assert!(matches!(merged.row_filter, RowFilter::Except(ref v) if v == &[3]));
    }

    #[test]
    fn bad_color_is_a_config_error() {
        let user = ConfigOverrides { colors: Some(vec!["red".into()]), ..Default::default() };
        assert!(merge_config(&ChartOptions::default(), &ConfigOverrides::default(), &user).is_err());
        assert!(ConfigOverrides::from_json(r#"{"bogus":1}"#).is_err());
    }
}
