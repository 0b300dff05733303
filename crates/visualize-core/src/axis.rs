// File: crates/visualize-core/src/axis.rs
// Summary: X/Y axis label layout: band sizing, centered vs tick-aligned labels, gridlines, Y inversion.

use std::sync::Arc;

use crate::label::{Label, LabelFormat};
use crate::text::TextMeasure;

/// Per-call axis options. Unset flags are derived from the labels:
/// `center_labels` is true when the first label is not numeric, and
/// `draw_lines` defaults to `!center_labels`.
#[derive(Clone, Default)]
pub struct AxisOptions {
    pub center_labels: Option<bool>,
    pub draw_lines: Option<bool>,
    pub format: Option<LabelFormat>,
    /// Y axis only: measure label offsets from the top edge instead of the bottom.
    pub from_top: bool,
}

impl AxisOptions {
    pub fn centered(mut self, center: bool) -> Self {
        self.center_labels = Some(center);
        self
    }

    pub fn lines(mut self, draw: bool) -> Self {
        self.draw_lines = Some(draw);
        self
    }

    pub fn top_down(mut self, from_top: bool) -> Self {
        self.from_top = from_top;
        self
    }

    pub fn with_format(mut self, format: impl Fn(&Label) -> String + Send + Sync + 'static) -> Self {
        self.format = Some(Arc::new(format));
        self
    }

    /// `(center_labels, draw_lines)` after default derivation.
    pub fn resolve(&self, labels: &[Label]) -> (bool, bool) {
        let center = self
            .center_labels
            .unwrap_or_else(|| labels.first().map_or(true, |l| !l.is_numeric()));
        let lines = self.draw_lines.unwrap_or(!center);
        (center, lines)
    }

    pub fn format_label(&self, label: &Label) -> String {
        match &self.format {
            Some(f) => f(label),
            None => label.to_string(),
        }
    }
}

/// Gridline weight tier; also selects the entry of `line_colors`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineTier {
    Day,
    Month,
    Year,
}

impl LineTier {
    pub fn stroke_width(self) -> f32 {
        match self {
            LineTier::Day => 0.1,
            LineTier::Month => 2.0,
            LineTier::Year => 3.0,
        }
    }

    pub fn color_index(self) -> usize {
        match self {
            LineTier::Day => 0,
            LineTier::Month => 1,
            LineTier::Year => 2,
        }
    }
}

/// A gridline in plot-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub tier: LineTier,
}

impl GridLine {
    pub fn vertical(x: f32, height: f32, tier: LineTier) -> Self {
        Self { x1: x, y1: 0.0, x2: x, y2: height, tier }
    }

    pub fn horizontal(y: f32, width: f32, tier: LineTier) -> Self {
        Self { x1: 0.0, y1: y, x2: width, y2: y, tier }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Center,
    Left,
}

/// One X label: a band `[left, left + width]` and the text placed in it.
#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    pub left: f32,
    pub width: f32,
    pub text: String,
    pub align: Align,
    /// Shift applied to the text, negative half its width for tick-aligned labels after the first.
    pub margin_left: f32,
}

impl XLabel {
    /// Left edge of the text for left-aligned labels.
    pub fn text_x(&self) -> f32 {
        self.left + self.margin_left
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Bottom,
    Top,
}

/// One Y label: distance from the reference edge plus the text centred on that line.
#[derive(Clone, Debug, PartialEq)]
pub struct YLabel {
    pub offset: f32,
    pub edge: Edge,
    pub text: String,
    /// Negative half the rendered text height.
    pub margin_top: f32,
}

impl YLabel {
    /// The label's line in canvas coordinates (y grows downward).
    pub fn y(&self, height: f32) -> f32 {
        match self.edge {
            Edge::Bottom => height - self.offset,
            Edge::Top => self.offset,
        }
    }

    /// Top edge of the text in canvas coordinates.
    pub fn text_top(&self, height: f32) -> f32 {
        self.y(height) + self.margin_top
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct XAxisLayout {
    pub width: f32,
    pub height: f32,
    pub centered: bool,
    pub band: f32,
    pub labels: Vec<XLabel>,
    pub lines: Vec<GridLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct YAxisLayout {
    pub width: f32,
    pub height: f32,
    pub centered: bool,
    pub band: f32,
    pub labels: Vec<YLabel>,
    pub lines: Vec<GridLine>,
}

/// Number of bands the labels divide an axis into: one per label when
/// centered, one per gap between labels otherwise.
fn band_count(len: usize, centered: bool) -> usize {
    if centered { len } else { len.saturating_sub(1) }
}

fn band_size(extent: f32, bands: usize) -> f32 {
    if bands == 0 { extent } else { extent / bands as f32 }
}

/// Lay out labels along the horizontal axis of a `width` x `height` canvas.
pub fn layout_x_axis(
    labels: &[Label],
    opts: &AxisOptions,
    width: f32,
    height: f32,
    measure: &dyn TextMeasure,
) -> XAxisLayout {
    let (centered, draw_lines) = opts.resolve(labels);
    let band = band_size(width, band_count(labels.len(), centered));

    let placed = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let text = opts.format_label(label);
            let (align, margin_left) = if centered {
                (Align::Center, 0.0)
            } else if i > 0 {
                (Align::Left, -0.5 * measure.text_width(&text))
            } else {
                (Align::Left, 0.0)
            };
            XLabel { left: band * i as f32, width: band, text, align, margin_left }
        })
        .collect();

    let lines = if draw_lines {
        (0..labels.len())
            .map(|i| GridLine::vertical(band * (i + 1) as f32, height, LineTier::Day))
            .collect()
    } else {
        Vec::new()
    };

    XAxisLayout { width, height, centered, band, labels: placed, lines }
}

/// Lay out labels along the vertical axis. Offsets grow from the bottom edge
/// unless `opts.from_top` is set.
pub fn layout_y_axis(
    labels: &[Label],
    opts: &AxisOptions,
    width: f32,
    height: f32,
    measure: &dyn TextMeasure,
) -> YAxisLayout {
    let (centered, draw_lines) = opts.resolve(labels);
    let band = band_size(height, band_count(labels.len(), centered));
    let edge = if opts.from_top { Edge::Top } else { Edge::Bottom };
    let center_shift = if centered { band / 2.0 } else { 0.0 };

    let placed = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let text = opts.format_label(label);
            let margin_top = -0.5 * measure.text_height(&text);
            YLabel { offset: band * i as f32 + center_shift, edge, text, margin_top }
        })
        .collect();

    let lines = if draw_lines {
        (0..labels.len())
            .map(|i| GridLine::horizontal(band * (i + 1) as f32, width, LineTier::Day))
            .collect()
    } else {
        Vec::new()
    };

    YAxisLayout { width, height, centered, band, labels: placed, lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedMeasure;

    const M: FixedMeasure = FixedMeasure::new(6.0, 10.0);

    #[test]
    fn numeric_labels_default_to_ticks_with_lines() {
        let labels = Label::from_numbers(&[0.0, 50.0, 100.0]);
        assert_eq!(AxisOptions::default().resolve(&labels), (false, true));
        assert_eq!(AxisOptions::default().resolve(&[]), (true, false));
        assert_eq!(AxisOptions::default().centered(false).resolve(&Label::from_texts(&["a"])), (false, true));
        assert_eq!(AxisOptions::default().lines(true).resolve(&Label::from_texts(&["a"])), (true, true));
    }

    #[test]
    fn format_applies_to_text() {
        let opts = AxisOptions::default().with_format(|l| format!("{l}%"));
        let layout = layout_x_axis(&Label::from_numbers(&[0.0, 10.0]), &opts, 100.0, 50.0, &M);
        assert_eq!(layout.labels[1].text, "10%");
    }

    #[test]
    fn single_tick_label_spans_full_width() {
        let layout = layout_x_axis(&Label::from_numbers(&[5.0]), &AxisOptions::default(), 120.0, 40.0, &M);
        assert_eq!(layout.band, 120.0);
    }
}
