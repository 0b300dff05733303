// File: crates/visualize-plugins/src/bar.rs
// Summary: Grouped bar chart; one band per category, one bar per series inside it.

use skia_safe as skia;
use tracing::debug;
use visualize_core::geometry::clamp;
use visualize_core::scale::ValueScale;
use visualize_core::{ChartRenderer, DrawContext, Label};

use crate::draw_value_axis;

pub struct BarChart;

/// A bar in plot-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub category: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Place `series[s][c]` bars. Each category band loses `group_margin` on both
/// sides, the rest is split evenly between series, and each bar loses
/// `bar_margin` on both sides of its slot. Bars grow from the zero line; NaN
/// values are skipped.
pub fn layout_bars(series: &[Vec<f64>], band: f32, scale: &ValueScale, group_margin: f32, bar_margin: f32) -> Vec<BarRect> {
    let count = series.len().max(1) as f32;
    let group = (band - 2.0 * group_margin).max(0.0);
    let slot = group / count;
    let width = (slot - 2.0 * bar_margin).max(0.0);
    let zero = scale.to_px(clamp(0.0, scale.vmin, scale.vmax));

    let mut bars = Vec::new();
    for (s, values) in series.iter().enumerate() {
        for (c, v) in values.iter().enumerate() {
            if v.is_nan() {
                continue;
            }
            let top = scale.to_px(*v);
            let (y, height) = if top < zero { (top, zero - top) } else { (zero, top - zero) };
            let x = band * c as f32 + group_margin + slot * s as f32 + bar_margin;
            bars.push(BarRect { series: s, category: c, x, y, width, height });
        }
    }
    bars
}

impl ChartRenderer for BarChart {
    fn render(&self, ctx: &mut DrawContext<'_>) -> visualize_core::Result<()> {
        let data = ctx.data;
        let opts = ctx.options;
        let (keys, series) = data.series(opts.parse_direction);
        let categories = Label::from_texts(data.categories(opts.parse_direction));

        let scale = draw_value_axis(ctx);
        let band = ctx.draw_x_axis(&categories, &opts.axis_options()).band;

        let bars = layout_bars(series, band, &scale, opts.bar_group_margin, opts.bar_margin);
        debug!(bars = bars.len(), band, "bar layout");

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        for bar in &bars {
            paint.set_color(opts.series_color(bar.series));
            ctx.canvas().draw_rect(skia::Rect::from_xywh(bar.x, bar.y, bar.width, bar.height), &paint);
        }

        ctx.set_keys(keys.iter().cloned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn groups_split_band_between_series() {
        let scale = ValueScale::new_linear(0.0, 100.0, 0.0, 40.0);
        let bars = layout_bars(&[vec![10.0, 20.0], vec![30.0, 40.0]], 100.0, &scale, 10.0, 1.0);
        assert_eq!(bars.len(), 4);

        let first = bars[0];
        assert_eq!((first.series, first.category), (0, 0));
        assert_relative_eq!(first.x, 11.0);
        assert_relative_eq!(first.width, 38.0);
        assert_relative_eq!(first.y, 75.0);
        assert_relative_eq!(first.height, 25.0);

        let last = bars[3];
        assert_eq!((last.series, last.category), (1, 1));
        assert_relative_eq!(last.x, 151.0);
        assert_relative_eq!(last.y, 0.0);
        assert_relative_eq!(last.height, 100.0);
    }

    #[test]
    fn negative_values_hang_below_zero() {
        let scale = ValueScale::new_linear(0.0, 100.0, -10.0, 10.0);
        let bars = layout_bars(&[vec![-10.0, 10.0]], 50.0, &scale, 0.0, 0.0);
        assert_relative_eq!(bars[0].y, 50.0);
        assert_relative_eq!(bars[0].height, 50.0);
        assert_relative_eq!(bars[1].y, 0.0);
        assert_relative_eq!(bars[1].height, 50.0);
    }

    #[test]
    fn missing_values_leave_gaps() {
        let scale = ValueScale::new_linear(0.0, 100.0, 0.0, 10.0);
        let bars = layout_bars(&[vec![f64::NAN, 5.0]], 50.0, &scale, 0.0, 0.0);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].category, 1);
    }
}
