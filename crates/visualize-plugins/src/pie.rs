// File: crates/visualize-plugins/src/pie.rs
// Summary: Pie chart; one slice per series sized by the series total, labelled inside or outside.

use skia_safe as skia;
use tracing::warn;
use visualize_core::label::format_number;
use visualize_core::stats;
use visualize_core::{ChartRenderer, DrawContext, PieLabelPos};

pub struct PieChart;

/// Angles in degrees, clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub series: usize,
    pub start: f32,
    pub sweep: f32,
    pub value: f64,
    /// Fraction of the pie, `0..=1`.
    pub share: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f32 {
        self.start + self.sweep / 2.0
    }

    pub fn label(&self, as_percent: bool) -> String {
        if as_percent {
            format!("{}%", (self.share * 100.0).round())
        } else {
            format_number(self.value)
        }
    }
}

/// Slices for positive totals. Zero and negative totals get no slice.
pub fn layout_pie(totals: &[f64]) -> Vec<PieSlice> {
    let sum: f64 = totals.iter().filter(|t| **t > 0.0).sum();
    if sum <= 0.0 {
        return Vec::new();
    }
    let mut start = -90.0f32;
    let mut slices = Vec::new();
    for (series, value) in totals.iter().enumerate() {
        if *value <= 0.0 {
            continue;
        }
        let share = value / sum;
        let sweep = (share * 360.0) as f32;
        slices.push(PieSlice { series, start, sweep, value: *value, share });
        start += sweep;
    }
    slices
}

/// Point at `radius` from `center` along `angle` degrees.
fn polar(center: (f32, f32), radius: f32, angle: f32) -> (f32, f32) {
    let rad = angle.to_radians();
    (center.0 + radius * rad.cos(), center.1 + radius * rad.sin())
}

impl ChartRenderer for PieChart {
    fn render(&self, ctx: &mut DrawContext<'_>) -> visualize_core::Result<()> {
        let data = ctx.data;
        let opts = ctx.options;
        let (keys, series) = data.series(opts.parse_direction);
        let totals: Vec<f64> = series.iter().map(|values| stats::sum(values.as_slice())).collect();
        let slices = layout_pie(&totals);
        if slices.is_empty() {
            warn!("pie has no positive series totals, nothing drawn");
        }

        let (w, h) = (ctx.width(), ctx.height());
        let center = (w / 2.0, h / 2.0);
        let radius = (w.min(h) / 2.0 - opts.pie_margin).max(1.0);
        let oval = skia::Rect::from_xywh(center.0 - radius, center.1 - radius, radius * 2.0, radius * 2.0);

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        for slice in &slices {
            paint.set_color(opts.series_color(slice.series));
            ctx.canvas().draw_arc(oval, slice.start, slice.sweep, true, &paint);
        }

        if opts.draw_labels {
            let text = ctx.target.text;
            let label_radius = match opts.pie_label_pos {
                PieLabelPos::Inside => radius * 0.6,
                PieLabelPos::Outside => radius + opts.pie_margin / 2.0,
            };
            for slice in &slices {
                let label = slice.label(opts.pie_labels_as_percent);
                let (x, y) = polar(center, label_radius, slice.mid_angle());
                let tw = text.measure_width(&label, opts.font_size);
                let th = text.measure_height(&label, opts.font_size);
                let color = opts.text_color(slice.series).unwrap_or(ctx.theme.label);
                text.draw_at(ctx.canvas(), &label, x - tw / 2.0, y - th / 2.0, opts.font_size, color);
            }
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
    fn slices_follow_totals() {
        let slices = layout_pie(&[10.0, 30.0]);
        assert_eq!(slices.len(), 2);
        assert_relative_eq!(slices[0].start, -90.0);
        assert_relative_eq!(slices[0].sweep, 90.0);
        assert_relative_eq!(slices[1].start, 0.0);
        assert_relative_eq!(slices[1].sweep, 270.0);
        assert_eq!(slices[0].label(true), "25%");
        assert_eq!(slices[1].label(false), "30");
    }

    #[test]
    fn non_positive_totals_are_skipped() {
        let slices = layout_pie(&[0.0, -5.0, 2.0]);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].series, 2);
        assert_relative_eq!(slices[0].sweep, 360.0);
        assert!(layout_pie(&[0.0, 0.0]).is_empty());
        assert!(layout_pie(&[]).is_empty());
    }

    #[test]
    fn polar_starts_at_twelve_oclock() {
        let (x, y) = polar((50.0, 50.0), 10.0, -90.0);
        assert_relative_eq!(x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(y, 40.0, epsilon = 1e-4);
    }
}
