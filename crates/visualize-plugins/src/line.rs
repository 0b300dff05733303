// File: crates/visualize-plugins/src/line.rs
// Summary: Line and area charts; one polyline per series over tick-aligned category positions.

use skia_safe as skia;
use visualize_core::geometry::clamp;
use visualize_core::grid::linspace;
use visualize_core::scale::ValueScale;
use visualize_core::{ChartRenderer, DrawContext, Label};

use crate::draw_value_axis;

pub struct LineChart {
    /// Fill between each series and the zero line (the `area` type).
    pub filled: bool,
}

impl LineChart {
    pub fn line() -> Self {
        Self { filled: false }
    }

    pub fn area() -> Self {
        Self { filled: true }
    }
}

/// Pixel position of each value at its category anchor; `None` for NaN.
pub fn series_points(values: &[f64], width: f32, scale: &ValueScale) -> Vec<Option<(f32, f32)>> {
    let xs = linspace(0.0, width as f64, values.len());
    values
        .iter()
        .zip(xs)
        .map(|(v, x)| (!v.is_nan()).then(|| (x as f32, scale.to_px(*v))))
        .collect()
}

/// Stroke path through `points`; missing points break the line.
fn stroke_path(points: &[Option<(f32, f32)>]) -> skia::Path {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for p in points {
        match p {
            Some(p) if pen_down => {
                path.line_to(*p);
            }
            Some(p) => {
                path.move_to(*p);
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}

/// Closed region between `points` and the zero line; missing points sit on the zero line.
fn fill_path(points: &[Option<(f32, f32)>], width: f32, zero: f32) -> skia::Path {
    let mut path = skia::Path::new();
    path.move_to((0.0, zero));
    let xs = linspace(0.0, width as f64, points.len());
    for (p, x) in points.iter().zip(xs) {
        path.line_to(p.unwrap_or((x as f32, zero)));
    }
    path.line_to((width, zero));
    path.close();
    path
}

impl ChartRenderer for LineChart {
    fn render(&self, ctx: &mut DrawContext<'_>) -> visualize_core::Result<()> {
        let data = ctx.data;
        let opts = ctx.options;
        let (keys, series) = data.series(opts.parse_direction);
        let categories = Label::from_texts(data.categories(opts.parse_direction));

        let scale = draw_value_axis(ctx);
        let mut axis = opts.axis_options();
        // points sit on the ticks, not between them
        axis.center_labels.get_or_insert(false);
        ctx.draw_x_axis(&categories, &axis);

        let width = ctx.width();
        let zero = scale.to_px(clamp(0.0, scale.vmin, scale.vmax));
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(opts.line_weight);
        stroke.set_stroke_join(skia::paint::Join::Round);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        for (s, values) in series.iter().enumerate() {
            let color = opts.series_color(s);
            let points = series_points(values, width, &scale);
            if self.filled {
                fill.set_color(color);
                fill.set_alpha(128);
                ctx.canvas().draw_path(&fill_path(&points, width, zero), &fill);
            }
            stroke.set_color(color);
            ctx.canvas().draw_path(&stroke_path(&points), &stroke);
        }

        ctx.set_keys(keys.iter().cloned());
        Ok(())
    }
}
