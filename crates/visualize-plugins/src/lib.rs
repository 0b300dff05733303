// File: crates/visualize-plugins/src/lib.rs
// Summary: Built-in chart types and their registration as lazily loaded families.

pub mod bar;
pub mod line;
pub mod pie;

use visualize_core::scale::ValueScale;
use visualize_core::{range_labels, AxisOptions, ChartRegistry, DrawContext, Label, Visualizer};

pub use bar::BarChart;
pub use line::LineChart;
pub use pie::PieChart;

/// Register a loader per built-in family. Each family's types are added the
/// first time one of them is requested.
pub fn register_builtin(registry: &mut ChartRegistry) {
    registry.register_loader("bar", |reg: &mut ChartRegistry| reg.register("bar", BarChart));
    registry.register_loader("line", |reg: &mut ChartRegistry| reg.register("line", LineChart::line()));
    registry.register_loader("area", |reg: &mut ChartRegistry| reg.register("area", LineChart::area()));
    registry.register_loader("pie", |reg: &mut ChartRegistry| reg.register("pie", PieChart));
}

/// A visualizer with every built-in chart type available.
pub fn builtin_visualizer() -> Visualizer {
    let mut registry = ChartRegistry::new();
    register_builtin(&mut registry);
    Visualizer::new(registry)
}

/// Numeric Y axis spanning the data and zero; returns the matching value scale.
pub(crate) fn draw_value_axis(ctx: &mut DrawContext<'_>) -> ValueScale {
    let opts = ctx.options;
    let lo = ctx.data.min_value().unwrap_or(0.0).min(0.0);
    let hi = ctx.data.max_value().unwrap_or(0.0).max(0.0);
    let ticks = range_labels(lo, hi, opts.ticks());

    let from_top = opts.from_top.unwrap_or(false);
    let axis = AxisOptions { format: opts.format.clone(), from_top, ..AxisOptions::default() };
    ctx.draw_y_axis(&Label::from_numbers(&ticks), &axis);

    let h = ctx.height();
    if from_top {
        ValueScale::new_linear(h, 0.0, lo, hi)
    } else {
        ValueScale::new_linear(0.0, h, lo, hi)
    }
}
