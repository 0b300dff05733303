// File: crates/visualize-core/src/chart.rs
// Summary: Render orchestration: resolve chart type, merge options, scrape, draw on a Skia raster surface, encode PNG.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{XAxisLayout, YAxisLayout};
use crate::calendar::{Calendar, CalendarLayout, ChronoCalendar};
use crate::config::{merge_config, ChartOptions, ConfigOverrides};
use crate::context::{DrawContext, DrawTarget};
use crate::error::VisualizeError;
use crate::geometry::RectI32;
use crate::plugin::ChartRegistry;
use crate::table::{scrape, Table};
use crate::text::TextShaper;
use crate::theme;

const LEGEND_SWATCH: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

/// Result of one render: the encoded image plus the structured layout behind it.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub width: i32,
    pub height: i32,
    /// Plot area within the surface.
    pub plot: RectI32,
    pub title: String,
    pub legend: Vec<LegendEntry>,
    pub x_axes: Vec<XAxisLayout>,
    pub y_axes: Vec<YAxisLayout>,
    pub calendars: Vec<CalendarLayout>,
    png: Vec<u8>,
}

impl Rendered {
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn write_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &self.png).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }
}

/// Renders tables with the chart types held in its registry.
pub struct Visualizer {
    registry: ChartRegistry,
    base: ChartOptions,
    calendar: Option<Box<dyn Calendar>>,
    shaper: TextShaper,
}

impl Visualizer {
    pub fn new(registry: ChartRegistry) -> Self {
        Self {
            registry,
            base: ChartOptions::default(),
            calendar: Some(Box::new(ChronoCalendar)),
            shaper: TextShaper::new(),
        }
    }

    /// Replace the lowest option layer (defaults for every chart type).
    pub fn with_base_options(mut self, base: ChartOptions) -> Self {
        self.base = base;
        self
    }

    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Some(Box::new(calendar));
        self
    }

    /// Render without date arithmetic; `draw_date_range` then fails.
    pub fn without_calendar(mut self) -> Self {
        self.calendar = None;
        self
    }

    pub fn registry(&self) -> &ChartRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ChartRegistry {
        &mut self.registry
    }

    /// Render `table` as the chart type named in `user` (or the base type).
    ///
    /// The renderer is resolved before anything else; a failed resolution or
    /// a malformed table ends the request without drawing.
    pub fn render(&mut self, table: &Table, user: &ConfigOverrides) -> Result<Rendered> {
        let type_key = user.chart_type.clone().unwrap_or_else(|| self.base.chart_type.clone());
        let renderer = self.registry.resolve(&type_key)?;

        let mut opts = merge_config(&self.base, &renderer.defaults(), user)
            .with_context(|| format!("invalid options for chart type `{type_key}`"))?;
        opts.chart_type = type_key.clone();
        if let Some(parser) = renderer.parser() {
            opts.parser = Some(parser);
        }
        opts.width = Some(opts.width());
        opts.height = Some(opts.height());
        opts.ticks = Some(opts.ticks());

        let parser = opts.parser();
        let matrix = scrape(table, &opts.row_filter, &opts.col_filter, parser.as_ref())
            .context("failed to scrape table")?;

        let plot_w = opts.width();
        let plot_h = opts.height();
        let insets = opts.insets;
        let (plot, (width, height)) = RectI32::plot_area(plot_w, plot_h, &insets)
            .and_then(|plot| Some((plot, plot.surface_size(&insets)?)))
            .ok_or_else(|| VisualizeError::Config(format!("plot size {plot_w}x{plot_h} does not fit a drawing surface")))?;
        debug!(chart_type = %type_key, width, height, "rendering chart");

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let theme = theme::find(&opts.theme);
        let canvas = surface.canvas();
        canvas.clear(theme.background);

        canvas.save();
        canvas.translate((plot.left as f32, plot.top as f32));
        let target = DrawTarget { canvas, text: &self.shaper, width: plot_w, height: plot_h };
        let mut ctx = DrawContext::new(&matrix, &opts, target);
        if let Some(calendar) = self.calendar.as_deref() {
            ctx = ctx.with_calendar(calendar);
        }
        let rendered = renderer.render(&mut ctx);
        let output = ctx.into_output();
        canvas.restore();
        rendered.with_context(|| format!("chart type `{type_key}` failed to render"))?;

        let title = opts.title.clone().or_else(|| table.caption.clone()).unwrap_or_default();
        if opts.append_title && opts.draw_labels && !title.is_empty() {
            self.shaper.draw_centered(canvas, &title, 0.0, width as f32, 8.0, opts.font_size * 1.25, theme.title);
        }

        let legend: Vec<LegendEntry> = output
            .keys
            .iter()
            .enumerate()
            .map(|(i, key)| LegendEntry { label: key.clone(), color: opts.series_color(i) })
            .collect();
        if opts.append_key {
            self.paint_legend(canvas, &legend, &opts, &theme, plot.left as f32, (plot.bottom + 40) as f32);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        info!(chart_type = %type_key, series = legend.len(), bytes = data.size(), "chart rendered");

        Ok(Rendered {
            width,
            height,
            plot,
            title,
            legend,
            x_axes: output.x_axes,
            y_axes: output.y_axes,
            calendars: output.calendars,
            png: data.as_bytes().to_vec(),
        })
    }

    fn paint_legend(&self, canvas: &skia::Canvas, legend: &[LegendEntry], opts: &ChartOptions, theme: &theme::Theme, left: f32, top: f32) {
        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Fill);
        let mut x = left;
        for entry in legend {
            swatch.set_color(entry.color);
            canvas.draw_rect(skia::Rect::from_xywh(x, top + 2.0, LEGEND_SWATCH, LEGEND_SWATCH), &swatch);
            x += LEGEND_SWATCH + 4.0;
            if opts.draw_labels {
                self.shaper.draw_at(canvas, &entry.label, x, top, opts.font_size, theme.label);
            }
            x += self.shaper.measure_width(&entry.label, opts.font_size) + 16.0;
        }
    }
}
