// File: crates/visualize-core/src/context.rs
// Summary: Per-render draw context: table data, merged options, Skia target, axis drawing helpers and legend keys.

use chrono::NaiveDate;
use skia_safe as skia;

use crate::axis::{layout_x_axis, layout_y_axis, Align, AxisOptions, GridLine, XAxisLayout, YAxisLayout};
use crate::calendar::{layout_date_range, Calendar, CalendarLayout};
use crate::config::ChartOptions;
use crate::error::{Result, VisualizeError};
use crate::label::Label;
use crate::table::TableMatrix;
use crate::text::TextShaper;
use crate::theme::{self, Theme};

/// Gap between the plot edge and axis label text, in pixels.
const LABEL_GAP: f32 = 6.0;

/// The surface a chart draws on. Coordinates are plot-local: `(0, 0)` is the
/// top-left corner of the plot area, `(width, height)` the bottom-right.
pub struct DrawTarget<'a> {
    pub canvas: &'a skia::Canvas,
    pub text: &'a TextShaper,
    pub width: f32,
    pub height: f32,
}

/// Everything a chart renderer sees during one render pass.
pub struct DrawContext<'a> {
    pub data: &'a TableMatrix,
    pub options: &'a ChartOptions,
    pub target: DrawTarget<'a>,
    pub theme: Theme,
    calendar: Option<&'a dyn Calendar>,
    keys: Vec<String>,
    x_axes: Vec<XAxisLayout>,
    y_axes: Vec<YAxisLayout>,
    calendars: Vec<CalendarLayout>,
}

/// Layout produced while rendering, handed back to the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextOutput {
    pub keys: Vec<String>,
    pub x_axes: Vec<XAxisLayout>,
    pub y_axes: Vec<YAxisLayout>,
    pub calendars: Vec<CalendarLayout>,
}

impl<'a> DrawContext<'a> {
    pub fn new(data: &'a TableMatrix, options: &'a ChartOptions, target: DrawTarget<'a>) -> Self {
        Self {
            data,
            options,
            target,
            theme: theme::find(&options.theme),
            calendar: None,
            keys: Vec::new(),
            x_axes: Vec::new(),
            y_axes: Vec::new(),
            calendars: Vec::new(),
        }
    }

    pub fn with_calendar(mut self, calendar: &'a dyn Calendar) -> Self {
        self.calendar = Some(calendar);
        self
    }

    pub fn canvas(&self) -> &skia::Canvas {
        self.target.canvas
    }

    pub fn width(&self) -> f32 {
        self.target.width
    }

    pub fn height(&self) -> f32 {
        self.target.height
    }

    /// Legend keys registered by the renderer, in series order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn set_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// Lay out and paint labels (below the plot) and vertical gridlines.
    pub fn draw_x_axis(&mut self, labels: &[Label], opts: &AxisOptions) -> &XAxisLayout {
        let layout = {
            let measure = self.target.text.measure(self.options.font_size);
            layout_x_axis(labels, opts, self.width(), self.height(), &measure)
        };
        self.paint_lines(&layout.lines);
        if self.options.draw_labels {
            let top = self.height() + LABEL_GAP;
            for label in &layout.labels {
                match label.align {
                    Align::Center => self.target.text.draw_centered(
                        self.target.canvas, &label.text, label.left, label.width, top,
                        self.options.font_size, self.theme.label,
                    ),
                    Align::Left => self.target.text.draw_at(
                        self.target.canvas, &label.text, label.text_x(), top,
                        self.options.font_size, self.theme.label,
                    ),
                }
            }
        }
        self.x_axes.push(layout);
        &self.x_axes[self.x_axes.len() - 1]
    }

    /// Lay out and paint labels (left of the plot, right-aligned) and horizontal gridlines.
    pub fn draw_y_axis(&mut self, labels: &[Label], opts: &AxisOptions) -> &YAxisLayout {
        let layout = {
            let measure = self.target.text.measure(self.options.font_size);
            layout_y_axis(labels, opts, self.width(), self.height(), &measure)
        };
        self.paint_lines(&layout.lines);
        if self.options.draw_labels {
            for label in &layout.labels {
                let w = self.target.text.measure_width(&label.text, self.options.font_size);
                self.target.text.draw_at(
                    self.target.canvas, &label.text, -LABEL_GAP - w, label.text_top(self.height()),
                    self.options.font_size, self.theme.label,
                );
            }
        }
        self.y_axes.push(layout);
        &self.y_axes[self.y_axes.len() - 1]
    }

    /// Day-by-day date axis along the bottom edge.
    ///
    /// Fails with [`VisualizeError::CalendarCapabilityMissing`] before drawing
    /// anything when no calendar was installed.
    pub fn draw_date_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<&CalendarLayout> {
        let calendar = self.calendar.ok_or(VisualizeError::CalendarCapabilityMissing)?;
        let layout = {
            let measure = self.target.text.measure(self.options.font_size);
            layout_date_range(calendar, start, end, &self.options.month_names, self.width(), self.height(), &measure)
        };

        let canvas = self.target.canvas;
        if !layout.weekends.is_empty() {
            let mut paint = skia::Paint::default();
            paint.set_color(self.options.weekend_color());
            paint.set_style(skia::paint::Style::Fill);
            for band in &layout.weekends {
                let rect = skia::Rect::from_xywh(band.left(), 0.0, band.width, self.height());
                canvas.draw_rect(rect, &paint);
            }
        }
        self.paint_lines(&layout.lines);
        if self.options.draw_labels {
            let top = self.height() + LABEL_GAP;
            for lane in &layout.lanes {
                if let Some(text) = &lane.text {
                    self.target.text.draw_centered(
                        canvas, text, lane.left, lane.width, top, self.options.font_size, self.theme.label,
                    );
                }
            }
        }
        self.calendars.push(layout);
        Ok(&self.calendars[self.calendars.len() - 1])
    }

    fn paint_lines(&self, lines: &[GridLine]) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        for line in lines {
            paint.set_color(self.options.line_color(line.tier));
            paint.set_stroke_width(line.tier.stroke_width());
            self.target.canvas.draw_line((line.x1, line.y1), (line.x2, line.y2), &paint);
        }
    }

    /// Hand back keys and recorded layouts once the renderer is done.
    pub fn into_output(self) -> ContextOutput {
        ContextOutput { keys: self.keys, x_axes: self.x_axes, y_axes: self.y_axes, calendars: self.calendars }
    }
}
