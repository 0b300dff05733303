// File: crates/visualize-core/src/lib.rs
// Summary: Core library entry point; table scraping, tick labels, axis layout, chart registry and rendering.

pub mod axis;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod plugin;
pub mod range;
pub mod scale;
pub mod stats;
pub mod table;
pub mod telemetry;
pub mod text;
pub mod theme;

pub use axis::{layout_x_axis, layout_y_axis, AxisOptions, GridLine, LineTier, XAxisLayout, YAxisLayout};
pub use calendar::{layout_date_range, Calendar, CalendarLayout, ChronoCalendar};
pub use chart::{LegendEntry, Rendered, Visualizer};
pub use config::{merge_config, ChartOptions, ConfigOverrides, PieLabelPos};
pub use context::{DrawContext, DrawTarget};
pub use error::{MalformedTable, Result, VisualizeError};
pub use label::Label;
pub use plugin::{ChartRegistry, ChartRenderer};
pub use range::{range_labels, DEFAULT_TICKS};
pub use table::{scrape, Cell, CellKind, ColFilter, ParseDirection, RowFilter, Table, TableMatrix};
pub use text::{FixedMeasure, TextMeasure, TextShaper};
pub use theme::Theme;
