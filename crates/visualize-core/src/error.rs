// File: crates/visualize-core/src/error.rs
// Summary: Error types shared by scraping, layout, registry and rendering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VisualizeError>;

/// Structural problems detected while scraping a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTable {
    #[error("no row matched the row filter, header row missing")]
    NoHeaderRow,
    #[error("header row has no column headers after the corner cell")]
    NoColumns,
    #[error("table has a header row but no data rows")]
    NoDataRows,
    #[error("data row {row} has {found} value cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum VisualizeError {
    /// The chart type could not be resolved in the registry. Terminal for the render request.
    #[error("failed to load chart type `{type_key}`: {reason}")]
    ExtensionLoad { type_key: String, reason: String },

    #[error("date range axis requires a calendar capability, none is installed")]
    CalendarCapabilityMissing,

    #[error("malformed table: {0}")]
    MalformedTable(#[from] MalformedTable),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("drawing surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
