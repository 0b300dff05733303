// File: crates/visualize-core/src/table.rs
// Summary: Table source model (in-memory or CSV), row/column filters, and scraping into a TableMatrix.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MalformedTable, Result};
use crate::stats;

/// Header (`th`-like) or data (`td`-like) cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Header,
    Data,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub text: String,
    pub kind: CellKind,
}

impl Cell {
    pub fn header(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: CellKind::Header }
    }

    pub fn data(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: CellKind::Data }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<Cell>,
}

/// Rectangular source data as supplied by the host: a caption and rows of cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub caption: Option<String>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(TableRow { cells });
    }

    /// Build from plain text rows; the first row and the first column are header cells.
    pub fn from_grid<S: AsRef<str>>(grid: &[Vec<S>]) -> Self {
        let mut table = Self::new();
        for (i, row) in grid.iter().enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(j, text)| grid_cell(i, j, text.as_ref()))
                .collect();
            table.push_row(cells);
        }
        table
    }

    /// Read a CSV document. Same header convention as [`Table::from_grid`];
    /// records may differ in length (scraping reports ragged rows).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut table = Self::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let cells = record.iter().enumerate().map(|(j, text)| grid_cell(i, j, text)).collect();
            table.push_row(cells);
        }
        Ok(table)
    }

    /// Read a CSV file; the file stem becomes the caption.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut table = Self::from_csv_reader(std::io::BufReader::new(file))?;
        table.caption = path.file_stem().map(|s| s.to_string_lossy().into_owned());
        Ok(table)
    }
}

fn grid_cell(row: usize, col: usize, text: &str) -> Cell {
    if row == 0 || col == 0 { Cell::header(text) } else { Cell::data(text) }
}

pub type RowPredicate = Arc<dyn Fn(usize, &TableRow) -> bool + Send + Sync>;
pub type CellPredicate = Arc<dyn Fn(usize, &Cell) -> bool + Send + Sync>;
/// Converts a data cell's text into a value.
pub type CellParser = Arc<dyn Fn(&str) -> f64 + Send + Sync>;

pub fn default_parser() -> CellParser {
    Arc::new(stats::parse_float)
}

/// Selects the table rows taking part in scraping. Indices are positions in the unfiltered table.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFilter {
    #[default]
    All,
    Only(Vec<usize>),
    Except(Vec<usize>),
    #[serde(skip)]
    Custom(RowPredicate),
}

impl RowFilter {
    pub fn matches(&self, index: usize, row: &TableRow) -> bool {
        match self {
            RowFilter::All => true,
            RowFilter::Only(keep) => keep.contains(&index),
            RowFilter::Except(drop) => !drop.contains(&index),
            RowFilter::Custom(pred) => pred(index, row),
        }
    }
}

impl fmt::Debug for RowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowFilter::All => f.write_str("All"),
            RowFilter::Only(v) => f.debug_tuple("Only").field(v).finish(),
            RowFilter::Except(v) => f.debug_tuple("Except").field(v).finish(),
            RowFilter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Selects the cells of each row taking part in scraping. Indices are positions within the unfiltered row.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColFilter {
    #[default]
    All,
    Only(Vec<usize>),
    Except(Vec<usize>),
    Kind(CellKind),
    #[serde(skip)]
    Custom(CellPredicate),
}

impl ColFilter {
    pub fn matches(&self, index: usize, cell: &Cell) -> bool {
        match self {
            ColFilter::All => true,
            ColFilter::Only(keep) => keep.contains(&index),
            ColFilter::Except(drop) => !drop.contains(&index),
            ColFilter::Kind(kind) => cell.kind == *kind,
            ColFilter::Custom(pred) => pred(index, cell),
        }
    }
}

impl fmt::Debug for ColFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColFilter::All => f.write_str("All"),
            ColFilter::Only(v) => f.debug_tuple("Only").field(v).finish(),
            ColFilter::Except(v) => f.debug_tuple("Except").field(v).finish(),
            ColFilter::Kind(k) => f.debug_tuple("Kind").field(k).finish(),
            ColFilter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Which table direction forms a data series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseDirection {
    /// Each data row is a series; column headers label the categories.
    #[default]
    X,
    /// Each data column is a series; row headers label the categories.
    Y,
}

/// Normalized numeric view of a table: headers plus row-major and column-major values.
///
/// Contract: every row has `column_headers().len()` values and `columns()` is
/// the exact transpose of `rows()`. Built once per render and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct TableMatrix {
    row_headers: Vec<String>,
    column_headers: Vec<String>,
    rows: Vec<Vec<f64>>,
    columns: Vec<Vec<f64>>,
}

impl TableMatrix {
    /// Build from headers and row-major values, checking the shape contract.
    pub fn from_rows(
        row_headers: Vec<String>,
        column_headers: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> std::result::Result<Self, MalformedTable> {
        if column_headers.is_empty() {
            return Err(MalformedTable::NoColumns);
        }
        if rows.is_empty() {
            return Err(MalformedTable::NoDataRows);
        }
        if row_headers.len() != rows.len() {
            return Err(MalformedTable::RaggedRow {
                row: row_headers.len().min(rows.len()) + 1,
                expected: column_headers.len(),
                found: 0,
            });
        }
        let expected = column_headers.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(MalformedTable::RaggedRow { row: i + 1, expected, found: row.len() });
        }
        let columns = (0..expected)
            .map(|j| rows.iter().map(|row| row[j]).collect())
            .collect();
        Ok(Self { row_headers, column_headers, rows, columns })
    }

    pub fn row_headers(&self) -> &[String] { &self.row_headers }
    pub fn column_headers(&self) -> &[String] { &self.column_headers }
    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }
    pub fn columns(&self) -> &[Vec<f64>] { &self.columns }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn column_count(&self) -> usize { self.columns.len() }

    /// Series keys and their values for the given parse direction.
    pub fn series(&self, direction: ParseDirection) -> (&[String], &[Vec<f64>]) {
        match direction {
            ParseDirection::X => (&self.row_headers, &self.rows),
            ParseDirection::Y => (&self.column_headers, &self.columns),
        }
    }

    /// Category labels running along each series for the given parse direction.
    pub fn categories(&self, direction: ParseDirection) -> &[String] {
        match direction {
            ParseDirection::X => &self.column_headers,
            ParseDirection::Y => &self.row_headers,
        }
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    pub fn min_value(&self) -> Option<f64> {
        stats::min(&self.values().collect::<Vec<_>>())
    }

    pub fn max_value(&self) -> Option<f64> {
        stats::max(&self.values().collect::<Vec<_>>())
    }
}

/// Scrape `table` into a [`TableMatrix`].
///
/// The first row passing `row_filter` is the header row: its first matched
/// cell is the corner and is dropped, the rest become column headers. In every
/// later row the first matched cell is the row header and the remaining cells
/// go through `parser`. Header-only, empty and ragged tables are rejected with
/// [`MalformedTable`] instead of producing a partial matrix.
pub fn scrape(
    table: &Table,
    row_filter: &RowFilter,
    col_filter: &ColFilter,
    parser: &dyn Fn(&str) -> f64,
) -> Result<TableMatrix> {
    let mut matched = table
        .rows
        .iter()
        .enumerate()
        .filter(|(i, row)| row_filter.matches(*i, row));

    let (_, header) = matched.next().ok_or(MalformedTable::NoHeaderRow)?;
    let column_headers: Vec<String> = matched_cells(header, col_filter)
        .skip(1)
        .map(|cell| cell.text.trim().to_string())
        .collect();
    if column_headers.is_empty() {
        return Err(MalformedTable::NoColumns.into());
    }

    let expected = column_headers.len();
    let mut row_headers = Vec::new();
    let mut rows = Vec::new();
    for (index, row) in matched {
        let mut cells = matched_cells(row, col_filter);
        let Some(head) = cells.next() else {
            return Err(MalformedTable::RaggedRow { row: index, expected, found: 0 }.into());
        };
        let values: Vec<f64> = cells.map(|cell| parser(&cell.text)).collect();
        if values.len() != expected {
            return Err(MalformedTable::RaggedRow { row: index, expected, found: values.len() }.into());
        }
        row_headers.push(head.text.trim().to_string());
        rows.push(values);
    }
    if rows.is_empty() {
        return Err(MalformedTable::NoDataRows.into());
    }

    debug!(rows = rows.len(), columns = expected, "scraped table");
    Ok(TableMatrix::from_rows(row_headers, column_headers, rows)?)
}

fn matched_cells<'a>(row: &'a TableRow, filter: &'a ColFilter) -> impl Iterator<Item = &'a Cell> + 'a {
    row.cells
        .iter()
        .enumerate()
        .filter(move |(j, cell)| filter.matches(*j, cell))
        .map(|(_, cell)| cell)
}
