//! Grid types produced by table extraction.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A resolved table cell: its text and the absolute offset of its first
/// fragment in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Offset of the cell's first fragment
    pub start_index: i64,

    /// Resolved cell text
    pub text: String,
}

impl Cell {
    /// Create a cell.
    pub fn new(start_index: i64, text: impl Into<String>) -> Self {
        Self {
            start_index,
            text: text.into(),
        }
    }
}

/// A rectangular grid of resolved cells, reshaped to the table's declared
/// column count. Row 0 is the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGrid {
    /// Declared column count the grid was reshaped by
    pub column_count: usize,

    /// Grid rows, header first
    pub rows: Vec<Vec<Cell>>,
}

impl TableGrid {
    /// Reshape a flat row-major cell sequence into rows of `column_count`.
    ///
    /// The sequence must divide evenly and contain at least one full row for
    /// the header; anything else is a hard error, since truncating or
    /// padding would corrupt later offset-based writes.
    pub fn from_cells(cells: Vec<Cell>, column_count: usize) -> Result<Self> {
        if column_count == 0 {
            return Err(Error::MalformedTable("table declares zero columns".into()));
        }
        if cells.len() % column_count != 0 {
            return Err(Error::MalformedTable(format!(
                "{} cells do not divide into {} columns",
                cells.len(),
                column_count
            )));
        }
        if cells.is_empty() {
            return Err(Error::MalformedTable("table has no header row".into()));
        }

        let mut rows = Vec::with_capacity(cells.len() / column_count);
        let mut cells = cells.into_iter();
        while cells.len() > 0 {
            rows.push(cells.by_ref().take(column_count).collect());
        }
        Ok(Self { column_count, rows })
    }

    /// Header texts (row 0).
    pub fn headers(&self) -> Vec<&str> {
        self.rows[0].iter().map(|c| c.text.as_str()).collect()
    }

    /// Number of data rows below the header.
    pub fn data_row_count(&self) -> usize {
        self.rows.len() - 1
    }

    /// Split off the header row and transpose the data region, yielding the
    /// column-major interchange form: `headers[i]` owns the i-th value of
    /// every data row.
    pub fn into_columns(self) -> ColumnTable {
        let column_count = self.column_count;
        let mut rows = self.rows.into_iter();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.into_iter().map(|c| c.text).collect())
            .unwrap_or_default();

        let mut columns = vec![Vec::new(); column_count];
        for row in rows {
            for (i, cell) in row.into_iter().enumerate() {
                columns[i].push(cell.text);
            }
        }
        ColumnTable { headers, columns }
    }
}

/// Rectangular tabular data as a mapping of column name to ordered string
/// values.
///
/// This is the interchange shape shared with spreadsheet-like containers:
/// every value is a string, and `columns[i]` holds the values under
/// `headers[i]`. Column order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTable {
    /// Column names, in order
    pub headers: Vec<String>,

    /// Column values, parallel to `headers`
    pub columns: Vec<Vec<String>>,
}

impl ColumnTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (name, values) pairs, validating rectangularity.
    pub fn from_columns<S: Into<String>>(pairs: Vec<(S, Vec<String>)>) -> Result<Self> {
        let mut headers = Vec::with_capacity(pairs.len());
        let mut columns = Vec::with_capacity(pairs.len());
        for (name, values) in pairs {
            headers.push(name.into());
            columns.push(values);
        }
        if let Some(first) = columns.first() {
            let len = first.len();
            if columns.iter().any(|c| c.len() != len) {
                return Err(Error::MalformedTable(
                    "columns have unequal lengths".into(),
                ));
            }
        }
        Ok(Self { headers, columns })
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (excluding the header).
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Look up a column's values by name.
    pub fn column(&self, name: &str) -> Result<&[String]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| Error::NotFound(format!("column {name:?}")))
    }

    /// Append a data row.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(Error::MalformedTable(format!(
                "row has {} values but table has {} columns",
                row.len(),
                self.headers.len()
            )));
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value);
        }
        Ok(())
    }

    /// All cell texts in row-major order, headers first.
    ///
    /// This is the value sequence the write path pairs with document cell
    /// offsets.
    pub fn cell_texts(&self) -> Vec<&str> {
        let mut texts: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        for row in 0..self.row_count() {
            for column in &self.columns {
                texts.push(column[row].as_str());
            }
        }
        texts
    }
}
