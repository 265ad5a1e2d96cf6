//! Table node types.

use super::{Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// A table embedded in a document.
///
/// The declared `columns` count is authoritative: extraction reshapes cell
/// streams by it and never infers width from row lengths.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableElement {
    /// Declared number of rows
    pub rows: usize,

    /// Declared number of columns
    pub columns: usize,

    /// Table rows in document order
    pub table_rows: Vec<TableRow>,
}

impl TableElement {
    /// Create a table from rows, with a declared column count.
    pub fn new(columns: usize, table_rows: Vec<TableRow>) -> Self {
        Self {
            rows: table_rows.len(),
            columns,
            table_rows,
        }
    }

    /// Get the number of rows actually present.
    pub fn row_count(&self) -> usize {
        self.table_rows.len()
    }

    /// Get the total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.table_rows.iter().map(|r| r.table_cells.len()).sum()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.table_rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableRow {
    /// Absolute start offset of the row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,

    /// Absolute end offset (exclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,

    /// Cells in the row
    pub table_cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from cells.
    pub fn new(table_cells: Vec<TableCell>) -> Self {
        Self {
            table_cells,
            ..Self::default()
        }
    }
}

/// A table cell. Cell content is a nested content sequence, so cells may
/// themselves contain tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableCell {
    /// Absolute start offset of the cell's structural marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,

    /// Absolute end offset (exclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,

    /// Nested content of the cell
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    /// Create a cell holding a single paragraph of plain text.
    ///
    /// `start_index` addresses the cell's structural marker; the text run
    /// starts one position later, matching the document offset layout.
    pub fn with_text(start_index: i64, text: impl Into<String>) -> Self {
        Self {
            start_index: Some(start_index),
            end_index: None,
            content: vec![StructuralElement::from_paragraph(Paragraph::with_text(
                start_index + 1,
                text,
            ))],
        }
    }
}
