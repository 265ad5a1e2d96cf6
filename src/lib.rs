//! # doctable
//!
//! Document-table synchronization core: read structured tables embedded in a
//! rich-text document tree, reconcile them with tabular data held elsewhere,
//! and build the position-indexed edit operations that write updates back.
//!
//! The library is pure and synchronous. It consumes a deserialized document
//! tree (the editing API's JSON contract, see [`model`]), produces tabular
//! data in column-major interchange form ([`extract::ColumnTable`]), and
//! emits ordered batch-update requests ([`write::Request`]) for a client to
//! submit in one atomic call. Fetching documents and submitting batches are
//! the client's concern, not this crate's.
//!
//! ## Quick Start
//!
//! ```
//! use doctable::{parse_document, TableReader};
//!
//! # fn main() -> doctable::Result<()> {
//! # let json = r#"{"title":"Roster","body":{"content":[
//! #  {"startIndex":1,"endIndex":13,"paragraph":{"elements":[
//! #    {"startIndex":1,"textRun":{"content":"Team roster\n"}}]}},
//! #  {"startIndex":13,"table":{"columns":2,"rows":3,"tableRows":[
//! #   {"tableCells":[
//! #     {"startIndex":14,"content":[{"paragraph":{"elements":[
//! #       {"startIndex":15,"textRun":{"content":"TBL_1 roster\n"}}]}}]},
//! #     {"startIndex":29,"content":[{"paragraph":{"elements":[
//! #       {"startIndex":30,"textRun":{"content":"\n"}}]}}]}]},
//! #   {"tableCells":[
//! #     {"startIndex":32,"content":[{"paragraph":{"elements":[
//! #       {"startIndex":33,"textRun":{"content":"Name\n"}}]}}]},
//! #     {"startIndex":39,"content":[{"paragraph":{"elements":[
//! #       {"startIndex":40,"textRun":{"content":"Age\n"}}]}}]}]},
//! #   {"tableCells":[
//! #     {"startIndex":45,"content":[{"paragraph":{"elements":[
//! #       {"startIndex":46,"textRun":{"content":"Alice\n"}}]}}]},
//! #     {"startIndex":53,"content":[{"paragraph":{"elements":[
//! #       {"startIndex":54,"textRun":{"content":"30\n"}}]}}]}]}
//! #  ]}}]}}"#;
//! let doc = parse_document(json)?;
//!
//! // The marker "TBL_1" sits in the table's title row; the header row is
//! // one row below it.
//! let table = TableReader::new("TBL_1")
//!     .header_row_index(1)
//!     .read(&doc)?
//!     .expect("marker table present");
//!
//! assert_eq!(table.headers, vec!["Name", "Age"]);
//! assert_eq!(table.column("Name")?, ["Alice"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Write path
//!
//! Row and text insertions are computed from a pre-mutation snapshot and
//! must be submitted together as a single batch; see [`write::insert_text`]
//! for the write-backwards ordering invariant.

pub mod error;
pub mod extract;
pub mod model;
pub mod write;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{extract, flatten, locate, normalize, strip_chars, Cell, ColumnTable, TableGrid};
pub use model::{
    Body, Document, ElementKind, Paragraph, ParagraphElement, StructuralElement, TableCell,
    TableElement, TableOfContents, TableRow, TextRun,
};
pub use write::{insert_rows, insert_text, replace_text, Request};

use log::debug;

/// Parse a document tree from its JSON representation.
pub fn parse_document(json: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(json)?;
    if let Some(title) = &doc.title {
        debug!("serving document: {title}");
    }
    Ok(doc)
}

/// Parse a document tree from an already-decoded JSON value.
pub fn document_from_value(value: serde_json::Value) -> Result<Document> {
    Ok(serde_json::from_value(value)?)
}

/// One-call table reader: locate, extract, reshape, and normalize.
///
/// # Example
///
/// ```no_run
/// use doctable::{Document, TableReader};
///
/// # fn read(doc: &Document) -> doctable::Result<()> {
/// let table = TableReader::new("TBL_1")
///     .header_row_index(1)
///     .preserve_format(true)
///     .read(doc)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TableReader {
    table_id: String,
    header_row_index: usize,
    preserve_format: bool,
}

impl TableReader {
    /// Create a reader for the table marked by `table_id`.
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            header_row_index: 0,
            preserve_format: false,
        }
    }

    /// Row index of the header row (1 if a single title row sits above it).
    pub fn header_row_index(mut self, index: usize) -> Self {
        self.header_row_index = index;
        self
    }

    /// Resolve suggested deletions to same-length space runs instead of
    /// dropping them, keeping offsets valid for a later write-back.
    pub fn preserve_format(mut self, preserve: bool) -> Self {
        self.preserve_format = preserve;
        self
    }

    /// Extract and normalize the table as column-major interchange data.
    ///
    /// Returns `Ok(None)` when the marker is not found; callers log and
    /// skip.
    pub fn read(&self, doc: &Document) -> Result<Option<ColumnTable>> {
        let Some(grid) = self.read_grid(doc)? else {
            return Ok(None);
        };
        Ok(Some(normalize(grid.into_columns())))
    }

    /// Extract the raw offset-tagged grid, without normalizing.
    pub fn read_grid(&self, doc: &Document) -> Result<Option<TableGrid>> {
        extract(
            doc,
            &self.table_id,
            self.header_row_index,
            self.preserve_format,
        )
    }
}
