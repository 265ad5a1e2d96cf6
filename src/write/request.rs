//! Batch-update request types.
//!
//! Serialization must match the editing API's wire contract exactly: the
//! externally tagged enum produces `{"insertTableRow": {...}}`,
//! `{"insertText": {...}}`, or `{"replaceAllText": {...}}` objects that are
//! submitted together as one batch.

use serde::{Deserialize, Serialize};

/// A single edit operation in a batch update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    /// Insert a row relative to an existing row of a table.
    InsertTableRow(InsertTableRow),

    /// Insert text at an absolute document offset.
    InsertText(InsertText),

    /// Replace every occurrence of a substring.
    ReplaceAllText(ReplaceAllText),
}

/// Row insertion payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTableRow {
    /// Reference cell the insertion is relative to
    pub table_cell_location: TableCellLocation,

    /// Insert below (rather than above) the reference row
    pub insert_below: bool,
}

/// Addresses a cell by table start offset and row index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellLocation {
    /// Start offset of the containing table
    pub table_start_location: Location,

    /// Zero-based row index within the table
    pub row_index: usize,
}

/// Text insertion payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertText {
    /// Absolute insertion offset
    pub location: Location,

    /// Text to insert
    pub text: String,
}

/// An absolute position in the document's offset space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Offset value
    pub index: i64,
}

/// Global find/replace payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAllText {
    /// Substring match criteria
    pub contains_text: SubstringMatch,

    /// Replacement text
    pub replace_text: String,
}

/// Substring match criteria for find/replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstringMatch {
    /// Text to find
    pub text: String,

    /// Case-sensitive matching
    pub match_case: bool,
}

impl Request {
    /// The insertion offset, for text insertions.
    pub fn insert_index(&self) -> Option<i64> {
        match self {
            Request::InsertText(r) => Some(r.location.index),
            _ => None,
        }
    }
}
