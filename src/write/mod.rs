//! Building batch-update requests against a document.
//!
//! Requests are computed entirely from a pre-mutation snapshot of the
//! document, so the whole list must be submitted as one atomic batch:
//! partial or reordered submission invalidates the offset math. See
//! [`insert_text`] for the write-backwards ordering rule.

mod builder;
mod request;

pub use builder::{insert_rows, insert_text, replace_text};
pub use request::{
    InsertTableRow, InsertText, Location, ReplaceAllText, Request, SubstringMatch,
    TableCellLocation,
};
