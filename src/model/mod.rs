//! Document model types mirroring the external document API's JSON contract.
//!
//! Field names serialize as `camelCase` so that a deserialized document tree
//! round-trips to the same shape the editing API emits. All types are plain
//! data: the walking, extraction, and request-building logic lives in the
//! [`crate::extract`] and [`crate::write`] modules.

mod document;
mod paragraph;
mod table;

pub use document::{Body, Document, ElementKind, StructuralElement, TableOfContents};
pub use paragraph::{Paragraph, ParagraphElement, TextRun};
pub use table::{TableCell, TableElement, TableRow};
