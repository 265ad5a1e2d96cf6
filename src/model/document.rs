//! Document-level types.

use super::{Paragraph, TableElement};
use serde::{Deserialize, Serialize};

/// A rich-text document as returned by the editing API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Opaque document identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    /// Document body
    pub body: Body,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level structural elements of the body.
    pub fn content(&self) -> &[StructuralElement] {
        &self.body.content
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.body.content.is_empty()
    }

    /// Get plain text content of the entire document.
    ///
    /// Suggested deletions are dropped as though accepted.
    pub fn plain_text(&self) -> String {
        crate::extract::flatten(&self.body.content)
    }
}

/// The body of a document: an ordered sequence of structural elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    /// Structural elements in document order
    pub content: Vec<StructuralElement>,
}

/// A single structural element: a paragraph, a table, or a table of
/// contents, tagged with its position in the document's global offset space.
///
/// Exactly one of the kind fields is populated for the kinds this library
/// understands; elements of other kinds (section breaks and the like)
/// deserialize with all three unset and are skipped by every walker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuralElement {
    /// Absolute start offset of this element in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,

    /// Absolute end offset (exclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,

    /// Paragraph payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,

    /// Table payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableElement>,

    /// Table-of-contents payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<TableOfContents>,
}

impl StructuralElement {
    /// Wrap a paragraph in a structural element.
    pub fn from_paragraph(paragraph: Paragraph) -> Self {
        Self {
            paragraph: Some(paragraph),
            ..Self::default()
        }
    }

    /// Wrap a table in a structural element.
    pub fn from_table(start_index: i64, table: TableElement) -> Self {
        Self {
            start_index: Some(start_index),
            table: Some(table),
            ..Self::default()
        }
    }

    /// Dispatch over the closed set of element kinds.
    pub fn kind(&self) -> Option<ElementKind<'_>> {
        if let Some(p) = &self.paragraph {
            Some(ElementKind::Paragraph(p))
        } else if let Some(t) = &self.table {
            Some(ElementKind::Table(t))
        } else if let Some(toc) = &self.table_of_contents {
            Some(ElementKind::TableOfContents(toc))
        } else {
            None
        }
    }

    /// Get the table payload, if this element is a table.
    pub fn as_table(&self) -> Option<&TableElement> {
        self.table.as_ref()
    }
}

/// Borrowed view of a structural element's payload.
#[derive(Debug, Clone, Copy)]
pub enum ElementKind<'a> {
    /// A paragraph of text runs
    Paragraph(&'a Paragraph),
    /// An embedded table
    Table(&'a TableElement),
    /// A table of contents, itself a nested content sequence
    TableOfContents(&'a TableOfContents),
}

/// A table of contents: a nested sequence of structural elements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOfContents {
    /// Nested content
    pub content: Vec<StructuralElement>,
}
