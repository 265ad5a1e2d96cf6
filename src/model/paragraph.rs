//! Paragraph and text-run types.

use serde::{Deserialize, Serialize};

/// A paragraph of text runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    /// Elements in the paragraph, offset-ordered
    pub elements: Vec<ParagraphElement>,
}

impl Paragraph {
    /// Create a paragraph holding a single plain text run.
    pub fn with_text(start_index: i64, text: impl Into<String>) -> Self {
        Self {
            elements: vec![ParagraphElement::run(start_index, text)],
        }
    }
}

/// A positioned element within a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphElement {
    /// Absolute start offset of this element in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,

    /// Absolute end offset (exclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,

    /// Text payload; absent for inline objects, page breaks, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

impl ParagraphElement {
    /// Create an element holding a plain text run at the given offset.
    pub fn run(start_index: i64, text: impl Into<String>) -> Self {
        Self {
            start_index: Some(start_index),
            end_index: None,
            text_run: Some(TextRun::text(text)),
        }
    }

    /// Create an element holding a suggested-deletion run at the given offset.
    pub fn suggested_deletion(start_index: i64, text: impl Into<String>) -> Self {
        Self {
            start_index: Some(start_index),
            end_index: None,
            text_run: Some(TextRun::suggested_deletion(text)),
        }
    }
}

/// A run of text with its tracked-change markers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Suggestion ids proposing this run for deletion. Presence of the
    /// field, even empty, marks the run as a suggested deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_deletion_ids: Option<Vec<String>>,
}

impl TextRun {
    /// Create a plain text run.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            suggested_deletion_ids: None,
        }
    }

    /// Create a run marked as a suggested deletion.
    pub fn suggested_deletion(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            suggested_deletion_ids: Some(vec!["suggest.0".to_string()]),
        }
    }

    /// Whether this run is proposed for deletion by a pending suggestion.
    pub fn is_suggested_deletion(&self) -> bool {
        self.suggested_deletion_ids.is_some()
    }
}
