//! Table locator: find the top-level element carrying an identifier marker.

use crate::model::StructuralElement;
use log::warn;

/// Scan the top-level elements of `content` and return the first whose
/// serialized JSON dump contains `table_id` as a substring.
///
/// The marker is an opaque caller-chosen token expected to appear as literal
/// text somewhere inside exactly one table; the test is textual containment
/// over the element's full dump, not a structured field lookup, so callers
/// must ensure uniqueness. Nested tables are not searched.
///
/// A miss is a soft condition: it is logged and reported as `None`, never an
/// error.
pub fn locate<'a>(
    content: &'a [StructuralElement],
    table_id: &str,
) -> Option<&'a StructuralElement> {
    for element in content {
        let dump = serde_json::to_string(element).unwrap_or_default();
        if dump.contains(table_id) {
            return Some(element);
        }
    }

    warn!("table id {table_id:?} not found in any top-level element");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, TableCell, TableElement, TableRow};

    fn marked_table() -> Vec<StructuralElement> {
        vec![
            StructuralElement::from_paragraph(Paragraph::with_text(1, "intro text\n")),
            StructuralElement::from_table(
                12,
                TableElement::new(1, vec![TableRow::new(vec![TableCell::with_text(13, "TBL_1")])]),
            ),
        ]
    }

    #[test]
    fn test_locate_finds_table() {
        let content = marked_table();
        let element = locate(&content, "TBL_1").unwrap();
        assert!(element.as_table().is_some());
    }

    #[test]
    fn test_locate_matches_paragraph_text_too() {
        // Containment is over the whole dump; a marker in a paragraph
        // matches that paragraph. Uniqueness is the caller's contract.
        let content = marked_table();
        let element = locate(&content, "intro").unwrap();
        assert!(element.paragraph.is_some());
    }

    #[test]
    fn test_locate_miss_is_none() {
        let content = marked_table();
        assert!(locate(&content, "NOPE").is_none());
    }

    #[test]
    fn test_locate_empty_content() {
        assert!(locate(&[], "TBL_1").is_none());
    }
}
