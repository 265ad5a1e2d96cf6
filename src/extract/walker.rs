//! Content tree walker: flatten a nested content sequence to plain text.

use crate::model::{ElementKind, StructuralElement};

/// Concatenate, in document order, the text of every non-suggested-deletion
/// run reachable from `content`.
///
/// Tables are walked row-major then cell-major; table-of-contents nodes are
/// walked transparently. Suggested deletions are dropped as though accepted.
/// A run with no text payload contributes the empty string. Recursion depth
/// is bounded only by the nesting of the document itself.
pub fn flatten(content: &[StructuralElement]) -> String {
    let mut out = String::new();
    flatten_into(content, &mut out);
    out
}

fn flatten_into(content: &[StructuralElement], out: &mut String) {
    for element in content {
        match element.kind() {
            Some(ElementKind::Paragraph(paragraph)) => {
                for elem in &paragraph.elements {
                    let Some(run) = &elem.text_run else { continue };
                    if run.is_suggested_deletion() {
                        continue;
                    }
                    if let Some(text) = &run.content {
                        out.push_str(text);
                    }
                }
            }
            Some(ElementKind::Table(table)) => {
                for row in &table.table_rows {
                    for cell in &row.table_cells {
                        flatten_into(&cell.content, out);
                    }
                }
            }
            Some(ElementKind::TableOfContents(toc)) => flatten_into(&toc.content, out),
            None => {}
        }
    }
}
