//! Table extractor: resolve a located table into a rectangular grid.

use crate::error::{Error, Result};
use crate::extract::grid::{Cell, TableGrid};
use crate::extract::locator::locate;
use crate::model::{Document, ParagraphElement, TableCell, TableElement};
use log::debug;

/// Locate the table marked by `table_id` and extract its data region as a
/// grid.
///
/// The first `header_row_index` rows are skipped entirely (title and caption
/// rows above the data region); the next row becomes the grid's header row.
/// When `preserve_format` is true, suggested deletions resolve to a
/// same-length run of spaces instead of the empty string, so that the
/// document's character count, and with it every later offset-based write,
/// stays valid.
///
/// A locator miss yields `Ok(None)`; structural violations (a non-table
/// match, a header row index past the end, a cell stream that does not
/// divide into the declared column count) are hard errors.
pub fn extract(
    doc: &Document,
    table_id: &str,
    header_row_index: usize,
    preserve_format: bool,
) -> Result<Option<TableGrid>> {
    let Some(element) = locate(&doc.body.content, table_id) else {
        return Ok(None);
    };
    let table = element.as_table().ok_or_else(|| {
        Error::MalformedTable(format!("element containing {table_id:?} is not a table"))
    })?;
    extract_from(table, header_row_index, preserve_format).map(Some)
}

/// Extract a table's data region as a grid, without locating it first.
pub fn extract_from(
    table: &TableElement,
    header_row_index: usize,
    preserve_format: bool,
) -> Result<TableGrid> {
    if header_row_index >= table.table_rows.len() {
        return Err(Error::MalformedTable(format!(
            "header row index {header_row_index} out of range for table with {} rows",
            table.table_rows.len()
        )));
    }

    let mut cells = Vec::new();
    for row in &table.table_rows[header_row_index..] {
        for cell in &row.table_cells {
            cells.push(read_cell(cell, preserve_format)?);
        }
    }
    debug!(
        "extracted {} cells from table with {} declared columns",
        cells.len(),
        table.columns
    );

    TableGrid::from_cells(cells, table.columns)
}

/// Resolve one table cell: concatenate its paragraphs' fragments in order,
/// keeping the offset of the first fragment.
fn read_cell(cell: &TableCell, preserve_format: bool) -> Result<Cell> {
    let mut text = String::new();
    let mut start_index = None;

    for element in &cell.content {
        let Some(paragraph) = &element.paragraph else {
            continue;
        };
        for elem in &paragraph.elements {
            if start_index.is_none() {
                start_index = elem.start_index;
            }
            resolve_fragment(elem, preserve_format, &mut text);
        }
    }

    let start_index = start_index.ok_or_else(|| {
        Error::MalformedTable("table cell has no addressable text fragment".into())
    })?;
    Ok(Cell { start_index, text })
}

fn resolve_fragment(elem: &ParagraphElement, preserve_format: bool, out: &mut String) {
    let Some(run) = &elem.text_run else { return };
    let content = run.content.as_deref().unwrap_or_default();
    if run.is_suggested_deletion() {
        if preserve_format {
            out.extend(std::iter::repeat(' ').take(content.chars().count()));
        }
    } else {
        out.push_str(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Body, Paragraph, ParagraphElement, StructuralElement, TableRow,
    };

    fn doc_with_table(table: TableElement) -> Document {
        Document {
            body: Body {
                content: vec![StructuralElement::from_table(10, table)],
            },
            ..Default::default()
        }
    }

    fn two_by_two() -> TableElement {
        TableElement::new(
            2,
            vec![
                TableRow::new(vec![
                    TableCell::with_text(11, "TBL_9 Name"),
                    TableCell::with_text(25, "Age"),
                ]),
                TableRow::new(vec![
                    TableCell::with_text(32, "Alice"),
                    TableCell::with_text(41, "30"),
                ]),
            ],
        )
    }

    #[test]
    fn test_extract_basic() {
        let doc = doc_with_table(two_by_two());
        let grid = extract(&doc, "TBL_9", 0, false).unwrap().unwrap();
        assert_eq!(grid.headers(), vec!["TBL_9 Name", "Age"]);
        assert_eq!(grid.data_row_count(), 1);
        assert_eq!(grid.rows[1][0].text, "Alice");
        assert_eq!(grid.rows[1][0].start_index, 33);
    }

    #[test]
    fn test_extract_miss_is_none() {
        let doc = doc_with_table(two_by_two());
        assert!(extract(&doc, "NOPE", 0, false).unwrap().is_none());
    }

    #[test]
    fn test_extract_non_table_match_is_error() {
        let doc = Document {
            body: Body {
                content: vec![StructuralElement::from_paragraph(Paragraph::with_text(
                    1, "TBL_9 lives in prose",
                ))],
            },
            ..Default::default()
        };
        assert!(matches!(
            extract(&doc, "TBL_9", 0, false),
            Err(Error::MalformedTable(_))
        ));
    }

    #[test]
    fn test_header_row_index_out_of_range() {
        let err = extract_from(&two_by_two(), 2, false).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(_)));
    }

    #[test]
    fn test_header_row_index_skips_title_rows() {
        let table = TableElement::new(
            2,
            vec![
                TableRow::new(vec![
                    TableCell::with_text(11, "Quarterly report TBL_9"),
                    TableCell::with_text(40, ""),
                ]),
                TableRow::new(vec![
                    TableCell::with_text(44, "Name"),
                    TableCell::with_text(52, "Age"),
                ]),
                TableRow::new(vec![
                    TableCell::with_text(59, "Alice"),
                    TableCell::with_text(68, "30"),
                ]),
            ],
        );
        let grid = extract_from(&table, 1, false).unwrap();
        assert_eq!(grid.headers(), vec!["Name", "Age"]);
        assert_eq!(grid.rows[1][1].text, "30");
    }

    #[test]
    fn test_suggested_deletion_resolution() {
        let cell = TableCell {
            start_index: Some(5),
            end_index: None,
            content: vec![StructuralElement::from_paragraph(Paragraph {
                elements: vec![
                    ParagraphElement::run(6, "ok "),
                    ParagraphElement::suggested_deletion(9, "gone"),
                ],
            })],
        };
        let table = TableElement::new(1, vec![TableRow::new(vec![cell])]);

        let dropped = extract_from(&table, 0, false).unwrap();
        assert_eq!(dropped.rows[0][0].text, "ok ");

        let preserved = extract_from(&table, 0, true).unwrap();
        assert_eq!(preserved.rows[0][0].text, "ok     ");
        assert_eq!(preserved.rows[0][0].text.len(), "ok gone".len());
    }

    #[test]
    fn test_ragged_row_is_error() {
        // 3 cells against 2 declared columns.
        let table = TableElement::new(
            2,
            vec![
                TableRow::new(vec![
                    TableCell::with_text(11, "a"),
                    TableCell::with_text(16, "b"),
                ]),
                TableRow::new(vec![TableCell::with_text(21, "c")]),
            ],
        );
        let err = extract_from(&table, 0, false).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(_)));
    }

    #[test]
    fn test_cell_without_fragments_is_error() {
        let table = TableElement::new(
            1,
            vec![TableRow::new(vec![TableCell {
                start_index: Some(5),
                end_index: None,
                content: Vec::new(),
            }])],
        );
        let err = extract_from(&table, 0, false).unwrap_err();
        assert!(matches!(err, Error::MalformedTable(_)));
    }
}
