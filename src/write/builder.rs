//! Write-request builders.
//!
//! Both builders are pure: given identical inputs they produce identical
//! operation lists, and neither performs I/O.

use crate::error::{Error, Result};
use crate::extract::ColumnTable;
use crate::model::StructuralElement;
use crate::write::request::{
    InsertTableRow, InsertText, Location, ReplaceAllText, Request, SubstringMatch,
    TableCellLocation,
};
use log::debug;

/// Build `row_count` row insertions below row `insert_index` of `table`.
///
/// Every operation targets the same row index with `insertBelow`: the
/// editing API applies them against a growing table where each inserted row
/// becomes the new reference point. That repeated-index form is the API's
/// documented contract for appending a run of rows and is replicated here
/// verbatim.
pub fn insert_rows(
    table: &StructuralElement,
    row_count: usize,
    insert_index: usize,
) -> Result<Vec<Request>> {
    let table_start = table
        .start_index
        .ok_or_else(|| Error::MalformedTable("table element has no start index".into()))?;

    let request = Request::InsertTableRow(InsertTableRow {
        table_cell_location: TableCellLocation {
            table_start_location: Location { index: table_start },
            row_index: insert_index,
        },
        insert_below: true,
    });
    Ok(vec![request; row_count])
}

/// Build text insertions filling the cells of `table` from row
/// `first_row_index` onward with `data` (headers first, then values in
/// row-major order).
///
/// All target offsets are computed from the pre-insertion document, then the
/// operations are emitted in reverse row-major order (last row first, last
/// cell within a row first) at each cell's start offset plus one, skipping
/// the cell's leading structural character. Writing the highest offsets
/// first keeps the lower, already-computed offsets valid while the batch is
/// applied; the emitted `location.index` sequence is strictly decreasing.
pub fn insert_text(
    table: &StructuralElement,
    data: &ColumnTable,
    first_row_index: usize,
) -> Result<Vec<Request>> {
    let table_element = table
        .as_table()
        .ok_or_else(|| Error::MalformedTable("element is not a table".into()))?;

    let mut offsets = Vec::new();
    let rows = table_element.table_rows.get(first_row_index..).unwrap_or(&[]);
    for row in rows {
        for cell in &row.table_cells {
            let start = cell.start_index.ok_or_else(|| {
                Error::MalformedTable("table cell has no start index".into())
            })?;
            offsets.push(start + 1);
        }
    }

    let texts = data.cell_texts();
    if offsets.len() != texts.len() {
        return Err(Error::MalformedTable(format!(
            "table addresses {} cells from row {first_row_index} but data provides {}",
            offsets.len(),
            texts.len()
        )));
    }
    debug!("building {} text insertions in write-backwards order", texts.len());

    let requests = offsets
        .into_iter()
        .rev()
        .zip(texts.into_iter().rev())
        .map(|(index, text)| {
            Request::InsertText(InsertText {
                location: Location { index },
                text: text.to_string(),
            })
        })
        .collect();
    Ok(requests)
}

/// Build a single case-sensitive global find/replace.
pub fn replace_text(placeholder: &str, replacement: &str) -> Vec<Request> {
    vec![Request::ReplaceAllText(ReplaceAllText {
        contains_text: SubstringMatch {
            text: placeholder.to_string(),
            match_case: true,
        },
        replace_text: replacement.to_string(),
    })]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TableCell, TableElement, TableRow};

    fn table_element() -> StructuralElement {
        StructuralElement::from_table(
            100,
            TableElement::new(
                2,
                vec![
                    TableRow::new(vec![
                        TableCell::with_text(101, "title"),
                        TableCell::with_text(110, ""),
                    ]),
                    TableRow::new(vec![
                        TableCell::with_text(115, ""),
                        TableCell::with_text(120, ""),
                    ]),
                    TableRow::new(vec![
                        TableCell::with_text(125, ""),
                        TableCell::with_text(130, ""),
                    ]),
                ],
            ),
        )
    }

    fn data() -> ColumnTable {
        ColumnTable::from_columns(vec![
            ("H1", vec!["a".to_string()]),
            ("H2", vec!["b".to_string()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_insert_rows_repeats_same_location() {
        let requests = insert_rows(&table_element(), 3, 1).unwrap();
        assert_eq!(requests.len(), 3);
        for request in &requests {
            assert_eq!(
                serde_json::to_value(request).unwrap(),
                serde_json::json!({
                    "insertTableRow": {
                        "tableCellLocation": {
                            "tableStartLocation": {"index": 100},
                            "rowIndex": 1
                        },
                        "insertBelow": true
                    }
                })
            );
        }
    }

    #[test]
    fn test_insert_rows_missing_start_index() {
        let element = StructuralElement::default();
        assert!(matches!(
            insert_rows(&element, 1, 0),
            Err(Error::MalformedTable(_))
        ));
    }

    #[test]
    fn test_insert_text_writes_backwards() {
        let requests = insert_text(&table_element(), &data(), 1).unwrap();
        assert_eq!(requests.len(), 4);

        let indexes: Vec<i64> = requests.iter().filter_map(|r| r.insert_index()).collect();
        assert_eq!(indexes, vec![131, 126, 121, 116]);
        assert!(indexes.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_insert_text_pairs_offsets_and_values() {
        let requests = insert_text(&table_element(), &data(), 1).unwrap();
        // Reverse row-major: last cell gets the last value.
        let Request::InsertText(first) = &requests[0] else {
            panic!("expected insertText");
        };
        assert_eq!(first.location.index, 131);
        assert_eq!(first.text, "b");
        let Request::InsertText(last) = &requests[3] else {
            panic!("expected insertText");
        };
        assert_eq!(last.location.index, 116);
        assert_eq!(last.text, "H1");
    }

    #[test]
    fn test_insert_text_cell_count_mismatch() {
        let short = ColumnTable::from_columns(vec![("H1", vec!["a".to_string()])]).unwrap();
        assert!(matches!(
            insert_text(&table_element(), &short, 1),
            Err(Error::MalformedTable(_))
        ));
    }

    #[test]
    fn test_insert_text_non_table_element() {
        let element = StructuralElement::default();
        assert!(matches!(
            insert_text(&element, &data(), 0),
            Err(Error::MalformedTable(_))
        ));
    }

    #[test]
    fn test_replace_text_single_request() {
        let requests = replace_text("{{name}}", "Q3");
        assert_eq!(requests.len(), 1);
        assert_eq!(
            serde_json::to_value(&requests[0]).unwrap(),
            serde_json::json!({
                "replaceAllText": {
                    "containsText": {"text": "{{name}}", "matchCase": true},
                    "replaceText": "Q3"
                }
            })
        );
    }
}
