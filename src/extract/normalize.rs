//! Table normalizer: strip document formatting characters from grid values.

use crate::extract::grid::ColumnTable;

/// Characters the editing surface leaks into cell text: newline, vertical
/// tab, non-breaking space, byte order mark, zero-width space.
const STRIP_CHARS: [char; 5] = ['\n', '\u{0b}', '\u{a0}', '\u{feff}', '\u{200b}'];

/// Remove formatting characters from `text`, collapse double spaces in a
/// single left-to-right pass, and trim.
///
/// The collapse is deliberately not iterated: a run of three or more spaces
/// may leave a residual interior space, matching the editing surface's own
/// cleanup behavior.
pub fn strip_chars(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !STRIP_CHARS.contains(c)).collect();
    stripped.replace("  ", " ").trim().to_string()
}

/// Apply [`strip_chars`] to every header and every cell value of a table.
pub fn normalize(table: ColumnTable) -> ColumnTable {
    ColumnTable {
        headers: table.headers.iter().map(|h| strip_chars(h)).collect(),
        columns: table
            .columns
            .iter()
            .map(|column| column.iter().map(|v| strip_chars(v)).collect())
            .collect(),
    }
}
