//! Text encodings for CSV cells and Postgres array literals.

use crate::dataset::ListItem;

/// Render one CSV cell. `None` is an empty cell; a value containing a comma,
/// double quote or newline is quoted with inner quotes doubled.
#[must_use]
pub fn csv_cell(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render a Postgres array literal: `{}` for an absent or empty list,
/// otherwise `{"a","b"}` with `\` and `"` backslash-escaped inside string
/// items. Non-string items are written as their JSON text, unquoted.
#[must_use]
pub fn array_literal(items: Option<&[ListItem]>) -> String {
    let Some(items) = items.filter(|items| !items.is_empty()) else {
        return "{}".to_string();
    };
    let content: Vec<String> = items
        .iter()
        .map(|item| match item {
            ListItem::Text(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            ListItem::Other(value) => value.to_string(),
        })
        .collect();
    format!("{{{}}}", content.join(","))
}

/// Join already-rendered cells into one CSV line.
#[must_use]
pub fn csv_line(cells: &[String]) -> String {
    cells.join(",")
}
