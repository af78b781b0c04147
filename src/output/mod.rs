//! Column-aligned text rendering of result rows.

use crate::config::Config;
use crate::query::Row;

/// Renders rows as a left-aligned table.
///
/// Every column is as wide as its widest cell plus `column_padding`. Rows
/// may have different lengths. With no rows, `empty_message` is returned.
///
/// ```
/// use jsonexplorer::config::Config;
/// use jsonexplorer::document::value::Value;
/// use jsonexplorer::output::render_table;
///
/// let rows = vec![
///     vec![Value::from("a"), Value::from("alast")],
///     vec![Value::from("bob"), Value::from("blast")],
/// ];
/// assert_eq!(render_table(&rows, &Config::default()), "a    alast\nbob  blast\n");
/// ```
pub fn render_table(rows: &[Row], config: &Config) -> String {
    if rows.is_empty() {
        return format!("{}\n", config.empty_message);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = Vec::new();
    for row in &cells {
        for (col, cell) in row.iter().enumerate() {
            let width = cell.chars().count();
            match widths.get_mut(col) {
                Some(max) => *max = (*max).max(width),
                None => widths.push(width),
            }
        }
    }

    let mut out = String::new();
    for row in &cells {
        let mut line = String::new();
        for (col, cell) in row.iter().enumerate() {
            line.push_str(cell);
            let pad = widths[col] + config.column_padding - cell.chars().count();
            line.push_str(&" ".repeat(pad));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
