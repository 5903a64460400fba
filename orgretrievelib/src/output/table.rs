//! Fixed-width text table rendering.
//!
//! Layout contract: every column is as wide as its widest entry (header
//! label included, measured in characters), every cell is left-justified
//! and padded to that width - the last column too - and cells are joined by
//! a two-space gap. Every emitted line is therefore exactly the full table
//! width.

use serde::Serialize;

/// Gap between columns.
const COLUMN_GAP: &str = "  ";

/// Horizontal rule character for the separator line.
const RULE: &str = "─";

/// Prefix for table title lines.
const TITLE_PREFIX: &str = "=== ";

/// A titled, fixed-width table of string cells.
#[derive(Debug, Clone, Serialize)]
pub struct TextTable {
    /// Optional title, rendered as `=== Title`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers
    pub headers: Vec<String>,
    /// Data rows; each row has one cell per header
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Table with the given column headers and no rows.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextTable {
            title: None,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Builder: set the title line.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Append a data row.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Width of each column: the maximum character count over the header
    /// label and every cell in that column.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                if index >= widths.len() {
                    widths.push(0);
                }
                widths[index] = widths[index].max(cell.chars().count());
            }
        }
        widths
    }

    /// Render the table: title line, padded header line, `─` rule line, one
    /// padded line per row. Each line ends with a newline; there is no
    /// trailing blank line.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        if let Some(title) = &self.title {
            out.push_str(TITLE_PREFIX);
            out.push_str(title);
            out.push('\n');
        }

        out.push_str(&render_line(&self.headers, &widths));

        let rule_cells: Vec<String> = widths.iter().map(|w| RULE.repeat(*w)).collect();
        out.push_str(&render_line(&rule_cells, &widths));

        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }

        out
    }
}

/// Pad each cell to its column width and join with the column gap.
fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (index, width) in widths.iter().copied().enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        let cell = cells.get(index).map(String::as_str).unwrap_or("");
        line.push_str(&format!("{:<width$}", cell, width = width));
    }
    line.push('\n');
    line
}
