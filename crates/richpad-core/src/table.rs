/// Markup for the table insertion command.
use std::fmt::Write;

pub const MIN_TABLE_DIM: usize = 1;
pub const MAX_TABLE_DIM: usize = 20;

/// Builds an empty bordered table with a header row.
///
/// The first row uses `<th>` cells; the rest use `<td>`. Cells hold a `<br>`
/// so the caret can be placed in them.
pub fn table_html(rows: usize, cols: usize) -> String {
    let mut html = String::from("<table class=\"richpad-table\"><tbody>");
    for row in 0..rows {
        let cell = if row == 0 { "th" } else { "td" };
        html.push_str("<tr>");
        for _ in 0..cols {
            let _ = write!(html, "<{cell}><br></{cell}>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table><p><br></p>");
    html
}
