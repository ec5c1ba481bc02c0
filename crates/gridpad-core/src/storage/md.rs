//! Markdown export functionality

use crate::document::Document;
use crate::error::Result;
use gridpad_engine::engine::Coord;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Write the current view of the document to a markdown file.
pub fn write_markdown(path: &Path, doc: &Document) -> Result<()> {
    fs::write(path, markdown_content(doc))?;
    Ok(())
}

/// Render the current view (filtered rows, or the whole grid) as markdown.
///
/// Only the columns between the first and last non-empty cell are written.
/// For an unfiltered grid the rows are trimmed the same way.
pub fn markdown_content(doc: &Document) -> String {
    let mut out = String::from("# Sheet\n\n");

    let rows: Vec<usize> = match &doc.filter {
        Some(view) => {
            let _ = writeln!(
                out,
                "*Filtered: column {} contains \"{}\"*\n",
                view.col,
                escape_markdown(&view.needle)
            );
            if view.is_empty() {
                out.push_str("*No matching rows*\n");
                return out;
            }
            view.rows.clone()
        }
        None => match doc.grid.bounds() {
            Some((min_row, _, max_row, _)) => (min_row..=max_row).collect(),
            None => {
                out.push_str("*Empty sheet*\n");
                return out;
            }
        },
    };

    let (min_col, max_col) = column_bounds(doc, &rows).unwrap_or((0, 0));

    out.push_str("|   |");
    for col in min_col..=max_col {
        let _ = write!(out, " {} |", col);
    }
    out.push('\n');

    out.push_str("|---|");
    for _ in min_col..=max_col {
        out.push_str("---|");
    }
    out.push('\n');

    for row in rows {
        let _ = write!(out, "| {} |", Coord::row_label(row));
        for col in min_col..=max_col {
            let text = doc.cell_text(Coord::new(row, col));
            let _ = write!(out, " {} |", escape_markdown(text));
        }
        out.push('\n');
    }

    out
}

fn column_bounds(doc: &Document, rows: &[usize]) -> Option<(usize, usize)> {
    let mut bounds: Option<(usize, usize)> = None;
    for &row in rows {
        let Ok(cells) = doc.grid.row(row) else {
            continue;
        };
        for (col, text) in cells.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            bounds = Some(match bounds {
                None => (col, col),
                Some((lo, hi)) => (lo.min(col), hi.max(col)),
            });
        }
    }
    bounds
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
