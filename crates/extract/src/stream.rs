//! Stream flavor: whitespace-alignment table inference.
//!
//! PDF text extraction flattens table cells onto lines with runs of spaces
//! between columns. A line that splits into two or more cells on such runs
//! is a candidate row; two or more consecutive candidate rows form a table.

use std::sync::OnceLock;

use regex::Regex;
use tables_common::table::Table;

use crate::grid::flush;

fn cell_gap() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]{2,}").expect("static regex"))
}

pub fn detect(text: &str, page: usize) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut run: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        match split_row(line) {
            Some(cells) => run.push(cells),
            None => flush(&mut run, page, &mut tables),
        }
    }
    flush(&mut run, page, &mut tables);
    tables
}

/// Split a line into cells at runs of two-or-more spaces.
///
/// Returns `None` for lines that don't look like table rows (blank, or a
/// single undivided cell such as ordinary prose).
fn split_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cells: Vec<String> = cell_gap()
        .split(trimmed)
        .map(|c| c.trim().to_string())
        .collect();
    if cells.len() < 2 {
        return None;
    }
    Some(cells)
}
