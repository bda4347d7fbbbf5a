//! Lattice flavor: delimiter-based table inference.
//!
//! Bordered tables come through text extraction with their vertical rules
//! rendered as `|` characters and horizontal rules as runs of `-`/`=`.
//! Rows are lines split on `|`; border-only lines are skipped without
//! ending the table.

use tables_common::table::Table;

use crate::grid::flush;

pub fn detect(text: &str, page: usize) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut run: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if is_border(trimmed) {
            // Horizontal rule inside a bordered table; the run continues.
            if run.is_empty() {
                continue;
            }
        } else if let Some(cells) = split_row(trimmed) {
            run.push(cells);
        } else {
            flush(&mut run, page, &mut tables);
        }
    }
    flush(&mut run, page, &mut tables);
    tables
}

/// A line consisting only of box-drawing filler: `+ - = |` and whitespace.
fn is_border(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| matches!(c, '+' | '-' | '=' | '|') || c.is_whitespace())
}

fn split_row(line: &str) -> Option<Vec<String>> {
    if !line.contains('|') {
        return None;
    }
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    // Outer pipes produce empty leading/trailing cells; drop those without
    // touching empty cells in the middle of the row.
    if cells.first().is_some_and(String::is_empty) {
        cells.remove(0);
    }
    if cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    if cells.is_empty() {
        return None;
    }
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bordered_table() {
        let text = "+------+------+\n\
                    | name | dept |\n\
                    +------+------+\n\
                    | ada  | eng  |\n\
                    | bo   | ops  |\n\
                    +------+------+\n";
        let tables = detect(text, 1);
        assert_eq!(tables.len(), 1);
        let t = &tables[0];
        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.rows[0], vec!["name", "dept"]);
        assert_eq!(t.rows[2], vec!["bo", "ops"]);
    }

    #[test]
    fn borderless_pipes_still_count() {
        let text = "alpha | one\nbeta | two\n";
        let tables = detect(text, 2);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].page, 2);
        assert_eq!(tables[0].rows[1], vec!["beta", "two"]);
    }

    #[test]
    fn empty_interior_cells_survive() {
        let text = "| a |   | c |\n| d | e | f |\n";
        let tables = detect(text, 1);
        assert_eq!(tables[0].rows[0], vec!["a", "", "c"]);
    }

    #[test]
    fn prose_between_tables_splits_them() {
        let text = "| a | b |\n| c | d |\nplain paragraph text\n| e | f |\n| g | h |\n";
        let tables = detect(text, 1);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].index, 2);
    }

    #[test]
    fn lone_row_is_not_a_table() {
        let text = "see section 2 | appendix B\nregular text\n";
        assert!(detect(text, 1).is_empty());
    }

    #[test]
    fn border_lines_before_any_row_are_ignored() {
        let text = "----------------\nplain heading\n";
        assert!(detect(text, 1).is_empty());
    }
}
