//! Row-run helpers shared by the flavor detectors.

use tables_common::table::Table;

/// Close out a run of candidate rows, keeping it only if it forms a real
/// table. A lone row is far more often a heading with wide spacing or a
/// stray delimiter line than a one-row table.
pub(crate) fn flush(run: &mut Vec<Vec<String>>, page: usize, tables: &mut Vec<Table>) {
    let rows = std::mem::take(run);
    if rows.len() < 2 {
        return;
    }
    tables.push(Table::new(page, tables.len() + 1, pad(rows)));
}

/// Pad every row to the width of the widest row.
fn pad(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn short_runs_are_discarded() {
        let mut tables = Vec::new();
        let mut run = vec![row(&["only", "one"])];
        flush(&mut run, 1, &mut tables);
        assert!(tables.is_empty());
        assert!(run.is_empty());
    }

    #[test]
    fn kept_runs_are_padded_and_numbered() {
        let mut tables = Vec::new();

        let mut run = vec![row(&["a", "b", "c"]), row(&["d"])];
        flush(&mut run, 2, &mut tables);

        let mut run = vec![row(&["e", "f"]), row(&["g", "h"])];
        flush(&mut run, 2, &mut tables);

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].page, 2);
        assert_eq!(tables[0].index, 1);
        assert_eq!(tables[0].rows[1], row(&["d", "", ""]));
        assert_eq!(tables[1].index, 2);
    }
}
