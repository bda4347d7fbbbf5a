use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tables_common::table::Table;

/// One Markdown document with a pipe table per extracted table.
///
/// The first row of each table doubles as the Markdown header row — pipe
/// tables require one, and for detected tables the top row is the most
/// likely header anyway.
pub fn write(tables: &[Table], out_dir: &Path, base: &str) -> Result<Vec<PathBuf>> {
    let path = out_dir.join(format!("{base}.md"));
    std::fs::write(&path, render(tables))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(vec![path])
}

fn render(tables: &[Table]) -> String {
    let mut md = String::new();
    for table in tables {
        let Some((header, body)) = table.rows.split_first() else {
            continue;
        };
        md.push_str(&format!("## Page {}, table {}\n\n", table.page, table.index));
        md.push_str(&row_line(header));
        md.push_str(&separator_line(header.len()));
        for row in body {
            md.push_str(&row_line(row));
        }
        md.push('\n');
    }
    md
}

fn row_line(cells: &[String]) -> String {
    let escaped: Vec<String> = cells.iter().map(|c| escape_cell(c)).collect();
    format!("| {} |\n", escaped.join(" | "))
}

fn separator_line(cols: usize) -> String {
    format!("|{}\n", " --- |".repeat(cols))
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_tables;

    #[test]
    fn pipe_tables_with_separator_rows() {
        let dir = tempfile::tempdir().unwrap();
        let written = write(&sample_tables(), dir.path(), "report").unwrap();
        let md = std::fs::read_to_string(&written[0]).unwrap();

        assert!(md.contains("## Page 1, table 1"));
        assert!(md.contains("| name | dept |"));
        assert!(md.contains("| --- | --- |"));
        assert!(md.contains("| q2 | 95 |"));
    }

    #[test]
    fn pipes_in_cells_are_escaped() {
        let table = Table::new(
            1,
            1,
            vec![
                vec!["a|b".into(), "c".into()],
                vec!["d".into(), "e".into()],
            ],
        );
        let md = render(&[table]);
        assert!(md.contains("a\\|b"));
    }
}
