use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tables_common::table::Table;

/// One CSV file per table: `{base}-page-{p}-table-{i}.csv`.
pub fn write(tables: &[Table], out_dir: &Path, base: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(tables.len());
    for table in tables {
        let path = out_dir.join(format!(
            "{base}-page-{}-table-{}.csv",
            table.page, table.index
        ));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        for row in &table.rows {
            writer
                .write_record(row)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("flushing {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_tables;

    #[test]
    fn one_file_per_table_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let written = write(&sample_tables(), dir.path(), "report").unwrap();
        assert_eq!(written.len(), 2);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&written[0])
            .unwrap();
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "ada");
    }

    #[test]
    fn cells_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let table = Table::new(
            1,
            1,
            vec![
                vec!["label".into(), "value".into()],
                vec!["a, b".into(), "line".into()],
            ],
        );
        let written = write(&[table], dir.path(), "x").unwrap();
        let raw = std::fs::read_to_string(&written[0]).unwrap();
        assert!(raw.contains("\"a, b\""));

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&written[0])
            .unwrap();
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(&rows[1][0], "a, b");
    }
}
