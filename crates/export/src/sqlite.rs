use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;

use tables_common::table::Table;

/// One SQLite database per PDF: `{base}.db`, one SQL table per extracted
/// table named `page{p}_table{i}` with text columns `c1..cN`.
pub fn write(tables: &[Table], out_dir: &Path, base: &str) -> Result<Vec<PathBuf>> {
    let path = out_dir.join(format!("{base}.db"));
    // Re-runs replace the database wholesale; appending to a stale one
    // would duplicate rows.
    if path.exists() {
        std::fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))?;
    }

    let conn =
        Connection::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let tx = conn.unchecked_transaction()?;

    for table in tables {
        let cols = table.num_cols();
        if cols == 0 {
            continue;
        }
        let name = format!("page{}_table{}", table.page, table.index);
        let col_defs: Vec<String> = (1..=cols).map(|i| format!("c{i} TEXT")).collect();
        tx.execute_batch(&format!(
            "CREATE TABLE \"{name}\" ({})",
            col_defs.join(", ")
        ))
        .with_context(|| format!("creating table {name}"))?;

        let placeholders: Vec<String> = (1..=cols).map(|i| format!("?{i}")).collect();
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO \"{name}\" VALUES ({})",
            placeholders.join(", ")
        ))?;
        for row in &table.rows {
            stmt.execute(rusqlite::params_from_iter(row.iter()))
                .with_context(|| format!("inserting into {name}"))?;
        }
    }

    tx.commit()?;
    Ok(vec![path])
}
