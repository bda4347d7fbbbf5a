use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tables_common::table::Table;

/// All tables as one JSON array: `{base}.json`.
pub fn write(tables: &[Table], out_dir: &Path, base: &str) -> Result<Vec<PathBuf>> {
    let path = out_dir.join(format!("{base}.json"));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, tables)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(vec![path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_tables;

    #[test]
    fn output_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let written = write(&sample_tables(), dir.path(), "report").unwrap();
        assert_eq!(written, vec![dir.path().join("report.json")]);

        let raw = std::fs::read_to_string(&written[0]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["page"], 1);
        assert_eq!(arr[1]["rows"][2][1], "95");
    }
}
