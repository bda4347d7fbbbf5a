//! Format writers for extracted tables.
//!
//! Each module serializes a batch of tables into a PDF's output directory,
//! using the PDF's file stem as the base name, and returns the paths it
//! wrote.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;

use tables_common::table::Table;

mod csv;
mod excel;
mod html;
mod json;
mod markdown;
mod sqlite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// One CSV file per table.
    #[default]
    Csv,
    /// One JSON file holding every table.
    Json,
    /// Excel workbook, one worksheet per table.
    Excel,
    /// HTML document, one `<table>` per table.
    Html,
    /// Markdown document with pipe tables.
    Markdown,
    /// SQLite database, one SQL table per table.
    Sqlite,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Excel => "excel",
            Format::Html => "html",
            Format::Markdown => "markdown",
            Format::Sqlite => "sqlite",
        };
        f.write_str(text)
    }
}

/// Write `tables` into `out_dir` as `format`, named after `base`.
///
/// The caller is responsible for creating `out_dir` and for not calling
/// this with an empty batch.
pub fn export(
    tables: &[Table],
    out_dir: &Path,
    base: &str,
    format: Format,
) -> Result<Vec<PathBuf>> {
    match format {
        Format::Csv => csv::write(tables, out_dir, base),
        Format::Json => json::write(tables, out_dir, base),
        Format::Excel => excel::write(tables, out_dir, base),
        Format::Html => html::write(tables, out_dir, base),
        Format::Markdown => markdown::write(tables, out_dir, base),
        Format::Sqlite => sqlite::write(tables, out_dir, base),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_display_matches_cli_names() {
        let all = [
            (Format::Csv, "csv"),
            (Format::Json, "json"),
            (Format::Excel, "excel"),
            (Format::Html, "html"),
            (Format::Markdown, "markdown"),
            (Format::Sqlite, "sqlite"),
        ];
        for (fmt, name) in all {
            assert_eq!(fmt.to_string(), name);
        }
    }

    #[test]
    fn export_dispatches_to_the_right_files() {
        let dir = tempfile::tempdir().unwrap();
        let tables = test_util::sample_tables();

        let written = export(&tables, dir.path(), "report", Format::Json).unwrap();
        assert_eq!(written, vec![dir.path().join("report.json")]);

        let written = export(&tables, dir.path(), "report", Format::Csv).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("report-page-1-table-1.csv"));
    }
}
