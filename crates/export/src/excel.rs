//! Excel workbook writer.
//!
//! Emits a minimal OOXML package by hand: the four required parts plus one
//! worksheet per table, all cells as inline strings. No shared-string
//! table, no styles — spreadsheet readers fill in defaults.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use tables_common::table::Table;

pub fn write(tables: &[Table], out_dir: &Path, base: &str) -> Result<Vec<PathBuf>> {
    let path = out_dir.join(format!("{base}.xlsx"));
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(content_types(tables.len()).as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS.as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook(tables).as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(workbook_rels(tables.len()).as_bytes())?;

    for (i, table) in tables.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
        zip.write_all(worksheet(table).as_bytes())?;
    }

    zip.finish()
        .with_context(|| format!("finalising {}", path.display()))?;
    Ok(vec![path])
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

fn content_types(sheet_count: usize) -> String {
    let mut overrides = String::new();
    for i in 1..=sheet_count {
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>{overrides}</Types>"#
    )
}

fn workbook(tables: &[Table]) -> String {
    let mut sheets = String::new();
    for (i, table) in tables.iter().enumerate() {
        let id = i + 1;
        sheets.push_str(&format!(
            r#"<sheet name="Page {} Table {}" sheetId="{id}" r:id="rId{id}"/>"#,
            table.page, table.index
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>{sheets}</sheets></workbook>"#
    )
}

fn workbook_rels(sheet_count: usize) -> String {
    let mut rels = String::new();
    for i in 1..=sheet_count {
        rels.push_str(&format!(
            r#"<Relationship Id="rId{i}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{i}.xml"/>"#
        ));
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
    )
}

fn worksheet(table: &Table) -> String {
    let mut rows = String::new();
    for (r, row) in table.rows.iter().enumerate() {
        rows.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for cell in row {
            rows.push_str(&format!(
                r#"<c t="inlineStr"><is><t>{}</t></is></c>"#,
                escape_xml(cell)
            ));
        }
        rows.push_str("</row>");
    }
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{rows}</sheetData></worksheet>"#
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
