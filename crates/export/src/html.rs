use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tables_common::table::Table;

/// One HTML document with a `<table>` element per extracted table.
pub fn write(tables: &[Table], out_dir: &Path, base: &str) -> Result<Vec<PathBuf>> {
    let path = out_dir.join(format!("{base}.html"));
    std::fs::write(&path, render(tables, base))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(vec![path])
}

fn render(tables: &[Table], title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(title)));
    html.push_str("</head>\n<body>\n");

    for table in tables {
        html.push_str(&format!(
            "<h2>Page {}, table {}</h2>\n<table>\n",
            table.page, table.index
        ));
        for row in &table.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
