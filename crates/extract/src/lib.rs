//! PDF table extraction.
//!
//! Wraps the pdf-extract backend (per-page text) and runs table-structure
//! inference over each page according to the selected flavor. Malformed
//! PDFs that make the backend panic are caught and turned into errors so a
//! batch run can continue with the remaining files.

use std::path::Path;

use anyhow::{anyhow, Result};
use clap::ValueEnum;

use tables_common::table::Table;

pub mod pages;
mod grid;
mod lattice;
mod stream;

pub use pages::PageSelection;

/// Table-detection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Flavor {
    /// Whitespace-alignment detection, for tables without drawn borders.
    #[default]
    Stream,
    /// Delimiter detection, for tables whose borders survive into the
    /// extracted text as `|` separators.
    Lattice,
}

/// Check if a file is a PDF based on extension.
pub fn accepts(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Extract all tables from the selected pages of a PDF file.
///
/// Tables are numbered 1-based within each page, in top-to-bottom order.
/// A valid PDF with no detectable tables yields an empty vector, which is
/// not an error.
pub fn extract_tables(
    path: &Path,
    flavor: Flavor,
    selection: &PageSelection,
) -> Result<Vec<Table>> {
    let bytes = std::fs::read(path)?;
    let page_texts = extract_page_texts(&bytes, &path.display().to_string())?;

    let mut tables = Vec::new();
    for (i, text) in page_texts.iter().enumerate() {
        let page = i + 1;
        if !selection.contains(page) {
            continue;
        }
        tables.extend(detect_tables(text, page, flavor));
    }
    Ok(tables)
}

/// Run table inference over one page of already-extracted text.
pub fn detect_tables(text: &str, page: usize, flavor: Flavor) -> Vec<Table> {
    match flavor {
        Flavor::Stream => stream::detect(text, page),
        Flavor::Lattice => lattice::detect(text, page),
    }
}

/// Per-page text from PDF bytes.
///
/// pdf-extract can panic on malformed PDFs; catch_unwind turns that into a
/// recoverable error so the scan can continue with other files.
///
/// Temporarily installs a custom panic hook so the file path appears in the
/// panic output (the default hook prints no context about which file
/// triggered the panic).
fn extract_page_texts(bytes: &[u8], name: &str) -> Result<Vec<String>> {
    let name_for_hook = name.to_string();
    let _prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("pdf-extract panicked while processing: {name_for_hook}");
        eprintln!("{info}");
    }));
    let bytes_clone = bytes.to_vec();
    let result = std::panic::catch_unwind(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes_clone)
    });
    // Restore default hook
    let _prev = std::panic::take_hook();

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(anyhow!("extracting text from {name}: {e}")),
        Err(_) => Err(anyhow!("pdf-extract panicked on {name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_pdf_extensions_only() {
        assert!(accepts(Path::new("report.pdf")));
        assert!(accepts(Path::new("REPORT.PDF")));
        assert!(!accepts(Path::new("report.txt")));
        assert!(!accepts(Path::new("pdf")));
    }

    #[test]
    fn garbage_bytes_are_an_error_not_a_panic() {
        let err = extract_page_texts(b"not a pdf at all", "garbage.pdf");
        assert!(err.is_err());
    }

    #[test]
    fn flavor_dispatch() {
        let text = "a  b\nc  d\n";
        assert!(!detect_tables(text, 1, Flavor::Stream).is_empty());
        // No pipes anywhere, so lattice finds nothing here.
        assert!(detect_tables(text, 1, Flavor::Lattice).is_empty());
    }
}
