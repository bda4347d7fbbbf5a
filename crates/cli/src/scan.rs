use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use tables_common::config::ScanConfig;
use tables_common::manifest::{self, FileMetadata};
use tables_export::{export, Format};
use tables_extract::{extract_tables, Flavor, PageSelection};

pub struct Options<'a> {
    pub input_dir: &'a Path,
    pub output_dir: &'a Path,
    pub format: Format,
    pub flavor: Flavor,
    pub pages: &'a PageSelection,
    pub recursive: bool,
    pub force: bool,
    pub validate: bool,
    pub scan: &'a ScanConfig,
}

#[derive(Debug, Default)]
pub struct Outcome {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Validate mode only: relative paths of PDFs that still need processing.
    pub unprocessed: Vec<String>,
}

pub fn run(opts: &Options) -> Result<Outcome> {
    let excludes = build_globset(&opts.scan.exclude)?;
    let pdfs = walk_pdfs(opts.input_dir, opts.recursive, opts.scan, &excludes);

    let mut outcome = Outcome::default();
    if pdfs.is_empty() {
        warn!("no PDF files found in {}", opts.input_dir.display());
        return Ok(outcome);
    }
    info!(
        "found {} PDF file(s) to {}",
        pdfs.len(),
        if opts.validate { "validate" } else { "process" }
    );

    for pdf in &pdfs {
        let rel = pdf.strip_prefix(opts.input_dir).unwrap_or(pdf);
        let stem = pdf
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        // Mirror the input tree: <input>/a/b/x.pdf -> <output>/a/b/x/
        let pdf_out_dir = match rel.parent() {
            Some(parent) => opts.output_dir.join(parent).join(stem),
            None => opts.output_dir.join(stem),
        };

        if opts.validate {
            match manifest::needs_update(pdf, &pdf_out_dir)
                .with_context(|| format!("checking {}", rel.display()))?
            {
                None => info!("{} is processed", rel.display()),
                Some(reason) => {
                    error!("{} {}", rel.display(), reason);
                    outcome.unprocessed.push(rel.display().to_string());
                }
            }
            continue;
        }

        if !opts.force {
            match manifest::needs_update(pdf, &pdf_out_dir) {
                Ok(None) => {
                    info!("skipping {} (already processed, unchanged)", rel.display());
                    outcome.skipped += 1;
                    continue;
                }
                Ok(Some(reason)) => debug!("{} {}", rel.display(), reason),
                Err(e) => warn!("manifest check for {}: {e:#}", rel.display()),
            }
        }

        match process_pdf(pdf, &pdf_out_dir, stem, opts) {
            Ok(count) => {
                debug!("{}: {count} table(s) exported", rel.display());
                outcome.processed += 1;
            }
            Err(e) => {
                error!("error processing {}: {e:#}", rel.display());
                outcome.failed += 1;
            }
        }
    }

    if !opts.validate {
        info!(
            "processing complete: {} processed, {} skipped, {} failed",
            outcome.processed, outcome.skipped, outcome.failed
        );
    }
    Ok(outcome)
}

/// Extract, export, and record the manifest for one PDF.
///
/// Returns the number of tables exported. A PDF with no detectable tables
/// still gets a manifest, so re-runs skip it and `--validate` accepts it.
fn process_pdf(pdf: &Path, out_dir: &Path, stem: &str, opts: &Options) -> Result<usize> {
    info!(
        "processing {} with {} flavor (pages: {:?})...",
        pdf.display(),
        match opts.flavor {
            Flavor::Stream => "stream",
            Flavor::Lattice => "lattice",
        },
        opts.pages
    );

    let tables = extract_tables(pdf, opts.flavor, opts.pages)?;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    if tables.is_empty() {
        warn!("no tables found in {}", pdf.display());
    } else {
        info!("found {} table(s) in {}", tables.len(), pdf.display());
        let written = export(&tables, out_dir, stem, opts.format)?;
        for path in &written {
            debug!("wrote {}", path.display());
        }
    }

    let metadata = FileMetadata::from_file(pdf)?;
    manifest::save(out_dir, &metadata)?;
    Ok(tables.len())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).with_context(|| format!("exclude pattern '{pat}'"))?);
        // For patterns like **/drafts/**, also add **/drafts so that the
        // directory entry itself is excluded and walkdir won't descend into it.
        if let Some(dir_pat) = pat.strip_suffix("/**") {
            builder.add(Glob::new(dir_pat)?);
        }
    }
    Ok(builder.build()?)
}

/// Returns the PDFs under `root`, sorted, honoring the scan config.
fn walk_pdfs(
    root: &Path,
    recursive: bool,
    scan: &ScanConfig,
    excludes: &GlobSet,
) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).follow_links(scan.follow_symlinks);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut pdfs = Vec::new();
    for entry in walker.into_iter().filter_entry(|e| {
        // Hidden files
        if !scan.include_hidden {
            if let Some(name) = e.file_name().to_str() {
                if name.starts_with('.') && e.depth() > 0 {
                    return false;
                }
            }
        }
        // Exclusion globs (match relative to root)
        if let Ok(rel) = e.path().strip_prefix(root) {
            if excludes.is_match(rel) {
                return false;
            }
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("walk error: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !tables_extract::accepts(entry.path()) {
            continue;
        }
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if size > scan.max_file_size_kb * 1024 {
            warn!(
                "skipping {} ({size} bytes exceeds {} KB limit)",
                entry.path().display(),
                scan.max_file_size_kb
            );
            continue;
        }
        pdfs.push(entry.into_path());
    }
    pdfs.sort();
    pdfs
}
