//! Per-PDF processed-state manifest.
//!
//! After a PDF is exported, a small JSON manifest is written next to the
//! output files recording the source file's size and blake3 hash. Re-runs
//! skip PDFs whose manifest still matches, and `--validate` uses the same
//! check as a CI gate. Matching is content-based only — no mtimes — so a
//! fresh CI checkout with different timestamps still validates.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const MANIFEST_FILENAME: &str = ".extract-manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub size: u64,
    pub hash: String,
}

impl FileMetadata {
    pub fn from_file(path: &Path) -> Result<Self> {
        let size = path
            .metadata()
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        let mut file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let mut hasher = blake3::Hasher::new();
        std::io::copy(&mut file, &mut hasher)
            .with_context(|| format!("hashing {}", path.display()))?;
        Ok(Self {
            size,
            hash: hasher.finalize().to_hex().to_string(),
        })
    }

    pub fn matches(&self, other: &FileMetadata) -> bool {
        self.size == other.size && self.hash == other.hash
    }
}

/// Load the manifest from a PDF's output directory, if present and readable.
///
/// A corrupt or unreadable manifest is treated as absent (the file will be
/// reprocessed) rather than aborting the batch.
pub fn load(pdf_out_dir: &Path) -> Option<FileMetadata> {
    let path = pdf_out_dir.join(MANIFEST_FILENAME);
    if !path.exists() {
        return None;
    }
    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) => {
            warn!("failed to open manifest {}: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_reader(file) {
        Ok(meta) => Some(meta),
        Err(e) => {
            warn!("failed to parse manifest {}: {e}", path.display());
            None
        }
    }
}

/// Save the manifest into a PDF's output directory.
pub fn save(pdf_out_dir: &Path, metadata: &FileMetadata) -> Result<()> {
    let path = pdf_out_dir.join(MANIFEST_FILENAME);
    let file =
        File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, metadata)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Check whether a PDF needs (re)processing.
///
/// Returns `None` when the stored manifest matches the file's current
/// content, otherwise `Some(reason)` explaining why it is stale.
pub fn needs_update(pdf_path: &Path, pdf_out_dir: &Path) -> Result<Option<String>> {
    if !pdf_out_dir.exists() {
        return Ok(Some("not processed (output directory missing)".into()));
    }
    let Some(existing) = load(pdf_out_dir) else {
        return Ok(Some("not processed (manifest missing)".into()));
    };
    let current = FileMetadata::from_file(pdf_path)?;
    if existing.matches(&current) {
        return Ok(None);
    }

    let mut changes = Vec::new();
    if existing.size != current.size {
        changes.push(format!("size: {} -> {}", existing.size, current.size));
    }
    if existing.hash != current.hash {
        changes.push("hash changed".into());
    }
    Ok(Some(format!("out of date ({})", changes.join(", "))))
}
