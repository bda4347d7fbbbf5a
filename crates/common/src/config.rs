use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Glob patterns (relative to the input directory) to skip entirely.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// PDFs larger than this are skipped with a warning.
    #[serde(default = "default_max_file_size_kb")]
    pub max_file_size_kb: u64,

    #[serde(default)]
    pub follow_symlinks: bool,

    #[serde(default)]
    pub include_hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: default_excludes(),
            max_file_size_kb: default_max_file_size_kb(),
            follow_symlinks: false,
            include_hidden: false,
        }
    }
}

fn default_excludes() -> Vec<String> {
    vec![]
}

fn default_max_file_size_kb() -> u64 {
    // 100 MB — scanned-image PDFs get big, but anything past this is
    // almost certainly not a document we can pull text tables out of.
    102_400
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parsing config file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert!(cfg.scan.exclude.is_empty());
        assert_eq!(cfg.scan.max_file_size_kb, 102_400);
        assert!(!cfg.scan.follow_symlinks);
        assert!(!cfg.scan.include_hidden);
    }

    #[test]
    fn partial_scan_section() {
        let cfg = parse_config(
            r#"
            [scan]
            exclude = ["**/drafts/**"]
            include_hidden = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.scan.exclude, vec!["**/drafts/**"]);
        assert!(cfg.scan.include_hidden);
        // Unspecified fields keep their defaults.
        assert_eq!(cfg.scan.max_file_size_kb, 102_400);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("[scan").is_err());
    }
}
