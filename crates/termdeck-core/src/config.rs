//! termdeck configuration.
//!
//! Loaded from TOML. Every key is optional; a missing file means defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "termdeck.toml";

/// Top-level termdeck configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermdeckConfig {
    /// Glossary file, relative to the working directory unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Questions per quiz when none are requested.
    #[serde(default = "default_questions")]
    pub default_questions: usize,
    /// Whether examples are printed alongside definitions.
    #[serde(default = "default_true")]
    pub show_examples: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("Cafe_Java_Library_Terms.csv")
}
fn default_questions() -> usize {
    5
}
fn default_true() -> bool {
    true
}

impl Default for TermdeckConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_questions: default_questions(),
            show_examples: true,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `termdeck.toml` in the current directory
/// 2. `~/.config/termdeck/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<TermdeckConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(LOCAL_CONFIG);
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|home| home.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(TermdeckConfig::default()),
    }
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config(content: &str) -> Result<TermdeckConfig> {
    let config: TermdeckConfig = toml::from_str(content)?;
    if config.default_questions == 0 {
        anyhow::bail!("default_questions must be at least 1");
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("termdeck"))
}
