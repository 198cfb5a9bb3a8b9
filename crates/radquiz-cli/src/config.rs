//! radquiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level radquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadquizConfig {
    /// Directory holding question-bank TOML files.
    #[serde(default = "default_bank_dir")]
    pub bank_dir: PathBuf,
    /// Directory session reports are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default report format for `take`.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_bank_dir() -> PathBuf {
    PathBuf::from("question-banks")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./radquiz-reports")
}
fn default_format() -> String {
    "json".to_string()
}

impl Default for RadquizConfig {
    fn default() -> Self {
        Self {
            bank_dir: default_bank_dir(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `radquiz.toml` in the current directory
/// 2. `~/.config/radquiz/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<RadquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("radquiz.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = config_dir() {
            let global = dir.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<RadquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(RadquizConfig::default()),
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("radquiz"))
}
