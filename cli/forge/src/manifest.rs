//! `forge.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// The top-level manifest structure for a forge project.
#[derive(Debug, Clone, Deserialize)]
pub struct ForgeManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Build configuration.
    #[serde(default)]
    pub build: Option<BuildConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    /// Project version.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Build configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Default board to build for.
    #[serde(default)]
    pub board: Option<String>,
}

impl ForgeManifest {
    /// Search upward from `start_dir` for a `forge.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join("forge.toml");
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: ForgeManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing forge.toml")
    }

    /// Default board from the manifest.
    pub fn default_board(&self) -> Option<&str> {
        self.build.as_ref().and_then(|b| b.board.as_deref())
    }
}
