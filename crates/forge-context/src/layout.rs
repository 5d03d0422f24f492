//! Project filesystem layout.
//!
//! Layout:
//! ```text
//! <root>/
//!   boards.toml, platforms.toml, architectures.toml
//!   src/
//!     apps/app_<name>.<ext>   — application entry points
//!     hal/<platform>/         — platform-specific sources
//!   build/                    — output root (created on demand)
//!     intermediate/
//!     .target_triple, .target_name
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Canonical locations inside a firmware project tree.
///
/// The joiners are pure; only the `build`-side accessors touch the
/// filesystem, and those are idempotent — existing directories and their
/// contents are never disturbed.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Create a layout rooted at `marker`.
    ///
    /// `marker` may be the project root directory itself or a marker file
    /// directly inside it (the build manifest); a file's parent becomes
    /// the root.
    pub fn new(marker: &Path) -> Self {
        let root = if marker.is_file() {
            marker.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            marker.to_path_buf()
        };
        Layout { root }
    }

    /// Project root directory.
    pub fn root_dir(&self) -> &Path {
        &self.root
    }

    /// `<root>/src`.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    /// `<root>/src/hal/<platform>` — platform-specific sources.
    pub fn platform_dir(&self, platform: &str) -> PathBuf {
        self.src_dir().join("hal").join(platform)
    }

    /// `<root>/src/apps` — application entry points.
    pub fn apps_dir(&self) -> PathBuf {
        self.src_dir().join("apps")
    }

    /// `<root>/build/<rel>`, creating the parent directory if absent.
    pub fn build_path(&self, rel: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.root.join("build").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(path)
    }

    /// `<root>/build/intermediate/<rel>`, creating the parent directory
    /// if absent.
    pub fn intermediate_path(&self, rel: impl AsRef<Path>) -> Result<PathBuf> {
        self.build_path(Path::new("intermediate").join(rel))
    }

    /// `<root>/build/intermediate` itself, created if absent.
    pub fn intermediate_dir(&self) -> Result<PathBuf> {
        let dir = self.root.join("build").join("intermediate");
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
