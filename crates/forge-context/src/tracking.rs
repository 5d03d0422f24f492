//! Target-drift tracking sentinels.
//!
//! Each sentinel persists one string in the build tree. Downstream build
//! steps depend on the sentinel file instead of on the full configuration
//! object: when the resolved triple or platform name differs from the
//! prior run, the file is rewritten and every dependent becomes stale.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use forge_targets::ResolvedTarget;

use crate::error::Result;
use crate::layout::Layout;

/// Outcome of evaluating a tracked value against its sentinel file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    /// No prior value, or the value differs: the sentinel was rewritten.
    Changed,
    /// The stored value matches; the file was left untouched.
    Unchanged,
}

/// A single string value persisted to a sentinel file between builds.
#[derive(Debug, Clone)]
pub struct TrackedValue {
    path: PathBuf,
    current: String,
}

impl TrackedValue {
    /// Track `current` in the sentinel file at `path`.
    pub fn new(path: PathBuf, current: impl Into<String>) -> Self {
        TrackedValue {
            path,
            current: current.into(),
        }
    }

    /// Sentinel file backing this value.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value recorded on the next [`evaluate`](Self::evaluate) if it
    /// differs from the stored one.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Compare the current value against the stored one, rewriting the
    /// file when they differ or when no file exists yet.
    pub fn evaluate(&self) -> Result<TrackingState> {
        let previous = match fs::read_to_string(&self.path) {
            Ok(stored) => Some(stored),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        if previous.as_deref() == Some(self.current.as_str()) {
            return Ok(TrackingState::Unchanged);
        }

        fs::write(&self.path, &self.current)?;
        log::debug!("tracking {}: now '{}'", self.path.display(), self.current);
        Ok(TrackingState::Changed)
    }
}

/// The two sentinels derived from a resolved target.
#[derive(Debug, Clone)]
pub struct TrackingTargets {
    /// Tracks the cross target triple (`build/.target_triple`).
    pub triple: TrackedValue,
    /// Tracks the platform name (`build/.target_name`).
    pub platform: TrackedValue,
}

/// Define the triple and platform sentinels under `build/`.
pub fn define_tracking_targets(
    layout: &Layout,
    target: &ResolvedTarget,
) -> Result<TrackingTargets> {
    Ok(TrackingTargets {
        triple: TrackedValue::new(layout.build_path(".target_triple")?, &target.arch.target),
        platform: TrackedValue::new(layout.build_path(".target_name")?, &target.platform.name),
    })
}
