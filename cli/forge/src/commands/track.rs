//! `forge track` — evaluate the target-drift sentinels.

use std::path::Path;

use anyhow::Result;
use forge_context::tracking::define_tracking_targets;
use forge_context::{Layout, TrackedValue, TrackingState};

/// Evaluate both sentinels for the resolved board and report drift.
pub fn run(project_dir: &Path, board: &str) -> Result<()> {
    let target = super::resolve_board(project_dir, board)?;
    let layout = Layout::new(project_dir);
    let tracking = define_tracking_targets(&layout, &target)?;

    report("target triple", &tracking.triple)?;
    report("platform name", &tracking.platform)?;
    Ok(())
}

fn report(label: &str, value: &TrackedValue) -> Result<()> {
    match value.evaluate()? {
        TrackingState::Changed => println!("{label}: changed -> {}", value.current()),
        TrackingState::Unchanged => println!("{label}: unchanged ({})", value.current()),
    }
    Ok(())
}
