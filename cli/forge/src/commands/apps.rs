//! `forge apps` — list discovered application entry points.

use std::path::Path;

use anyhow::Result;
use forge_context::apps::discover_applications;
use forge_context::Layout;

/// List the application names found under `src/apps`.
pub fn run(project_dir: &Path) -> Result<()> {
    let layout = Layout::new(project_dir);
    let applications = discover_applications(&layout)?;

    if applications.is_empty() {
        println!("No applications found under {}", layout.apps_dir().display());
        return Ok(());
    }

    for name in &applications {
        println!("{name}");
    }
    Ok(())
}
