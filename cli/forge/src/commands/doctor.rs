//! `forge doctor` — toolchain and project diagnostics.

use std::path::Path;
use std::process::Command;

use anyhow::Result;
use forge_context::ToolchainSettings;
use forge_targets::{Architecture, Board, Catalog, Platform, Record};

use crate::manifest::ForgeManifest;

/// Print toolchain and project diagnostic information.
pub fn run(project_dir: &Path, board: Option<&str>, manifest: Option<&ForgeManifest>) -> Result<()> {
    println!("=== Forge Doctor ===");
    println!();

    println!("Forge version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("--- Toolchain ---");
    match ToolchainSettings::resolve() {
        Ok(settings) => {
            println!("  rustc:     {}", settings.rustc);
            println!("  toolchain: {}", settings.toolchain);
            print_tool_status(&format!("{}gcc", settings.toolchain), &["--version"]);
        }
        Err(e) => println!("  unresolved: {e}"),
    }
    println!();

    println!("--- Project Status ---");
    match manifest {
        Some(m) => {
            println!("  forge.toml: found ({})", m.project.name);
            if let Some(default) = m.default_board() {
                println!("  Default board: {default}");
            }
        }
        None => println!("  forge.toml: not found"),
    }
    print_catalog_status::<Board>(project_dir, "boards.toml");
    print_catalog_status::<Platform>(project_dir, "platforms.toml");
    print_catalog_status::<Architecture>(project_dir, "architectures.toml");

    if let Some(board) = board.or_else(|| manifest.and_then(|m| m.default_board())) {
        println!();
        println!("--- Board: {board} ---");
        match super::resolve_board(project_dir, board) {
            Ok(target) => {
                println!("  Platform: {}", target.platform.name);
                println!("  Arch:     {} ({})", target.arch.name, target.arch.target);
            }
            Err(e) => println!("  unresolved: {e:#}"),
        }
    }

    Ok(())
}

fn print_catalog_status<R: Record>(project_dir: &Path, file: &str) {
    match Catalog::<R>::load(&project_dir.join(file)) {
        Ok(catalog) => println!("  {file}: {} entries", catalog.len()),
        Err(e) => println!("  {file}: {e}"),
    }
}

fn print_tool_status(name: &str, args: &[&str]) {
    match Command::new(name).args(args).output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            let first_line = version.lines().next().unwrap_or("(unknown version)");
            println!("  {name}: {first_line}");
        }
        Err(_) => {
            println!("  {name}: not found");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::write_fixture_project;

    #[test]
    fn doctor_runs_without_error() {
        let dir = tempfile::tempdir().unwrap();
        super::run(dir.path(), None, None).unwrap();
    }

    #[test]
    fn doctor_with_fixture_and_board() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_project(dir.path());
        super::run(dir.path(), Some("foo"), None).unwrap();
    }
}
