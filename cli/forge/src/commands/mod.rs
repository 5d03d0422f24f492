//! Forge subcommands.

pub mod apps;
pub mod doctor;
pub mod env;
pub mod flags;
pub mod resolve;
pub mod track;

use std::path::Path;

use anyhow::{Context, Result};
use forge_targets::{Architecture, Board, Catalog, Platform, ResolvedTarget};

/// Load the three catalogs from the project root and resolve `board`.
pub fn resolve_board(project_dir: &Path, board: &str) -> Result<ResolvedTarget> {
    let boards: Catalog<Board> =
        Catalog::load(&project_dir.join("boards.toml")).context("loading board catalog")?;
    let platforms: Catalog<Platform> =
        Catalog::load(&project_dir.join("platforms.toml")).context("loading platform catalog")?;
    let archs: Catalog<Architecture> = Catalog::load(&project_dir.join("architectures.toml"))
        .context("loading architecture catalog")?;

    Ok(forge_targets::resolve(board, &boards, &platforms, &archs)?)
}

#[cfg(test)]
pub(crate) fn write_fixture_project(root: &Path) {
    std::fs::write(
        root.join("boards.toml"),
        "[foo]\nplatform = \"bar\"\nfeatures = [\"y\"]\n",
    )
    .unwrap();
    std::fs::write(
        root.join("platforms.toml"),
        "[bar]\narch = \"arm\"\nfeatures = [\"x\"]\n",
    )
    .unwrap();
    std::fs::write(
        root.join("architectures.toml"),
        "[arm]\ntarget = \"thumbv7m\"\ncpu = \"cortex-m3\"\n",
    )
    .unwrap();
    let apps = root.join("src/apps");
    std::fs::create_dir_all(&apps).unwrap();
    std::fs::write(apps.join("app_blink.rs"), b"").unwrap();
    std::fs::write(apps.join("app_uart.rs"), b"").unwrap();
}
