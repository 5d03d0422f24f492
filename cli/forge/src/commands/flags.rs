//! `forge flags` — print the derived config flags.

use std::path::Path;

use anyhow::Result;
use forge_context::flags::{cfg_arguments, config_flags};

/// Print the `--cfg` tokens for the resolved board, in derivation order.
pub fn run(project_dir: &Path, board: &str) -> Result<()> {
    let target = super::resolve_board(project_dir, board)?;
    for argument in cfg_arguments(&config_flags(&target)) {
        println!("{argument}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::commands::write_fixture_project;

    #[test]
    fn flags_for_known_board() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_project(dir.path());
        super::run(dir.path(), "foo").unwrap();
    }
}
