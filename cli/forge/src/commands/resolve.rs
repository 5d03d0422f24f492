//! `forge resolve` — print the resolved target chain.

use std::path::Path;

use anyhow::Result;

/// Resolve the board and print the full chain.
pub fn run(project_dir: &Path, board: &str) -> Result<()> {
    let target = super::resolve_board(project_dir, board)?;

    println!("Board:        {}", target.board.name);
    println!("Platform:     {}", target.platform.name);
    println!("Architecture: {}", target.arch.name);
    println!("Triple:       {}", target.arch.target);
    println!("CPU:          {}", target.arch.cpu);
    if !target.board.features.is_empty() {
        println!("Board features:    {}", target.board.features.join(", "));
    }
    if !target.platform.features.is_empty() {
        println!("Platform features: {}", target.platform.features.join(", "));
    }

    Ok(())
}
