//! Forge CLI — resolve and inspect firmware build configurations.

mod commands;
mod manifest;

use std::process;

use clap::{Parser, Subcommand};

use manifest::ForgeManifest;

#[derive(Parser)]
#[command(name = "forge", version, about = "Firmware build-configuration resolver")]
struct Cli {
    /// Board to resolve (overrides the forge.toml default)
    #[arg(long, global = true)]
    board: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the board → platform → architecture chain
    Resolve,
    /// Print the derived --cfg tokens in order
    Flags,
    /// Build the full context and print the environment
    Env,
    /// List discovered application entry points
    Apps,
    /// Evaluate the target-drift sentinels
    Track,
    /// Check toolchain and project status
    Doctor,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (manifest, project_dir) = match ForgeManifest::find_and_load(&cwd)? {
        Some((manifest, dir)) => (Some(manifest), dir),
        None => (None, cwd),
    };

    match cli.command {
        Commands::Resolve => {
            let board = required_board(cli.board.as_deref(), manifest.as_ref())?;
            commands::resolve::run(&project_dir, &board)
        }
        Commands::Flags => {
            let board = required_board(cli.board.as_deref(), manifest.as_ref())?;
            commands::flags::run(&project_dir, &board)
        }
        Commands::Env => {
            let board = required_board(cli.board.as_deref(), manifest.as_ref())?;
            commands::env::run(&project_dir, &board)
        }
        Commands::Apps => commands::apps::run(&project_dir),
        Commands::Track => {
            let board = required_board(cli.board.as_deref(), manifest.as_ref())?;
            commands::track::run(&project_dir, &board)
        }
        Commands::Doctor => {
            commands::doctor::run(&project_dir, cli.board.as_deref(), manifest.as_ref())
        }
    }
}

/// The board from `--board`, or the manifest default.
fn required_board(flag: Option<&str>, manifest: Option<&ForgeManifest>) -> anyhow::Result<String> {
    if let Some(board) = flag {
        return Ok(board.to_string());
    }
    if let Some(board) = manifest.and_then(|m| m.default_board()) {
        return Ok(board.to_string());
    }
    anyhow::bail!("no board selected (pass --board or set [build] board in forge.toml)")
}
