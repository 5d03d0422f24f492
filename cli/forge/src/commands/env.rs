//! `forge env` — build the full context and print the environment.

use std::path::Path;

use anyhow::Result;
use forge_context::BuildContext;

/// Build the process-wide context (real toolchain query) and print every
/// derived environment entry.
pub fn run(project_dir: &Path, board: &str) -> Result<()> {
    let context = BuildContext::create(project_dir, board)?;
    let env = context.env();

    println!("rustc:            {}", env.rustc);
    println!("toolchain prefix: {}", env.toolchain);
    print_list("cross-compile flags", &env.rustc_flags_cross);
    print_list("rustc flags", &env.rustc_flags);
    print_list("cflags", &env.cflags);
    print_list("ldflags", &env.ldflags);

    Ok(())
}

fn print_list(label: &str, values: &[String]) {
    println!("{label}:");
    for value in values {
        println!("  {value}");
    }
}
