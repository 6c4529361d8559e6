//! Utility commands (version, completion generation).

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use gradebook::cli::Cli;

/// Show version information
pub fn cmd_version() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("gradebook {}", VERSION);

    const GIT_SHA: &str = env!("GIT_SHA");
    const BUILD_DATE: &str = env!("BUILD_DATE");
    println!("commit: {}", GIT_SHA);
    println!("built: {}", BUILD_DATE);

    Ok(())
}

/// Generate shell completions on stdout
pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
