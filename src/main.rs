//! CLI entry point and command dispatch for gradebook.

mod cmd;

use anyhow::Result;
use clap::Parser;

use gradebook::cli::{Cli, Commands};
use gradebook::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet || ui::is_quiet();

    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Init { name, force } => cmd::init::cmd_init(name, force, quiet),
        Commands::Add {
            student_id,
            name,
            course,
            score,
        } => cmd::add::cmd_add(&student_id, &name, &course, &score, quiet),
        Commands::List { json, count } => cmd::list::cmd_list(json, count),
        Commands::Courses => cmd::courses::cmd_courses(),
        Commands::Completions { shell } => cmd::util::cmd_completions(shell),
        Commands::Version => cmd::util::cmd_version(),
    }
}
