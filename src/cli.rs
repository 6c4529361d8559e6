//! CLI argument definitions for gradebook.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(version)]
#[command(about = "Record and list student course grades", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    gradebook init             Create .gradebook/ with a default config\n    gradebook add 12345 \"Ana Wijaya\" MK001 85\n    gradebook list\n\n    Records are validated before anything is written; all rule violations\n    are reported together."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize gradebook in the current directory
    Init {
        /// Override the detected project name
        #[arg(long)]
        name: Option<String>,
        /// Overwrite an existing .gradebook/ config
        #[arg(long)]
        force: bool,
    },
    /// Record a new grade entry
    Add {
        /// Student identification number (digits, at least 5)
        student_id: String,
        /// Full student name (at least 3 characters)
        name: String,
        /// Course code, e.g. MK001 (see `gradebook courses`)
        course: String,
        /// Score between 0 and 100 inclusive
        score: String,
    },
    /// List all recorded grades, newest first
    List {
        /// Emit the stored record shape as JSON
        #[arg(long)]
        json: bool,
        /// Show only the number of records
        #[arg(long)]
        count: bool,
    },
    /// Show the known course catalog
    Courses,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version and build information
    Version,
}
