//! Record a new grade entry.

use anyhow::Result;

use gradebook::config::Config;
use gradebook::formatters::{format_save_confirmation, format_validation_errors};
use gradebook::store::StoreError;
use gradebook::ui::colors;
use gradebook::validate::GradeCandidate;

/// Validate the input fields and append a new record to the configured store.
///
/// On validation failure every rule violation is printed and the process
/// exits non-zero without writing anything. Storage failures are surfaced
/// with the input echoed back so the user can retry the same command.
pub fn cmd_add(
    student_id: &str,
    name: &str,
    course: &str,
    score: &str,
    quiet: bool,
) -> Result<()> {
    super::ensure_initialized()?;
    let config = Config::load()?;
    let store = config.open_store()?;

    let candidate = GradeCandidate::new(student_id, name, course, score);

    match store.save(&candidate) {
        Ok(id) => {
            if !quiet {
                println!("{}", format_save_confirmation(&id));
                println!(
                    "  {}",
                    colors::secondary("View records with `gradebook list`")
                );
            }
            Ok(())
        }
        Err(StoreError::Validation(errors)) => {
            eprintln!("{}", format_validation_errors(&errors));
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{} {}", colors::error("✗"), err);
            eprintln!(
                "  {}",
                colors::secondary(&format!(
                    "Input preserved; retry with: gradebook add {} \"{}\" {} {}",
                    student_id, name, course, score
                ))
            );
            std::process::exit(1);
        }
    }
}
