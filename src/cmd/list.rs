//! List recorded grades, newest first.

use anyhow::Result;

use gradebook::config::Config;
use gradebook::formatters::{format_records_json, format_records_table};
use gradebook::ui::colors;

/// Fetch all records from the configured store and render them.
pub fn cmd_list(json: bool, count: bool) -> Result<()> {
    super::ensure_initialized()?;
    let config = Config::load()?;
    let store = config.open_store()?;

    let records = match store.list() {
        Ok(records) => records,
        Err(err) => {
            // A read failure is recoverable: report it and render nothing,
            // rather than crashing or pretending the store is empty.
            eprintln!("{} {}", colors::error("✗"), err);
            std::process::exit(1);
        }
    };

    if count {
        println!("{}", records.len());
        return Ok(());
    }

    if json {
        println!("{}", format_records_json(&records)?);
        return Ok(());
    }

    println!("{}", format_records_table(&records));
    Ok(())
}
