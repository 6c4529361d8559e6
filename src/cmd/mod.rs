//! Command module structure for the gradebook CLI

use anyhow::Result;
use std::path::PathBuf;

use gradebook::paths::GRADEBOOK_DIR;

pub mod add;
pub mod courses;
pub mod init;
pub mod list;
pub mod util;

/// Ensure gradebook is initialized and return the state directory path.
///
/// This checks for the existence of `.gradebook` and returns an error
/// if gradebook has not been initialized.
pub fn ensure_initialized() -> Result<PathBuf> {
    let dir = PathBuf::from(GRADEBOOK_DIR);
    if !dir.exists() {
        anyhow::bail!("Gradebook not initialized. Run `gradebook init` first.");
    }
    Ok(dir)
}
