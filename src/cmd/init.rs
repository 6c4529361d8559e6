//! Initialize gradebook in a project directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use gradebook::config::default_config_content;
use gradebook::paths::{CONFIG_FILE, GRADEBOOK_DIR};
use gradebook::ui::colors;

/// Create the `.gradebook/` directory and a default config file.
pub fn cmd_init(name: Option<String>, force: bool, quiet: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::create_dir_all(GRADEBOOK_DIR)
        .with_context(|| format!("Failed to create {}", GRADEBOOK_DIR))?;

    let project_name = name.unwrap_or_else(detect_project_name);
    fs::write(config_path, default_config_content(&project_name))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    if !quiet {
        println!(
            "{} Initialized gradebook project '{}'",
            colors::success("✓"),
            project_name
        );
        println!(
            "  {}",
            colors::secondary(&format!("config: {}", config_path.display()))
        );
    }

    Ok(())
}

/// Use the current directory name as the project name, falling back to the
/// package default.
fn detect_project_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| "gradebook".to_string())
}
