use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use gradebook::record::GradeRecord;

/// TestHarness provides isolated test environments with a full gradebook
/// project structure. Each harness creates a temporary directory with
/// `.gradebook/` and a default config, and runs the compiled binary inside it.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub records_path: PathBuf,
    pub gradebook_binary: PathBuf,
}

impl TestHarness {
    /// Creates a new test harness with default configuration.
    /// Sets up:
    /// - Temporary directory (auto-cleaned on drop)
    /// - .gradebook/ directory
    /// - .gradebook/config.md with the local backend
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path();

        let gradebook_dir = base_path.join(".gradebook");
        let config_path = gradebook_dir.join("config.md");
        let records_path = gradebook_dir.join("records.json");

        fs::create_dir_all(&gradebook_dir).expect("Failed to create gradebook dir");

        let default_config = r#"---
project:
  name: test-project
storage:
  backend: local
  path: .gradebook/records.json
---

# Gradebook Config
"#;
        fs::write(&config_path, default_config).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            records_path,
            gradebook_binary: PathBuf::from(env!("CARGO_BIN_EXE_gradebook")),
        }
    }

    /// Creates a test harness with custom config content.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        fs::write(&harness.config_path, config_content).expect("Failed to write custom config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the gradebook binary with the given arguments in the
    /// harness directory.
    pub fn run(&self, args: &[&str]) -> std::io::Result<std::process::Output> {
        Command::new(&self.gradebook_binary)
            .args(args)
            .current_dir(self.path())
            .output()
    }

    /// Reads the stored record collection directly from disk.
    #[allow(dead_code)]
    pub fn stored_records(&self) -> Vec<GradeRecord> {
        if !self.records_path.exists() {
            return Vec::new();
        }
        let content = fs::read_to_string(&self.records_path).expect("Failed to read records");
        serde_json::from_str(&content).expect("Stored collection should parse")
    }
}
