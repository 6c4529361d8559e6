use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::store::{InMemoryStore, JsonFileStore, RecordStore, RemoteStore};

/// Storage backend for grade records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// Durable local JSON file
    #[default]
    Local,
    /// Ephemeral in-process collection
    Memory,
    /// Remote document collection over HTTP
    Remote,
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendType::Local => write!(f, "local"),
            BackendType::Memory => write!(f, "memory"),
            BackendType::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_project_name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: BackendType,
    /// Record collection path for the local backend
    #[serde(default = "default_records_path")]
    pub path: PathBuf,
    /// Base URL for the remote backend
    #[serde(default)]
    pub endpoint: Option<String>,
}

fn default_project_name() -> String {
    "gradebook".to_string()
}

fn default_records_path() -> PathBuf {
    PathBuf::from(paths::RECORDS_FILE)
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendType::Local,
            path: default_records_path(),
            endpoint: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: ProjectConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `.gradebook/config.md`.
    ///
    /// A missing config file yields the default configuration so the CLI
    /// works before `gradebook init` has run.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(paths::CONFIG_FILE))
    }

    /// Load configuration from the given path, defaulting when absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // Extract YAML frontmatter
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Construct the record store this configuration selects.
    ///
    /// The store is an explicitly built value handed to callers; nothing in
    /// the crate holds a global storage handle.
    pub fn open_store(&self) -> Result<Box<dyn RecordStore>> {
        match self.storage.backend {
            BackendType::Local => Ok(Box::new(JsonFileStore::new(self.storage.path.clone()))),
            BackendType::Memory => Ok(Box::new(InMemoryStore::new())),
            BackendType::Remote => {
                let endpoint = self.storage.endpoint.as_deref().with_context(|| {
                    "storage.backend is 'remote' but storage.endpoint is not set"
                })?;
                let store = RemoteStore::new(endpoint)
                    .with_context(|| format!("Invalid remote endpoint: {}", endpoint))?;
                Ok(Box::new(store))
            }
        }
    }
}

/// Extract YAML frontmatter delimited by `---` lines from a markdown file.
fn extract_frontmatter(content: &str) -> Option<String> {
    let trimmed = content.trim_start();
    let rest = trimmed.strip_prefix("---")?;
    let end = rest.find("\n---")?;
    Some(rest[..end].to_string())
}

/// Default config file content written by `gradebook init`.
pub fn default_config_content(project_name: &str) -> String {
    format!(
        "---\n\
         project:\n\
         \x20 name: {}\n\
         storage:\n\
         \x20 backend: local\n\
         \x20 path: {}\n\
         ---\n\n\
         # Gradebook Config\n\n\
         Set `storage.backend` to `local`, `memory`, or `remote`.\n\
         The `remote` backend additionally requires `storage.endpoint`.\n",
        project_name,
        paths::RECORDS_FILE
    )
}
