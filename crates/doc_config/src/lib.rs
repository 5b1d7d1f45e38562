//! Configuration management for DocDeck
//!
//! This crate handles loading and validating `.docdeck/config.toml`

use doc_common::{DocError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Config location relative to the workspace root
pub const CONFIG_RELATIVE_PATH: &str = ".docdeck/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identity reported on `initialize`
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Documents the store is seeded with, in listing order
    #[serde(default = "default_documents")]
    pub documents: Vec<SeedDocument>,
}

/// Server configuration ([server])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_server_version")]
    pub version: String,
}

fn default_server_name() -> String {
    "DocumentMCP".to_string()
}
fn default_server_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
        }
    }
}

/// Logging configuration ([logging])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// One `[[documents]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedDocument {
    pub id: String,
    #[serde(default)]
    pub content: String,
}

impl SeedDocument {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Built-in seed set used when the config names no documents
pub fn default_documents() -> Vec<SeedDocument> {
    vec![
        SeedDocument::new(
            "deposition.md",
            "This deposition covers the testimony of Angela Smith, P.E.",
        ),
        SeedDocument::new(
            "report.pdf",
            "The report details the state of a 20m condenser tower.",
        ),
        SeedDocument::new(
            "financials.docx",
            "These financials outline the project's budget and expenditures.",
        ),
        SeedDocument::new(
            "outlook.pdf",
            "This document presents the projected future performance of the system.",
        ),
        SeedDocument::new(
            "plan.md",
            "The plan outlines the steps for the project's implementation.",
        ),
        SeedDocument::new(
            "spec.txt",
            "These specifications define the technical requirements for the equipment.",
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            documents: default_documents(),
        }
    }
}

impl Config {
    /// Load configuration from workspace root, falling back to defaults
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let config_path = workspace_root.join(CONFIG_RELATIVE_PATH);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::from_file(&config_path)
    }

    /// Load configuration from an explicit file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DocError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), documents = config.documents.len(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| DocError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject seed sets the store could not hold
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for doc in &self.documents {
            if doc.id.trim().is_empty() {
                return Err(DocError::ConfigError(
                    "Document id must not be empty".to_string(),
                ));
            }
            if !seen.insert(doc.id.as_str()) {
                return Err(DocError::ConfigError(format!(
                    "Document id '{}' is listed more than once",
                    doc.id
                )));
            }
        }
        Ok(())
    }
}
