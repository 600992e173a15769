//! # Message Catalog
//!
//! Static text payloads looked up by command name, loaded from YAML.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.3.0
//! - **Toggleable**: true
//!
//! ## Changelog
//! - 1.1.0: Reject empty descriptions and catalogs over the command limit
//! - 1.0.0: Replace per-message handlers with a single YAML lookup table

use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Description shown in the command picker when an entry has none
pub const DEFAULT_DESCRIPTION: &str = "Envía un mensajito 💌";

/// Discord accepts at most this many application commands per scope
pub const MAX_APPLICATION_COMMANDS: usize = 100;
/// Discord limit for a command description, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 100;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read message catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse message catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid command name `{0}`: use 1-32 lowercase letters, digits, `-` or `_`")]
    InvalidName(String),
    #[error("Command `{0}` is defined more than once")]
    Duplicate(String),
    #[error("Command `{0}` is reserved for a built-in command")]
    Reserved(String),
    #[error("Command `{0}` has an empty text")]
    EmptyText(String),
    #[error("Description of `{0}` is too long (max 100 chars)")]
    DescriptionTooLong(String),
    #[error("Description of `{0}` is empty")]
    EmptyDescription(String),
    #[error("Catalog defines {count} commands, at most {limit} fit next to the built-ins")]
    TooManyCommands { count: usize, limit: usize },
}

/// One command → text mapping
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub command: String,
    #[serde(default)]
    pub description: Option<String>,
    pub text: String,
}

impl CatalogEntry {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MessageCatalog {
    #[serde(default)]
    messages: Vec<CatalogEntry>,
}

fn command_name_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[a-z0-9_-]{1,32}$").expect("command name pattern is valid"))
}

impl MessageCatalog {
    /// Load and validate the catalog. A missing file is an empty catalog.
    pub fn load(path: impl AsRef<Path>, reserved: &[&str]) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("📄 No message catalog at {} - only built-in commands", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_yaml(&contents, reserved)?;
        info!(
            "📄 Loaded {} catalog messages from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_yaml(contents: &str, reserved: &[&str]) -> Result<Self, CatalogError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let catalog: MessageCatalog = serde_yaml::from_str(contents)?;
        catalog.validate(reserved)?;
        Ok(catalog)
    }

    /// Check every entry against Discord's command rules.
    ///
    /// `reserved` holds the built-in command names; they share the
    /// application's command limit with the catalog.
    pub fn validate(&self, reserved: &[&str]) -> Result<(), CatalogError> {
        let limit = MAX_APPLICATION_COMMANDS.saturating_sub(reserved.len());
        if self.messages.len() > limit {
            return Err(CatalogError::TooManyCommands {
                count: self.messages.len(),
                limit,
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.messages {
            let name = entry.command.as_str();
            if !command_name_shape().is_match(name) {
                return Err(CatalogError::InvalidName(name.to_string()));
            }
            if reserved.contains(&name) {
                return Err(CatalogError::Reserved(name.to_string()));
            }
            if !seen.insert(name) {
                return Err(CatalogError::Duplicate(name.to_string()));
            }
            if entry.text.trim().is_empty() {
                return Err(CatalogError::EmptyText(name.to_string()));
            }
            let description = entry.description();
            if description.trim().is_empty() {
                return Err(CatalogError::EmptyDescription(name.to_string()));
            }
            // Discord counts characters, not bytes
            if description.chars().count() > MAX_DESCRIPTION_CHARS {
                return Err(CatalogError::DescriptionTooLong(name.to_string()));
            }
        }
        Ok(())
    }

    pub fn get(&self, command: &str) -> Option<&CatalogEntry> {
        self.messages.iter().find(|entry| entry.command == command)
    }

    /// Entries in file order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
