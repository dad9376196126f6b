use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// File names and defaults
// =============================================================================

/// Optional per-project configuration file, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".verit.json";

/// Prefix prepended to the version to form a tag name
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// Remote that tags are pushed to
pub const DEFAULT_REMOTE: &str = "origin";

/// Changelog checked before tagging
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// verit configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub tag: TagConfig,
    pub changelog: ChangelogConfig,
}

/// Tag-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TagConfig {
    pub prefix: String,
    pub remote: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TAG_PREFIX.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
        }
    }
}

/// Changelog-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangelogConfig {
    pub file: String,
    /// Refuse to tag a version that has no changelog heading
    pub require_entry: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_CHANGELOG_FILE.to_string(),
            require_entry: false,
        }
    }
}

impl Config {
    /// Load `.verit.json` from `workdir`, falling back to defaults when it is absent.
    pub fn load(workdir: &Path) -> Result<Self, ConfigError> {
        let path = workdir.join(CONFIG_FILE_NAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn tag_name(&self, version: &impl std::fmt::Display) -> String {
        format!("{}{}", self.tag.prefix, version)
    }
}
