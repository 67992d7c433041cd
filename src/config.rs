//! Runtime configuration for turnover services.
//!
//! Configuration is JSON. Every field is optional and falls back to its
//! default, so an empty object is a valid configuration:
//!
//! ```json
//! {
//!   "task_generation": {
//!     "due_date_anchor": "derivation_time",
//!     "due_offset_days": 3
//!   }
//! }
//! ```
//!
//! Files are read through a capability-scoped [`Dir`] so callers decide which
//! directory the process may read from.

use crate::review::domain::{DueDateAnchor, RepairSchedule};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "turnover.json";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    Read {
        /// Path relative to the configuration directory.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`TurnoverConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TurnoverConfig {
    /// Repair task generation settings.
    pub task_generation: TaskGenerationConfig,
}

/// Settings for review-driven repair task generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskGenerationConfig {
    /// Point in time the due-date offset is counted from.
    pub due_date_anchor: DueDateAnchor,
    /// Calendar days between the anchor and the due date.
    pub due_offset_days: u32,
}

impl Default for TaskGenerationConfig {
    fn default() -> Self {
        Self {
            due_date_anchor: DueDateAnchor::default(),
            due_offset_days: RepairSchedule::DEFAULT_OFFSET_DAYS,
        }
    }
}

impl TaskGenerationConfig {
    /// Builds the repair schedule described by these settings.
    #[must_use]
    pub const fn schedule(&self) -> RepairSchedule {
        RepairSchedule::new(self.due_date_anchor, self.due_offset_days)
    }
}

impl TurnoverConfig {
    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads configuration from `file_name` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read or
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(dir: &Dir, file_name: &str) -> Result<Self, ConfigError> {
        let raw = dir.read_to_string(file_name).map_err(|source| ConfigError::Read {
            path: file_name.to_owned(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads [`CONFIG_FILE_NAME`] from `dir`, or returns the defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or
    /// parsed.
    pub fn load_or_default(dir: &Dir) -> Result<Self, ConfigError> {
        match Self::load(dir, CONFIG_FILE_NAME) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}
