//! Scheduler configuration.
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! schedule_title = "Fall Schedule"
//! record_policy = "skip_invalid"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::io::RecordPolicy;
use crate::{Result, SchedulerError};

/// Title given to a new schedule.
pub const DEFAULT_SCHEDULE_TITLE: &str = "My Schedule";

/// Options applied when a scheduler is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Initial schedule title.
    pub schedule_title: String,
    /// How the catalog reader treats bad records.
    pub record_policy: RecordPolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            schedule_title: DEFAULT_SCHEDULE_TITLE.to_string(),
            record_policy: RecordPolicy::Strict,
        }
    }
}

impl SchedulerConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SchedulerError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}
