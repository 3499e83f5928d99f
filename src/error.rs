//! Scheduler error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::io::RecordError;
use crate::validation::ValidationError;

/// Result type for scheduler operations.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors surfaced by [`crate::scheduler::WolfScheduler`] and configuration loading.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A field value was rejected.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// A course with the same name is already on the schedule.
    #[error("You are already enrolled in {name}")]
    AlreadyEnrolled { name: String },

    /// The catalog file could not be read or parsed.
    #[error("Cannot find file.")]
    CatalogLoad {
        path: PathBuf,
        #[source]
        source: RecordError,
    },

    /// The schedule could not be written.
    #[error("The file cannot be saved.")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file missing or unparsable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SchedulerError {
    /// Whether this is the duplicate-enrollment outcome of `add_course`.
    pub fn is_already_enrolled(&self) -> bool {
        matches!(self, SchedulerError::AlreadyEnrolled { .. })
    }
}

impl From<toml::de::Error> for SchedulerError {
    fn from(err: toml::de::Error) -> Self {
        SchedulerError::Config(err.to_string())
    }
}
