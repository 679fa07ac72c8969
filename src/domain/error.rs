use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to {action} {}: {source}", path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("journal store at {} is not readable JSON: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no entry exists for {0}")]
    NotFound(NaiveDate),

    #[error("invalid entry: {0}")]
    Validation(String),

    #[error("an entry already exists for {0}")]
    Duplicate(NaiveDate),

    #[error("entry for {date} is view-only; only today's entry ({today}) can be changed")]
    NotEditable { date: NaiveDate, today: NaiveDate },
}

impl JournalError {
    pub fn persistence(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Persistence {
            action,
            path: path.into(),
            source,
        }
    }

    /// True when the failure came from the storage layer rather than the caller's request.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. } | Self::Corrupt { .. })
    }
}

pub type JournalResult<T> = Result<T, JournalError>;
