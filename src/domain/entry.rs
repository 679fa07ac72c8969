use crate::domain::{JournalError, JournalResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            date,
            content: content.into(),
            timestamp,
        }
    }

    pub fn validate(&self) -> JournalResult<()> {
        if self.content.trim().is_empty() {
            return Err(JournalError::Validation(format!(
                "content for {} must not be empty",
                self.date
            )));
        }
        Ok(())
    }

    /// First `max_chars` characters of the content, with `...` appended when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        match self.content.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.content[..cut]),
            None => self.content.clone(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
