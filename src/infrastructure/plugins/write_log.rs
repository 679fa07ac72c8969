use crate::domain::JournalEntry;
use crate::infrastructure::{WriteContext, WriteHook};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Appends one line per journal write to a plain-text log
pub struct WriteLogHook {
    log_path: PathBuf,
}

impl WriteLogHook {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }
}

impl WriteHook for WriteLogHook {
    fn on_entry_written(&self, context: &WriteContext, entry: &JournalEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open {}", self.log_path.display()))?;

        writeln!(
            file,
            "[{}] Entry {} for {} - Store: {} - {} words, {} entries total",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            context.kind,
            context.date,
            context.store_path.display(),
            entry.word_count(),
            context.entry_count
        )?;

        Ok(())
    }

    fn name(&self) -> &str {
        "Write Log"
    }
}
