use crate::domain::{JournalError, JournalResult};
use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Unsaved entry text kept between sessions.
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Blank text clears the draft instead of saving it.
    pub fn save(&self, text: &str) -> JournalResult<()> {
        if text.trim().is_empty() {
            return self.clear();
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| JournalError::persistence("create directory for", &self.path, e))?;
        }
        fs::write(&self.path, text).map_err(|e| JournalError::persistence("write", &self.path, e))?;
        debug!("Saved draft ({} chars) to {}", text.len(), self.path.display());
        Ok(())
    }

    pub fn load(&self) -> JournalResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JournalError::persistence("read", &self.path, e)),
        }
    }

    pub fn clear(&self) -> JournalResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Cleared draft at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(JournalError::persistence("remove", &self.path, e)),
        }
    }
}
