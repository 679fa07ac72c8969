use crate::domain::{JournalEntry, JournalError, JournalResult};
use crate::infrastructure::{EntryRepository, HookRegistry, WriteContext, WriteKind};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// On-disk shape of the store: every entry under one key.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(rename = "journalEntries", default)]
    journal_entries: Vec<JournalEntry>,

    // Other top-level keys survive a rewrite untouched.
    #[serde(flatten)]
    other: Map<String, Value>,
}

/// Entry store backed by a single JSON document.
///
/// The document is read once at open and rewritten in full on every
/// mutation. Writes go to a temp file in the same directory which is then
/// renamed over the store, so a failed write leaves the previous document
/// in place and the in-memory list unchanged.
pub struct JsonFileRepository {
    path: PathBuf,
    document: StoreDocument,
    hook_registry: HookRegistry,
}

impl JsonFileRepository {
    pub fn open(path: impl Into<PathBuf>) -> JournalResult<Self> {
        Self::with_hooks(path, HookRegistry::new())
    }

    pub fn with_hooks(path: impl Into<PathBuf>, hook_registry: HookRegistry) -> JournalResult<Self> {
        let path = path.into();
        let document = Self::load(&path)?;

        let duplicates = duplicate_dates(&document.journal_entries);
        if !duplicates.is_empty() {
            warn!(
                "{} holds more than one entry for {:?}; the first is used until it is updated",
                path.display(),
                duplicates
            );
        }

        debug!(
            "Opened journal store at {} with {} entries",
            path.display(),
            document.journal_entries.len()
        );

        Ok(Self {
            path,
            document,
            hook_registry,
        })
    }

    fn load(path: &Path) -> JournalResult<StoreDocument> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StoreDocument::default()),
            Err(e) => return Err(JournalError::persistence("read", path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        serde_json::from_str(&raw).map_err(|source| JournalError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    fn persist(&self) -> JournalResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&dir).map_err(|e| JournalError::persistence("create directory for", &self.path, e))?;

        let mut tmp = NamedTempFile::new_in(&dir)
            .map_err(|e| JournalError::persistence("stage", &self.path, e))?;

        serde_json::to_writer_pretty(&mut tmp, &self.document)
            .map_err(|e| JournalError::persistence("write", &self.path, io::Error::from(e)))?;
        tmp.write_all(b"\n")
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| JournalError::persistence("write", &self.path, e))?;

        tmp.persist(&self.path)
            .map_err(|e| JournalError::persistence("replace", &self.path, e.error))?;

        debug!(
            "Wrote {} entries to {}",
            self.document.journal_entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Swap in a new entry list and persist it, restoring the old list if the write fails.
    fn commit(&mut self, entries: Vec<JournalEntry>, kind: WriteKind, entry: &JournalEntry) -> JournalResult<()> {
        let previous = std::mem::replace(&mut self.document.journal_entries, entries);

        if let Err(e) = self.persist() {
            self.document.journal_entries = previous;
            return Err(e);
        }

        info!("Entry {} for {}", kind, entry.date);

        if !self.hook_registry.is_empty() {
            let context = WriteContext {
                kind,
                date: entry.date,
                store_path: self.path.clone(),
                entry_count: self.document.journal_entries.len(),
            };
            self.hook_registry.execute_write_hooks(&context, entry);
        }

        Ok(())
    }

    fn position(&self, date: NaiveDate) -> Option<usize> {
        self.document
            .journal_entries
            .iter()
            .position(|entry| entry.date == date)
    }
}

impl EntryRepository for JsonFileRepository {
    fn list_entries(&self) -> JournalResult<Vec<JournalEntry>> {
        Ok(self.document.journal_entries.clone())
    }

    fn append_entry(&mut self, entry: JournalEntry) -> JournalResult<()> {
        if self.position(entry.date).is_some() {
            return Err(JournalError::Duplicate(entry.date));
        }

        let mut entries = self.document.journal_entries.clone();
        entries.push(entry.clone());
        self.commit(entries, WriteKind::Created, &entry)
    }

    fn update_entry(&mut self, entry: JournalEntry) -> JournalResult<()> {
        let index = self
            .position(entry.date)
            .ok_or(JournalError::NotFound(entry.date))?;

        let mut entries = self.document.journal_entries.clone();
        entries[index] = entry.clone();

        // Collapse any legacy duplicates behind the replaced entry.
        let mut seen_first = false;
        entries.retain(|e| {
            if e.date != entry.date {
                return true;
            }
            let keep = !seen_first;
            seen_first = true;
            keep
        });

        self.commit(entries, WriteKind::Updated, &entry)
    }

    fn find_by_date(&self, date: NaiveDate) -> JournalResult<Option<JournalEntry>> {
        Ok(self
            .document
            .journal_entries
            .iter()
            .find(|entry| entry.date == date)
            .cloned())
    }
}

fn duplicate_dates(entries: &[JournalEntry]) -> Vec<NaiveDate> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in entries {
        if !seen.insert(entry.date) && !duplicates.contains(&entry.date) {
            duplicates.push(entry.date);
        }
    }
    duplicates
}
