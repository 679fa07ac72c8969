use crate::application::Config;
use crate::domain::{Clock, DayView, Journal, JournalEntry, JournalError, SystemClock};
use crate::infrastructure::{DraftStore, HookRegistry, JsonFileRepository, WriteLogHook};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use log::{debug, warn};
use std::io::Write;
use std::process::Command;

pub struct JournalApp {
    pub journal: Journal,
    drafts: DraftStore,
    config: Config,
}

impl JournalApp {
    pub fn with_default_plugins(config: Config) -> Result<Self> {
        Self::open(config, Box::new(SystemClock), true)
    }

    pub fn without_plugins(config: Config) -> Result<Self> {
        Self::open(config, Box::new(SystemClock), false)
    }

    pub fn open(config: Config, clock: Box<dyn Clock>, plugins: bool) -> Result<Self> {
        let mut hook_registry = HookRegistry::new();
        if plugins {
            hook_registry.register(WriteLogHook::new(&config.write_log_path));
        }
        debug!("Write hooks: {:?}", hook_registry.list_hooks());

        let repository = JsonFileRepository::with_hooks(&config.store_path, hook_registry)
            .context("Failed to open journal store")?;
        let journal = Journal::new(Box::new(repository), clock);
        let drafts = DraftStore::new(&config.draft_path);

        Ok(Self {
            journal,
            drafts,
            config,
        })
    }

    pub fn status(&self) -> Result<DayView> {
        Ok(self.journal.view(None)?)
    }

    pub fn show(&self, date: NaiveDate) -> Result<DayView> {
        Ok(self.journal.view(Some(date))?)
    }

    pub fn history(&self, limit: Option<usize>) -> Result<Vec<JournalEntry>> {
        let mut entries = self.journal.history()?;
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    /// Write today's entry from `message`, or from the editor seeded with the saved draft.
    pub fn write_today(&mut self, message: Option<String>) -> Result<JournalEntry> {
        if !self.journal.can_write_today()? {
            return Err(JournalError::Duplicate(self.journal.today()))
                .context("Today's entry is already written; use `edit` to change it");
        }

        let content = match message {
            Some(message) => message,
            None => {
                let draft = self.drafts.load()?.unwrap_or_default();
                self.compose_in_editor(&draft)?
            }
        };

        match self.journal.write_today(&content) {
            Ok(entry) => {
                // The entry is durable at this point; a stale draft is only cosmetic.
                if let Err(e) = self.drafts.clear() {
                    warn!("Entry saved but the draft could not be cleared: {}", e);
                }
                Ok(entry)
            }
            Err(e) if e.is_persistence() => {
                if let Err(draft_err) = self.drafts.save(&content) {
                    warn!("Could not keep unsaved text as a draft: {}", draft_err);
                    return Err(e.into());
                }
                Err(e).context("Entry was not saved; the text is kept as a draft")
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace today's entry from `message`, or from the editor seeded with the current text.
    pub fn edit_today(&mut self, message: Option<String>) -> Result<JournalEntry> {
        let today = self.journal.today();
        let current = self
            .journal
            .get_today_entry()?
            .ok_or(JournalError::NotFound(today))
            .context("Nothing written today yet; use `write` first")?;

        let content = match message {
            Some(message) => message,
            None => self.compose_in_editor(&current.content)?,
        };

        Ok(self.journal.edit_today(&content)?)
    }

    pub fn save_draft(&self, text: &str) -> Result<()> {
        Ok(self.drafts.save(text)?)
    }

    pub fn load_draft(&self) -> Result<Option<String>> {
        Ok(self.drafts.load()?)
    }

    pub fn clear_draft(&self) -> Result<()> {
        Ok(self.drafts.clear()?)
    }

    fn compose_in_editor(&self, initial: &str) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix("dayjournal-")
            .suffix(".md")
            .tempfile()
            .context("Failed to create temporary file for editor")?;
        file.write_all(initial.as_bytes())?;
        file.flush()?;

        let mut parts = self.config.editor.split_whitespace();
        let Some(program) = parts.next() else {
            bail!("No editor configured; set $EDITOR or pass --message");
        };

        debug!("Launching editor {} on {}", program, file.path().display());
        let status = Command::new(program)
            .args(parts)
            .arg(file.path())
            .status()
            .with_context(|| format!("Failed to launch editor '{}'", self.config.editor))?;

        if !status.success() {
            bail!("Editor exited with error: {}", status);
        }

        std::fs::read_to_string(file.path()).context("Failed to read back editor contents")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryMode, FixedClock};
    use crate::infrastructure::test_utils::test_harness::*;

    fn app_on(test_store: &TestStore, today: NaiveDate, editor: &str) -> JournalApp {
        let config = Config::with_journal_dir(test_store.dir(), editor);
        JournalApp::open(config, Box::new(FixedClock::new(today)), true).unwrap()
    }

    #[test]
    fn test_write_then_status() {
        let test_store = TestStore::new();
        let mut app = app_on(&test_store, day(2024, 4, 1), "true");

        assert_eq!(app.status().unwrap().mode, EntryMode::CanWrite);
        app.write_today(Some("april".to_string())).unwrap();

        let view = app.status().unwrap();
        assert_eq!(view.mode, EntryMode::Completed);
        assert_eq!(view.entry.unwrap().content, "april");
        assert!(test_store.dir().join("write_log.txt").exists());
    }

    #[test]
    fn test_second_write_is_refused() {
        let test_store = TestStore::new();
        let mut app = app_on(&test_store, day(2024, 4, 1), "true");
        app.write_today(Some("first".to_string())).unwrap();

        let err = app.write_today(Some("second".to_string())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JournalError>(),
            Some(JournalError::Duplicate(_))
        ));
    }

    #[test]
    fn test_editor_starts_from_draft_and_clears_it() {
        let test_store = TestStore::new();
        let mut app = app_on(&test_store, day(2024, 4, 1), "true");
        app.save_draft("carried over").unwrap();

        let entry = app.write_today(None).unwrap();

        assert_eq!(entry.content, "carried over");
        assert_eq!(app.load_draft().unwrap(), None);
    }

    #[test]
    fn test_stuck_draft_does_not_fail_a_saved_entry() {
        let test_store = TestStore::new();
        let mut app = app_on(&test_store, day(2024, 4, 1), "true");

        // A non-empty directory at the draft path cannot be removed.
        let draft_path = test_store.dir().join("draft.txt");
        std::fs::create_dir(&draft_path).unwrap();
        std::fs::write(draft_path.join("keep"), "x").unwrap();

        let entry = app.write_today(Some("saved".to_string())).unwrap();

        assert_eq!(entry.content, "saved");
        assert_eq!(app.status().unwrap().entry.unwrap().content, "saved");
    }

    #[test]
    fn test_edit_requires_todays_entry() {
        let test_store = TestStore::new();
        let mut app = app_on(&test_store, day(2024, 4, 1), "true");

        assert!(app.edit_today(Some("x".to_string())).is_err());

        app.write_today(Some("v1".to_string())).unwrap();
        app.edit_today(Some("v2".to_string())).unwrap();
        assert_eq!(app.history(None).unwrap()[0].content, "v2");
    }

    #[test]
    fn test_entries_survive_restart_but_become_view_only() {
        let test_store = TestStore::new();
        {
            let mut app = app_on(&test_store, day(2024, 4, 1), "true");
            app.write_today(Some("monday".to_string())).unwrap();
        }

        let mut app = app_on(&test_store, day(2024, 4, 2), "true");
        let view = app.show(day(2024, 4, 1)).unwrap();
        assert_eq!(view.mode, EntryMode::ViewOnly);
        assert_eq!(view.entry.unwrap().content, "monday");
        assert_eq!(app.status().unwrap().mode, EntryMode::CanWrite);

        app.write_today(Some("tuesday".to_string())).unwrap();
        let history = app.history(Some(1)).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].content, "tuesday");
    }

    #[test]
    fn test_failing_editor_is_reported() {
        let test_store = TestStore::new();
        let mut app = app_on(&test_store, day(2024, 4, 1), "false");

        assert!(app.write_today(None).is_err());
        assert!(app.status().unwrap().entry.is_none());
    }
}
