use crate::domain::{Clock, DailyWritePolicy, EntryMode, JournalEntry, JournalError, JournalResult};
use crate::infrastructure::EntryRepository;
use chrono::NaiveDate;
use log::debug;

/// Everything the presentation layer needs to render one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub date: NaiveDate,
    pub mode: EntryMode,
    pub entry: Option<JournalEntry>,
}

/// The journal boundary: entry store plus daily-write policy.
///
/// Past entries can be read but never changed through this type, and at most
/// one entry exists per date.
pub struct Journal {
    repository: Box<dyn EntryRepository>,
    policy: DailyWritePolicy,
}

impl Journal {
    pub fn new(repository: Box<dyn EntryRepository>, clock: Box<dyn Clock>) -> Self {
        Self {
            repository,
            policy: DailyWritePolicy::new(clock),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.policy.today()
    }

    pub fn list_entries(&self) -> JournalResult<Vec<JournalEntry>> {
        self.repository.list_entries()
    }

    pub fn save_entry(&mut self, entry: JournalEntry) -> JournalResult<()> {
        entry.validate()?;
        self.repository.append_entry(entry)
    }

    pub fn update_entry(&mut self, entry: JournalEntry) -> JournalResult<()> {
        entry.validate()?;
        if self.repository.find_by_date(entry.date)?.is_none() {
            return Err(JournalError::NotFound(entry.date));
        }
        self.policy.ensure_editable(entry.date)?;
        self.repository.update_entry(entry)
    }

    pub fn get_entry_by_date(&self, date: NaiveDate) -> JournalResult<Option<JournalEntry>> {
        self.repository.find_by_date(date)
    }

    pub fn can_write_today(&self) -> JournalResult<bool> {
        self.policy.can_write_today(self.repository.as_ref())
    }

    pub fn get_today_entry(&self) -> JournalResult<Option<JournalEntry>> {
        self.policy.today_entry(self.repository.as_ref())
    }

    /// Create today's entry from raw editor text.
    pub fn write_today(&mut self, content: &str) -> JournalResult<JournalEntry> {
        let entry = self.stamp(content);
        entry.validate()?;

        if !self.can_write_today()? {
            return Err(JournalError::Duplicate(entry.date));
        }

        self.save_entry(entry.clone())?;
        Ok(entry)
    }

    /// Replace today's content and refresh its timestamp.
    pub fn edit_today(&mut self, content: &str) -> JournalResult<JournalEntry> {
        let entry = self.stamp(content);
        self.update_entry(entry.clone())?;
        Ok(entry)
    }

    pub fn view(&self, selected: Option<NaiveDate>) -> JournalResult<DayView> {
        let date = selected.unwrap_or_else(|| self.today());
        let mode = self.policy.mode_for(self.repository.as_ref(), selected)?;
        let entry = self.repository.find_by_date(date)?;
        debug!("Viewing {} as {:?}", date, mode);

        Ok(DayView { date, mode, entry })
    }

    /// Entries newest first.
    pub fn history(&self) -> JournalResult<Vec<JournalEntry>> {
        let mut entries = self.repository.list_entries()?;
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.timestamp.cmp(&a.timestamp)));
        Ok(entries)
    }

    fn stamp(&self, content: &str) -> JournalEntry {
        let clock = self.policy.clock();
        JournalEntry::new(clock.today(), content.trim(), clock.now())
    }
}
