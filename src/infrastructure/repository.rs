use crate::domain::{JournalEntry, JournalResult};
use chrono::NaiveDate;

/// Date-keyed store of journal entries.
pub trait EntryRepository {
    /// All entries in insertion order
    fn list_entries(&self) -> JournalResult<Vec<JournalEntry>>;

    /// Add a new entry and persist it before returning
    fn append_entry(&mut self, entry: JournalEntry) -> JournalResult<()>;

    /// Replace the entry with the same date, keeping its position
    fn update_entry(&mut self, entry: JournalEntry) -> JournalResult<()>;

    fn find_by_date(&self, date: NaiveDate) -> JournalResult<Option<JournalEntry>>;
}
