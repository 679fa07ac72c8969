use crate::domain::{Clock, JournalEntry, JournalError, JournalResult};
use crate::infrastructure::EntryRepository;
use chrono::NaiveDate;
use std::fmt;

/// What the presentation layer may do with a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Nothing written today yet
    CanWrite,
    /// Today's entry exists and can still be edited
    Completed,
    /// Any other day; read only
    ViewOnly,
}

impl fmt::Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryMode::CanWrite => write!(f, "ready to write"),
            EntryMode::Completed => write!(f, "completed"),
            EntryMode::ViewOnly => write!(f, "view only"),
        }
    }
}

/// Derives write eligibility from the store and the injected clock.
pub struct DailyWritePolicy {
    clock: Box<dyn Clock>,
}

impl DailyWritePolicy {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn can_write_today(&self, repository: &dyn EntryRepository) -> JournalResult<bool> {
        Ok(self.today_entry(repository)?.is_none())
    }

    pub fn today_entry(&self, repository: &dyn EntryRepository) -> JournalResult<Option<JournalEntry>> {
        repository.find_by_date(self.today())
    }

    /// Mode for `selected`, or for today when nothing is selected.
    pub fn mode_for(
        &self,
        repository: &dyn EntryRepository,
        selected: Option<NaiveDate>,
    ) -> JournalResult<EntryMode> {
        if selected.is_some_and(|date| date != self.today()) {
            return Ok(EntryMode::ViewOnly);
        }

        if self.can_write_today(repository)? {
            Ok(EntryMode::CanWrite)
        } else {
            Ok(EntryMode::Completed)
        }
    }

    /// Only today's entry may be changed, checked at the time of the request.
    pub fn ensure_editable(&self, date: NaiveDate) -> JournalResult<()> {
        let today = self.today();
        if date != today {
            return Err(JournalError::NotEditable { date, today });
        }
        Ok(())
    }
}
