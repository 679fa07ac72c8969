/// Test utilities for store-backed tests
///
/// `TestStore` gives each test its own temporary journal directory that is
/// removed when the harness is dropped. `InMemoryRepository` is a plain
/// `Vec`-backed store for policy and journal tests that never touch disk.
///
/// ## Usage Examples
///
/// ```rust
/// use crate::infrastructure::test_utils::test_harness::TestStore;
///
/// #[test]
/// fn my_test() {
///     let test_store = TestStore::new();
///     let mut repo = test_store.open();
///     // Directory is cleaned up when test_store is dropped
/// }
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::domain::{JournalEntry, JournalError, JournalResult};
    use crate::infrastructure::{EntryRepository, HookRegistry, JsonFileRepository};
    use chrono::NaiveDate;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    /// Fresh journal directory per test
    pub struct TestStore {
        temp_dir: TempDir,
    }

    impl TestStore {
        pub fn new() -> Self {
            Self {
                temp_dir: TempDir::new().expect("Failed to create temp directory"),
            }
        }

        pub fn dir(&self) -> &Path {
            self.temp_dir.path()
        }

        pub fn store_path(&self) -> PathBuf {
            self.temp_dir.path().join("journal.json")
        }

        pub fn open(&self) -> JsonFileRepository {
            JsonFileRepository::open(self.store_path()).expect("Failed to open test store")
        }

        pub fn open_with_hooks(&self, hooks: HookRegistry) -> JsonFileRepository {
            JsonFileRepository::with_hooks(self.store_path(), hooks)
                .expect("Failed to open test store")
        }

        pub fn write_raw(&self, contents: &str) {
            std::fs::write(self.store_path(), contents).expect("Failed to seed test store");
        }
    }

    /// Vec-backed store with the same contract as the JSON store
    #[derive(Default)]
    pub struct InMemoryRepository {
        entries: Vec<JournalEntry>,
        pub fail_writes: bool,
    }

    impl InMemoryRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
            Self {
                entries,
                fail_writes: false,
            }
        }

        fn check_writable(&self) -> JournalResult<()> {
            if self.fail_writes {
                return Err(JournalError::persistence(
                    "write",
                    "memory",
                    std::io::Error::new(std::io::ErrorKind::Other, "writes disabled"),
                ));
            }
            Ok(())
        }
    }

    impl EntryRepository for InMemoryRepository {
        fn list_entries(&self) -> JournalResult<Vec<JournalEntry>> {
            Ok(self.entries.clone())
        }

        fn append_entry(&mut self, entry: JournalEntry) -> JournalResult<()> {
            if self.entries.iter().any(|e| e.date == entry.date) {
                return Err(JournalError::Duplicate(entry.date));
            }
            self.check_writable()?;
            self.entries.push(entry);
            Ok(())
        }

        fn update_entry(&mut self, entry: JournalEntry) -> JournalResult<()> {
            let index = self
                .entries
                .iter()
                .position(|e| e.date == entry.date)
                .ok_or(JournalError::NotFound(entry.date))?;
            self.check_writable()?;
            self.entries[index] = entry;
            Ok(())
        }

        fn find_by_date(&self, date: NaiveDate) -> JournalResult<Option<JournalEntry>> {
            Ok(self.entries.iter().find(|e| e.date == date).cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;
    use crate::infrastructure::EntryRepository;

    #[test]
    fn test_harness_isolation() {
        let first = TestStore::new();
        let second = TestStore::new();
        assert_ne!(first.dir(), second.dir());

        first.write_raw(r#"{"journalEntries":[{"date":"2024-03-15","content":"x","timestamp":"2024-03-15T00:00:00Z"}]}"#);

        assert_eq!(first.open().list_entries().unwrap().len(), 1);
        assert!(second.open().list_entries().unwrap().is_empty());
    }
}
