use std::path::PathBuf;

pub const STORE_FILE: &str = "journal.json";
pub const DRAFT_FILE: &str = "draft.txt";
pub const WRITE_LOG_FILE: &str = "write_log.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub journal_dir: PathBuf,
    pub store_path: PathBuf,
    pub draft_path: PathBuf,
    pub write_log_path: PathBuf,
    pub editor: String,
}

impl Config {
    pub fn from_env() -> Self {
        let journal_dir = std::env::var("DAYJOURNAL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("dayjournal")
            });

        let editor = std::env::var("EDITOR").unwrap_or_else(|_| "nano".to_string());

        Self::with_journal_dir(journal_dir, editor)
    }

    pub fn with_journal_dir(journal_dir: impl Into<PathBuf>, editor: impl Into<String>) -> Self {
        let journal_dir = journal_dir.into();

        Self {
            store_path: journal_dir.join(STORE_FILE),
            draft_path: journal_dir.join(DRAFT_FILE),
            write_log_path: journal_dir.join(WRITE_LOG_FILE),
            journal_dir,
            editor: editor.into(),
        }
    }
}
