use crate::domain::{DayView, EntryMode, JournalEntry, PREVIEW_CHARS};
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::fmt::Write;

/// Plain-text rendering for the command line.
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render_day(&self, view: &DayView, today: NaiveDate) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===", long_date(view.date));

        match (view.mode, &view.entry) {
            (EntryMode::CanWrite, _) => {
                let _ = writeln!(out, "✍  Ready to write");
                let _ = writeln!(out, "You can write your daily entry today.");
            }
            (EntryMode::Completed, Some(entry)) => {
                let _ = writeln!(out, "✔  Entry complete");
                out.push('\n');
                out.push_str(&self.render_entry(entry, today));
            }
            (EntryMode::ViewOnly, Some(entry)) => {
                let _ = writeln!(out, "(view only)");
                out.push('\n');
                out.push_str(&self.render_entry(entry, today));
            }
            (_, None) => {
                let _ = writeln!(out, "No entry for this day.");
            }
        }

        out
    }

    pub fn render_entry(&self, entry: &JournalEntry, today: NaiveDate) -> String {
        let mut out = String::new();
        if entry.date == today {
            let _ = writeln!(out, "Today's Entry");
        } else {
            let _ = writeln!(out, "Entry from {}", long_date(entry.date));
        }
        let _ = writeln!(out, "{}", entry.content);
        let _ = writeln!(out, "-- written {}", local_time(entry.timestamp));
        out
    }

    pub fn render_history(&self, entries: &[JournalEntry]) -> String {
        if entries.is_empty() {
            return "No entries yet. Start writing your first entry!\n".to_string();
        }

        let mut out = String::new();
        for entry in entries {
            let _ = writeln!(out, "{}  {}", entry.date, long_date(entry.date));
            let _ = writeln!(out, "    {}", entry.preview(PREVIEW_CHARS).replace('\n', " "));
        }
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn local_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d at %H:%M")
        .to_string()
}
