use crate::domain::JournalEntry;
use anyhow::Result;
use chrono::NaiveDate;
use log::warn;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Created,
    Updated,
}

impl fmt::Display for WriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteKind::Created => write!(f, "created"),
            WriteKind::Updated => write!(f, "updated"),
        }
    }
}

/// Context provided to write hooks
#[derive(Debug, Clone)]
pub struct WriteContext {
    pub kind: WriteKind,
    pub date: NaiveDate,
    pub store_path: PathBuf,
    pub entry_count: usize,
}

/// Trait for plugins that respond to entry write events
pub trait WriteHook {
    /// Called after an entry has been durably written to the store
    fn on_entry_written(&self, context: &WriteContext, entry: &JournalEntry) -> Result<()>;

    /// Human-readable name for this hook
    fn name(&self) -> &str;
}

/// Registry for managing write hooks
pub struct HookRegistry {
    hooks: Vec<Box<dyn WriteHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn register<H>(&mut self, hook: H)
    where
        H: WriteHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Run every hook; a failing hook is logged and the rest still run.
    pub fn execute_write_hooks(&self, context: &WriteContext, entry: &JournalEntry) {
        for hook in &self.hooks {
            if let Err(e) = hook.on_entry_written(context, entry) {
                warn!("Hook '{}' failed for {}: {:#}", hook.name(), context.date, e);
            }
        }
    }

    pub fn list_hooks(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
