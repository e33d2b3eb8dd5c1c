//! Log storage.
//!
//! The UI never touches files directly. It talks to a [`LogStore`], which
//! the entry point constructs once and passes down by reference.
//!
//! Structure:
//! - Trait: the four operations the UI needs
//! - `JsonStore`: the real thing, one JSON document on disk
//! - `MemoryStore`: same contract over a Vec, for tests

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::LogRecord;

/// Errors raised by a [`LogStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid database {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no log at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Storage contract consumed by the add flow and the log table.
pub trait LogStore {
    /// Append a record.
    fn add_log(&mut self, record: LogRecord) -> Result<(), StoreError>;

    /// All records, in insertion order.
    fn get_logs(&mut self) -> Result<Vec<LogRecord>, StoreError>;

    /// Overwrite the record at `index`.
    fn update_log(&mut self, index: usize, record: LogRecord) -> Result<(), StoreError>;

    /// Remove the record at `index`, shifting later records down.
    fn remove_log(&mut self, index: usize) -> Result<(), StoreError>;
}

// ============================================================================
// JSON FILE STORE
// ============================================================================

/// On-disk document. The capitalised key matches existing database files.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(rename = "Logs", default)]
    logs: Vec<LogRecord>,
}

/// File-backed store. Every call reloads from disk, so edits made by
/// another process between calls are picked up.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    logs: Vec<LogRecord>,
}

impl JsonStore {
    /// Open the database at `path`, creating its parent directory if needed.
    ///
    /// A missing or empty file is an empty log list.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut store = JsonStore {
            path,
            logs: Vec::new(),
        };
        store.load()?;
        log::debug!("opened database {} ({} logs)", store.path.display(), store.logs.len());
        Ok(store)
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&mut self) -> Result<(), StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.logs.clear();
                return Ok(());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        self.logs = parse_document(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    fn save(&self) -> Result<(), StoreError> {
        let document = Document {
            logs: self.logs.clone(),
        };
        let contents =
            serde_json::to_string_pretty(&document).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("saved {} logs to {}", self.logs.len(), self.path.display());
        Ok(())
    }
}

fn parse_document(contents: &str) -> Result<Vec<LogRecord>, serde_json::Error> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    let document: Document = serde_json::from_str(contents)?;
    Ok(document.logs)
}

impl LogStore for JsonStore {
    fn add_log(&mut self, record: LogRecord) -> Result<(), StoreError> {
        self.load()?;
        log::info!("adding log for {}", record.customer);
        self.logs.push(record);
        self.save()
    }

    fn get_logs(&mut self) -> Result<Vec<LogRecord>, StoreError> {
        self.load()?;
        Ok(self.logs.clone())
    }

    fn update_log(&mut self, index: usize, record: LogRecord) -> Result<(), StoreError> {
        self.load()?;
        replace_at(&mut self.logs, index, record)?;
        log::info!("updated log {}", index);
        self.save()
    }

    fn remove_log(&mut self, index: usize) -> Result<(), StoreError> {
        self.load()?;
        remove_at(&mut self.logs, index)?;
        log::info!("removed log {}", index);
        self.save()
    }
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Store that never touches the filesystem.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryStore {
    pub logs: Vec<LogRecord>,
}

impl MemoryStore {
    pub fn with_logs(logs: Vec<LogRecord>) -> Self {
        Self { logs }
    }
}

impl LogStore for MemoryStore {
    fn add_log(&mut self, record: LogRecord) -> Result<(), StoreError> {
        self.logs.push(record);
        Ok(())
    }

    fn get_logs(&mut self) -> Result<Vec<LogRecord>, StoreError> {
        Ok(self.logs.clone())
    }

    fn update_log(&mut self, index: usize, record: LogRecord) -> Result<(), StoreError> {
        replace_at(&mut self.logs, index, record)
    }

    fn remove_log(&mut self, index: usize) -> Result<(), StoreError> {
        remove_at(&mut self.logs, index)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn replace_at(logs: &mut [LogRecord], index: usize, record: LogRecord) -> Result<(), StoreError> {
    let len = logs.len();
    let slot = logs
        .get_mut(index)
        .ok_or(StoreError::IndexOutOfRange { index, len })?;
    *slot = record;
    Ok(())
}

fn remove_at(logs: &mut Vec<LogRecord>, index: usize) -> Result<(), StoreError> {
    if index >= logs.len() {
        return Err(StoreError::IndexOutOfRange {
            index,
            len: logs.len(),
        });
    }
    logs.remove(index);
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
