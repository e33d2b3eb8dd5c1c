//! Domain types for loggit.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Directory under the home directory holding all loggit files.
pub const DATA_DIR_NAME: &str = ".loggit";

/// Database filename within the data directory.
pub const DB_FILENAME: &str = "db.json";

/// Log filename within the data directory.
pub const LOG_FILENAME: &str = "loggit.log";

// ============================================================================
// RECORDS
// ============================================================================

/// One logged stretch of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Who the work was for.
    pub customer: String,
    /// Hours spent. Stored at full precision, displayed with two decimals.
    pub hours: f32,
    /// Free-form date text. Not validated as a calendar date.
    pub date: String,
    /// What was done.
    pub description: String,
}

impl LogRecord {
    /// Display cells for the log viewer, in column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.customer.clone(),
            format!("{:.2}", self.hours),
            self.date.clone(),
            self.description.clone(),
        ]
    }
}

/// Column headers matching [`LogRecord::to_row`].
pub const LOG_COLUMNS: [&str; 4] = ["Customer", "Hours", "Date", "Description"];

// ============================================================================
// ACTIONS
// ============================================================================

/// Top-level action picked from the CLI or the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    View,
    Exit,
}

impl MenuAction {
    /// Value string carried by the corresponding main menu item.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuAction::Add => "add",
            MenuAction::View => "view",
            MenuAction::Exit => "exit",
        }
    }
}

/// Unknown words map to `Exit`, so parsing never fails.
impl FromStr for MenuAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "add" => MenuAction::Add,
            "view" => MenuAction::View,
            _ => MenuAction::Exit,
        })
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Where loggit keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the database and the log file.
    pub data_dir: PathBuf,
    /// JSON database file.
    pub db_path: PathBuf,
    /// Diagnostic log file.
    pub log_path: PathBuf,
}

impl AppConfig {
    /// Config rooted at an explicit data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            db_path: data_dir.join(DB_FILENAME),
            log_path: data_dir.join(LOG_FILENAME),
            data_dir,
        }
    }

    /// Replace the database location, keeping the rest.
    pub fn with_db_path(mut self, db_path: PathBuf) -> Self {
        self.db_path = db_path;
        self
    }
}

/// Defaults to `~/.loggit`, or `./.loggit` when no home directory is known.
impl Default for AppConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_data_dir(home.join(DATA_DIR_NAME))
    }
}

// ============================================================================
// TESTS
// ============================================================================
