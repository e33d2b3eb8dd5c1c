//! loggit CLI
//!
//! Log work hours per customer and browse them in the terminal.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::terminal::disable_raw_mode;

use loggit::app;
use loggit::store::JsonStore;
use loggit::tui::{screen, TerminalConsole, UiError};
use loggit::types::{AppConfig, MenuAction};

/// Exit status for a session ended with Ctrl+C.
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(name = "loggit")]
#[command(about = "Log work hours per customer and browse them")]
#[command(version)]
struct Cli {
    /// Action to run first: add, view or exit. Any other word exits.
    /// Without an action, a menu asks.
    action: Option<String>,

    /// Database file (default: ~/.loggit/db.json)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = AppConfig::default();
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }
    init_logging(&config);
    log::info!("starting loggit v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("config: {:?}", config);

    let first = cli.action.as_deref().map(|word| {
        let Ok(action) = word.parse::<MenuAction>();
        action
    });
    if first == Some(MenuAction::Exit) {
        return ExitCode::SUCCESS;
    }

    install_panic_hook();
    let mut console = TerminalConsole::new();
    let result = run_session(&config, &mut console, first);
    // Widgets show the cursor again on every exit path; this covers a
    // failure before the first widget ran.
    let _ = screen::show_cursor(&mut console);

    match result {
        Ok(()) => {
            log::info!("session finished");
            ExitCode::SUCCESS
        }
        Err(UiError::Interrupted) => {
            log::info!("session interrupted");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(e) => {
            log::error!("session failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_session(
    config: &AppConfig,
    console: &mut TerminalConsole,
    first: Option<MenuAction>,
) -> Result<(), UiError> {
    let mut store = JsonStore::open(&config.db_path)?;
    log::info!("using database {}", store.path().display());
    app::run(&mut store, console, first)
}

// ============================================================================
// LOGGING
// ============================================================================

/// Send log output to the log file, since stdout belongs to the UI.
///
/// Falls back to stderr when the file cannot be opened.
fn init_logging(config: &AppConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match open_log_file(config) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Note: cannot open {}: {}", config.log_path.display(), e);
        }
    }

    builder.init();
}

fn open_log_file(config: &AppConfig) -> io::Result<fs::File> {
    if let Some(parent) = config.log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.log_path)
}

// ============================================================================
// TERMINAL RESTORE
// ============================================================================

/// Leave raw mode and show the cursor before a panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = screen::show_cursor(&mut io::stdout());
        original_hook(panic_info);
    }));
}
