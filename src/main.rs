//! matchtui - main entry point
//!
//! Wires the CLI, logging, and terminal lifecycle around the selection
//! store and the TUI event loop.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use matchtui::cli::{Cli, Commands};
use matchtui::{App, MatchSetFile, MatchTuiError, SelectionStore};

/// Initialize the tracing subscriber with appropriate settings.
///
/// Logs go to stderr so they stay out of the alternate screen and of the
/// `show` command's stdout output. `RUST_LOG` overrides the default level.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("matchtui starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { file }) => {
            info!("validating match-set file: {:?}", file);
            match MatchSetFile::load_from_file(&file).and_then(|f| f.validate().map(|_| f)) {
                Ok(_) => {
                    info!("match-set file validation successful");
                    println!("✓ Match-set file is valid: {}", file.display());
                }
                Err(e) => {
                    error!("match-set file validation failed: {:#}", e);
                    eprintln!("✗ Match-set file validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Init { path }) => {
            MatchSetFile::sample().save_to_file(&path)?;
            info!("sample match-set file written to {:?}", path);
            println!("✓ Sample match-set file written to: {}", path.display());
        }
        Some(Commands::Show) => {
            let store = load_store(cli.sets.as_deref())?;
            print_selections(&store)?;
        }
        None => {
            let store = load_store(cli.sets.as_deref())?;
            run_tui(store)?;
        }
    }

    Ok(())
}

/// Build the session's selection store from a file or the sample data
fn load_store(sets: Option<&Path>) -> Result<SelectionStore, Box<dyn std::error::Error>> {
    let file = match sets {
        Some(path) => {
            info!("loading match sets from {:?}", path);
            MatchSetFile::load_from_file(path)?
        }
        None => {
            debug!("no match-set file given, using sample data");
            MatchSetFile::sample()
        }
    };
    Ok(file.into_store()?)
}

/// Print every set's selection summary to stdout
fn print_selections(store: &SelectionStore) -> Result<(), Box<dyn std::error::Error>> {
    for set in store.sets() {
        println!("{}", set.name());
        let rows = store.list_selections(set.name())?;
        let width = rows
            .iter()
            .map(|r| r.source.chars().count())
            .max()
            .unwrap_or(0);
        for row in rows {
            println!("  {:<width$}  {}", row.source, row.selected_label());
        }
        println!();
    }
    Ok(())
}

/// Run the TUI over the given store
fn run_tui(store: SelectionStore) -> Result<(), Box<dyn std::error::Error>> {
    debug!("initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| MatchTuiError::terminal(format!("failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| MatchTuiError::terminal(format!("failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| MatchTuiError::terminal(format!("failed to create terminal: {}", e)))?;

    let mut app = App::new(store);
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
