use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// matchtui - match sources with their best target options
#[derive(Parser)]
#[command(name = "matchtui")]
#[command(about = "A terminal UI for pairing sources with target options")]
#[command(version)]
pub struct Cli {
    /// Match-set file to load instead of the built-in sample data.
    ///
    /// The file defines the sets, their rows, and any previously chosen
    /// selections; edits made during the session are not written back.
    #[arg(long, global = true)]
    pub sets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every set's selection summary and exit (no TUI)
    Show,
    /// Validate a match-set file
    Validate {
        /// Path to the match-set file to validate
        file: PathBuf,
    },
    /// Write the built-in sample data as a starting template
    Init {
        /// Destination path for the template file
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
