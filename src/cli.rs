use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qaplan")]
#[command(about = "Convert generated test plans and render execution reports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a test plan from JSON to its editable text layout
    Encode {
        /// Plan JSON file (reads stdin if omitted or '-')
        file: Option<PathBuf>,
    },

    /// Convert an edited text test plan back to JSON
    Decode {
        /// Plan text file (reads stdin if omitted or '-')
        file: Option<PathBuf>,

        /// Fail when a section banner is missing
        #[arg(long)]
        strict: bool,
    },

    /// Parse and render an execution report
    #[command(visible_alias = "r")]
    Report {
        /// Report text file (reads stdin if omitted or '-')
        file: Option<PathBuf>,

        /// Output parsed blocks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a configuration value
    Get {
        /// Key: color, table_style, strict
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Key: color, table_style, strict
        key: String,

        /// Value to set
        value: String,
    },
}
