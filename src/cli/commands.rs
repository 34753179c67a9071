//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeeper")]
#[command(about = "Interactive in-memory note manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: $NOTEKEEPER_CONFIG, if set)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level for diagnostics on stderr (e.g., warn, debug)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Run a command line and exit instead of starting a session (repeatable)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,
}
