//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod session;

pub use commands::Cli;
pub use output::format_result;
pub use session::Session;
