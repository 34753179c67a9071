//! Logger bootstrap
//!
//! Diagnostics go to stderr so they never mix with session output on stdout.
//! `RUST_LOG` takes precedence over the configured level.

use crate::error::Result;
use flexi_logger::{Logger, LoggerHandle};
use log::info;

/// Start the global logger. Keep the returned handle alive for the whole run.
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;

    info!(
        "event=app_start status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}
