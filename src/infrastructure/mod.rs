//! Infrastructure layer - Configuration and process-level services

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::init_logging;
