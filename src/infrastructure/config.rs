//! Configuration management

use crate::domain::TableLayout;
use crate::error::{NotekeeperError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "NOTEKEEPER_CONFIG";

/// Narrowest content column that still leaves room for an ellipsis
const MIN_CONTENT_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: String,
    pub color: bool,
    pub title_width: usize,
    pub content_width: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let layout = TableLayout::default();
        Config {
            prompt: "> ".to_string(),
            color: true,
            title_width: layout.title_width,
            content_width: layout.content_width,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, else from `NOTEKEEPER_CONFIG`,
    /// else fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(value) if !value.is_empty() => Self::load_from_file(&PathBuf::from(value)),
            _ => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotekeeperError::ConfigNotFound(path.to_path_buf())
            } else {
                NotekeeperError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.content_width < MIN_CONTENT_WIDTH {
            return Err(NotekeeperError::Config(format!(
                "content_width must be at least {}",
                MIN_CONTENT_WIDTH
            )));
        }
        if self.title_width == 0 {
            return Err(NotekeeperError::Config(
                "title_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Column widths for note tables
    pub fn table_layout(&self) -> TableLayout {
        TableLayout {
            title_width: self.title_width,
            content_width: self.content_width,
        }
    }
}
