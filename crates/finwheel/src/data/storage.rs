//! Data directory layout
//!
//! ```text
//! ~/.finwheel/
//!   config.yaml        # Currency, palette, icons, default period
//!   operations.yaml    # Operations snapshot read at startup
//!   finwheel.log       # Application log
//! ```

use std::fs;
use std::path::PathBuf;

use super::config_data::AppConfig;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// The application's data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.finwheel/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".finwheel")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    /// Operations snapshot used when no `--ledger` is given
    pub fn ledger_path(&self) -> PathBuf {
        self.root.join("operations.yaml")
    }

    /// Load config.yaml; a missing file gives the defaults.
    pub fn load_config(&self) -> Result<AppConfig, StorageError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Like [`load_config`](Self::load_config), but a broken file only costs a
    /// warning.
    pub fn load_config_or_default(&self) -> AppConfig {
        match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.config_path().display(), "Using default config");
                AppConfig::default()
            }
        }
    }
}
