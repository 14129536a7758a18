use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{Result, ShiftSwapError};

/// Optional configuration read from `<data-dir>/config.toml`.
///
/// Every section is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub store: Option<StoreSection>,
}

impl AppConfig {
    /// Load the configuration from `<data_dir>/config.toml`.
    ///
    /// After parsing, validates the data file name so a config file cannot
    /// point the store outside the data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| ShiftSwapError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", config_path.display()),
        })?;

        if let Some(store) = &config.store {
            validate_simple_filename(&store.file, "store file")?;
        }

        Ok(config)
    }
}

/// The `[store]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSection {
    #[serde(default = "default_store_file")]
    pub file: String,
}

impl StoreSection {
    pub const DEFAULT_FILE: &'static str = "requests.json";
}

fn default_store_file() -> String {
    StoreSection::DEFAULT_FILE.to_string()
}

/// Reject anything that is not a bare file name.
pub fn validate_simple_filename(name: &str, what: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');

    if invalid {
        return Err(ShiftSwapError::InvalidConfig {
            detail: format!("Invalid {what} '{name}': must be a plain file name"),
        });
    }
    Ok(())
}
