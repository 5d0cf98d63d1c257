pub mod schema;

pub use schema::{CardConfig, HistoryConfig, SparklineConfig};

use std::path::{Path, PathBuf};
use vitals_core::{CardError, Result};

/// Load configuration from a TOML file.  Returns `CardConfig::default()` if
/// the file doesn't exist so the card always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<CardConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(CardConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| CardError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config: CardConfig =
        toml::from_str(&raw).map_err(|e| CardError::Config(format!("TOML parse error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("vitals").join("vitals.toml")
}
