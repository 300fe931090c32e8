//! Application configuration loaded from `config.toml`.
//!
//! The TOML file holds the Discord identifiers and the appearance of the shop
//! card. The bot token is deliberately absent: it is read from the
//! environment right before the client is built (see [`discord::bot_token`]).

/// Discord identifiers and the bot credential
pub mod discord;

/// Shop card appearance
pub mod shop;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use discord::DiscordConfig;
pub use shop::{EmbedColor, ShopConfig};

/// Environment variable naming an alternative configuration file
pub const CONFIG_PATH_VAR: &str = "SHOP_CONFIG_PATH";

/// Configuration file used when [`CONFIG_PATH_VAR`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Application, guild and role identifiers
    pub discord: DiscordConfig,
    /// Title, color and image of the shop card
    pub shop: ShopConfig,
}

impl AppConfig {
    /// Checks the values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        if self.shop.title.trim().is_empty() {
            return Err(Error::Config {
                message: "shop.title cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses and validates configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let app_config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    app_config.validate()?;
    Ok(app_config)
}

/// Loads the application configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a required field is missing
/// - An identifier is zero, the title is empty or the color is not a valid RGB value
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Resolves the configuration path from [`CONFIG_PATH_VAR`], falling back to
/// [`DEFAULT_CONFIG_PATH`].
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_VAR)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}
