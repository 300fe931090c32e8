//! Unified error type for the shop bot.

use thiserror::Error;

/// Every fallible operation in the crate returns this error.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file is missing, malformed or holds invalid values
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading the configuration
        message: String,
    },

    /// A required environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Failure reported by a `ShopSurface` that is not backed by serenity,
    /// such as the in-memory channel used in tests; serenity failures arrive
    /// as [`Error::FrameworkError`]
    #[error("Platform request failed: {message}")]
    Platform {
        /// Description of the failed request
        message: String,
    },

    /// Error raised by serenity or poise
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
