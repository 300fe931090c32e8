//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Shop management commands
pub mod shop;

// Export commands
pub use general::ping;
pub use shop::{add, setup};

use crate::bot::BotData;
use crate::errors::Error;

/// Every command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![ping(), setup(), add()]
}
