//! Fixed texts the bot answers with, and which one each outcome gets.

use crate::config::EmbedColor;
use crate::core::render::{self, Card};
use crate::core::shop::{AddOutcome, Selection};
use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;

/// Reply to `/ping`
pub const PONG: &str = "Pong! 🏓";
/// Reply when a non-admin runs an admin command
pub const ADMINS_ONLY: &str = "Sorry, this command is only available to admins!";
/// Reply to `/add` when the channel has no shop message
pub const SHOP_MISSING: &str = "Shop message not found. Please use /setup first.";
/// Reply when the placeholder option is chosen
pub const NO_PRODUCTS_AVAILABLE: &str = "No products are available right now.";
/// Reply when the chosen product is not in the catalog
pub const PRODUCT_NOT_FOUND: &str = "Sorry, the selected product could not be found.";
/// Fallback reply after an unexpected failure
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Confirmation sent after `/add` updated the shop menu.
#[must_use]
pub fn product_added(name: &str) -> String {
    format!("Product \"{name}\" added successfully!")
}

/// The private reply `/add` sends for `outcome`.
#[must_use]
pub fn add_reply(outcome: &AddOutcome, name: &str) -> String {
    match outcome {
        AddOutcome::MenuUpdated { .. } => product_added(name),
        AddOutcome::ShopMissing => SHOP_MISSING.to_string(),
        AddOutcome::Rejected => ADMINS_ONLY.to_string(),
    }
}

/// What a menu selection is answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionReply {
    /// A fixed private text
    Text(&'static str),
    /// A private product card
    Card(Card),
}

/// Maps a resolved selection to its reply.
#[must_use]
pub fn selection_reply(
    selection: Selection,
    color: EmbedColor,
    now: DateTime<Utc>,
) -> SelectionReply {
    match selection {
        Selection::NoProducts => SelectionReply::Text(NO_PRODUCTS_AVAILABLE),
        Selection::NotFound => SelectionReply::Text(PRODUCT_NOT_FOUND),
        Selection::Found(product) => {
            SelectionReply::Card(render::product_card(&product, color, now))
        }
    }
}

/// The generic failure text, unless the interaction was already answered.
#[must_use]
pub const fn fallback(already_replied: bool) -> Option<&'static str> {
    if already_replied {
        None
    } else {
        Some(UNEXPECTED_ERROR)
    }
}

/// A command reply only the invoking user can see.
pub fn private(content: impl Into<String>) -> poise::CreateReply {
    poise::CreateReply::default().content(content).ephemeral(true)
}

/// A component interaction response only the invoking user can see.
pub fn private_response(content: impl Into<String>) -> serenity::CreateInteractionResponse {
    serenity::CreateInteractionResponse::Message(
        serenity::CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}
