//! View rendering - builds the cards and menus the bot shows, as plain data.
//!
//! Nothing here depends on the chat platform. The bot layer converts these
//! values into serenity builders, so every rule about what a menu or card
//! contains can be tested directly.

use crate::config::{EmbedColor, ShopConfig};
use crate::core::catalog::{Catalog, Product};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Custom id of the product select menu
pub const SHOP_SELECT_ID: &str = "shop_select";

/// Option value used while the catalog is empty
pub const NO_PRODUCTS_VALUE: &str = "no_products";

/// Footer attribution carried by every card
pub const FOOTER_TEXT: &str = "Made by souhaib";

/// Text shown in the menu before a choice is made
pub const MENU_PLACEHOLDER: &str = "Choose a product";

/// Discord's limit on the length of a select option description
pub const OPTION_DESCRIPTION_LIMIT: usize = 100;

/// Discord's limit on the number of options in one select menu
pub const MAX_MENU_OPTIONS: usize = 25;

const SHOP_WELCOME: &str = "Welcome to the shop!\n\nMade by souhaib: https://guns.lol/souhaib";
const PLACEHOLDER_LABEL: &str = "No products";
const PLACEHOLDER_DESCRIPTION: &str = "No products have been added yet";

/// An embed card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card title
    pub title: String,
    /// Body text
    pub description: String,
    /// Large image, omitted when `None`
    pub image: Option<String>,
    /// Side bar color
    pub color: EmbedColor,
    /// Time shown next to the footer
    pub timestamp: DateTime<Utc>,
    /// Footer text
    pub footer: String,
}

/// One entry of the product select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Visible label
    pub label: String,
    /// Subtitle under the label
    pub description: String,
    /// Value delivered back when the option is chosen
    pub value: String,
}

/// A single-choice string select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopMenu {
    /// Component custom id, always [`SHOP_SELECT_ID`]
    pub custom_id: String,
    /// Placeholder text
    pub placeholder: String,
    /// Options in display order
    pub options: Vec<MenuOption>,
}

impl ShopMenu {
    fn with_options(options: Vec<MenuOption>) -> Self {
        Self {
            custom_id: SHOP_SELECT_ID.to_string(),
            placeholder: MENU_PLACEHOLDER.to_string(),
            options,
        }
    }
}

/// Returns at most `limit` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    text.char_indices()
        .nth(limit)
        .map_or(text, |(byte_index, _)| &text[..byte_index])
}

/// The card posted by `/setup`.
#[must_use]
pub fn shop_card(shop: &ShopConfig, now: DateTime<Utc>) -> Card {
    Card {
        title: shop.title.clone(),
        description: SHOP_WELCOME.to_string(),
        image: shop.image.clone(),
        color: shop.color,
        timestamp: now,
        footer: FOOTER_TEXT.to_string(),
    }
}

/// The private card shown when a product is selected.
#[must_use]
pub fn product_card(product: &Product, color: EmbedColor, now: DateTime<Utc>) -> Card {
    Card {
        title: product.name.clone(),
        description: product.description.clone(),
        image: product.image.clone(),
        color,
        timestamp: now,
        footer: FOOTER_TEXT.to_string(),
    }
}

/// The menu a fresh shop message starts with: a single "no products" option.
#[must_use]
pub fn placeholder_menu() -> ShopMenu {
    ShopMenu::with_options(vec![MenuOption {
        label: PLACEHOLDER_LABEL.to_string(),
        description: PLACEHOLDER_DESCRIPTION.to_string(),
        value: NO_PRODUCTS_VALUE.to_string(),
    }])
}

/// One option per catalog entry, in catalog order.
///
/// Discord rejects menus with more than [`MAX_MENU_OPTIONS`] options, so only
/// the first ones are rendered.
#[must_use]
pub fn catalog_menu(catalog: &Catalog) -> ShopMenu {
    if catalog.is_empty() {
        return placeholder_menu();
    }
    if catalog.len() > MAX_MENU_OPTIONS {
        warn!(
            "Catalog holds {} products, only the first {} fit in the menu",
            catalog.len(),
            MAX_MENU_OPTIONS
        );
    }

    let options = catalog
        .iter()
        .take(MAX_MENU_OPTIONS)
        .map(|product| MenuOption {
            label: product.name.clone(),
            description: truncate_chars(&product.description, OPTION_DESCRIPTION_LIMIT)
                .to_string(),
            value: product.name.clone(),
        })
        .collect();
    ShopMenu::with_options(options)
}
