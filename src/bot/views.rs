//! Conversion of core views into serenity builders.

use crate::core::render::{Card, ShopMenu};
use poise::serenity_prelude as serenity;

/// Builds the embed for a card.
pub fn card_embed(card: &Card) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(&card.title)
        .description(&card.description)
        .color(card.color.0)
        .footer(serenity::CreateEmbedFooter::new(&card.footer));

    if let Some(image) = &card.image {
        embed = embed.image(image);
    }
    if let Ok(timestamp) = serenity::Timestamp::from_unix_timestamp(card.timestamp.timestamp()) {
        embed = embed.timestamp(timestamp);
    }
    embed
}

/// Builds the action row holding the shop select menu.
pub fn menu_row(menu: &ShopMenu) -> serenity::CreateActionRow {
    let options = menu
        .options
        .iter()
        .map(|option| {
            serenity::CreateSelectMenuOption::new(&option.label, &option.value)
                .description(&option.description)
        })
        .collect();

    serenity::CreateActionRow::SelectMenu(
        serenity::CreateSelectMenu::new(
            &menu.custom_id,
            serenity::CreateSelectMenuKind::String { options },
        )
        .placeholder(&menu.placeholder),
    )
}
