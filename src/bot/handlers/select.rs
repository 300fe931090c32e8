//! Handler for choices made in the shop select menu.

use crate::bot::replies::{self, SelectionReply};
use crate::bot::{BotData, views};
use crate::core::shop;
use crate::errors::Result;
use chrono::Utc;
use poise::serenity_prelude as serenity;
use tracing::{error, info};

/// Answers a `shop_select` interaction with the chosen product's card.
///
/// Failures are logged and, if the interaction is still unanswered, the user
/// receives the generic private error reply.
pub async fn handle_shop_select(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &BotData,
) {
    let mut responded = false;
    if let Err(e) = respond_to_selection(ctx, component, data, &mut responded).await {
        error!("Error handling shop selection: {:?}", e);
        if let Some(text) = replies::fallback(responded) {
            if let Err(e) = component
                .create_response(&ctx.http, replies::private_response(text))
                .await
            {
                error!("Failed to send error message: {}", e);
            }
        }
    }
}

/// First value of a string select, if any.
fn selected_value(component: &serenity::ComponentInteraction) -> Option<&str> {
    match &component.data.kind {
        serenity::ComponentInteractionDataKind::StringSelect { values } => {
            values.first().map(String::as_str)
        }
        _ => None,
    }
}

async fn respond_to_selection(
    ctx: &serenity::Context,
    component: &serenity::ComponentInteraction,
    data: &BotData,
    responded: &mut bool,
) -> Result<()> {
    let value = selected_value(component).unwrap_or_default();
    info!(
        "Shop selection '{}' received from user: {}",
        value, component.user.name
    );

    let selection = shop::select_product(&data.shop, value).await;
    let response = match replies::selection_reply(selection, data.app_config.shop.color, Utc::now())
    {
        SelectionReply::Text(text) => replies::private_response(text),
        SelectionReply::Card(card) => serenity::CreateInteractionResponse::Message(
            serenity::CreateInteractionResponseMessage::new()
                .embed(views::card_embed(&card))
                .ephemeral(true),
        ),
    };

    component.create_response(&ctx.http, response).await?;
    *responded = true;
    Ok(())
}
