//! Gateway events the framework does not route to commands.

use crate::bot::{BotData, handlers::select};
use crate::core::render::SHOP_SELECT_ID;
use crate::errors::Result;
use poise::serenity_prelude as serenity;
use tracing::trace;

/// Routes component interactions to their handler.
///
/// Handlers contain their own failures, so this never returns an error.
pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, crate::errors::Error>,
    data: &BotData,
) -> Result<()> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        match component.data.custom_id.as_str() {
            SHOP_SELECT_ID => select::handle_shop_select(ctx, component, data).await,
            other => trace!("Unhandled component interaction: {}", other),
        }
    }
    Ok(())
}
