//! [`ShopSurface`] over a real Discord channel.

use crate::bot::views;
use crate::core::render::ShopMenu;
use crate::core::shop::{PostedMessage, ShopSurface};
use crate::errors::Result;
use poise::serenity_prelude as serenity;

/// HTTP status Discord answers with for a deleted message
const NOT_FOUND: u16 = 404;

/// One guild channel, accessed through the serenity HTTP client.
pub struct ChannelSurface<'a> {
    ctx: &'a serenity::Context,
    channel_id: serenity::ChannelId,
}

impl<'a> ChannelSurface<'a> {
    /// Wraps `channel_id` for use by the shop workflow.
    #[must_use]
    pub const fn new(ctx: &'a serenity::Context, channel_id: serenity::ChannelId) -> Self {
        Self { ctx, channel_id }
    }
}

fn posted_message(message: &serenity::Message) -> PostedMessage {
    PostedMessage {
        id: message.id.get(),
        author_id: message.author.id.get(),
        title: message.embeds.first().and_then(|embed| embed.title.clone()),
    }
}

impl ShopSurface for ChannelSurface<'_> {
    async fn recent_messages(&self, limit: u8) -> Result<Vec<PostedMessage>> {
        let messages = self
            .channel_id
            .messages(self.ctx, serenity::GetMessages::new().limit(limit))
            .await?;
        Ok(messages.iter().map(posted_message).collect())
    }

    async fn message(&self, id: u64) -> Result<Option<PostedMessage>> {
        match self
            .channel_id
            .message(self.ctx, serenity::MessageId::new(id))
            .await
        {
            Ok(message) => Ok(Some(posted_message(&message))),
            Err(serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == NOT_FOUND =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn replace_menu(&self, id: u64, menu: &ShopMenu) -> Result<()> {
        self.channel_id
            .edit_message(
                self.ctx,
                serenity::MessageId::new(id),
                serenity::EditMessage::new().components(vec![views::menu_row(menu)]),
            )
            .await?;
        Ok(())
    }
}
