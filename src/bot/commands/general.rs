//! General Discord commands.
//! Commands here touch no shared state and are open to every member.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, replies},
        errors::Result,
    };
    use tracing::info;

    /// Responds privately with "Pong!" to test bot connectivity.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        info!("Ping command received from user: {}", ctx.author().name);
        ctx.send(replies::private(replies::PONG)).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::ping;
