//! Framework error handling.
//!
//! Every failure is contained here: it is logged and, when the interaction has
//! not been answered yet, the user gets a private generic reply. Nothing is
//! retried and nothing is re-raised.

use crate::bot::{BotData, Context, replies};
use crate::errors::Error;
use std::sync::atomic::Ordering;
use tracing::error;

/// Whether the invocation already received its initial response.
fn has_replied(ctx: Context<'_>) -> bool {
    match ctx {
        poise::Context::Application(app_ctx) => {
            app_ctx.has_sent_initial_response.load(Ordering::SeqCst)
        }
        poise::Context::Prefix(_) => false,
    }
}

/// Sends the generic failure reply unless the command already answered.
async fn send_fallback(ctx: Context<'_>) {
    let Some(text) = replies::fallback(has_replied(ctx)) else {
        return;
    };
    if let Err(e) = ctx.send(replies::private(text)).await {
        error!("Failed to send error message: {}", e);
    }
}

/// Poise `on_error` hook.
pub async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            send_fallback(ctx).await;
        }
        poise::FrameworkError::EventHandler { error, .. } => {
            error!("Error in event handler: {:?}", error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
