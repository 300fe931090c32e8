//! Framework construction and client start-up.

use crate::bot::{BotData, commands, handlers};
use crate::config::{AppConfig, DiscordConfig};
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Registers every command in the configured guild over plain HTTP.
///
/// # Errors
/// Returns an error if Discord rejects the registration.
pub async fn register_commands(token: &str, discord: &DiscordConfig) -> Result<()> {
    let http = Arc::new(serenity::Http::new(token));
    http.set_application_id(serenity::ApplicationId::new(discord.application_id.get()));

    let guild_id = serenity::GuildId::new(discord.guild_id.get());
    info!("Registering commands in guild {}...", guild_id);
    poise::builtins::register_in_guild(&http, &commands::all(), guild_id)
        .await
        .inspect_err(|e| error!("Failed to register commands: {}", e))?;
    info!("Commands registered successfully.");
    Ok(())
}

/// Builds the user data once the gateway reports ready.
///
/// Nothing here can fail: a failing setup hook would leave every later event
/// waiting for user data that never arrives.
#[must_use]
pub fn ready_data(app_config: Arc<AppConfig>, bot_name: &str, connected_application: u64) -> BotData {
    info!("Logged in as {}", bot_name);
    let discord = &app_config.discord;
    if connected_application != discord.application_id.get() {
        warn!(
            "Configured application id {} differs from the connected application {}",
            discord.application_id, connected_application
        );
    }
    info!("Bot invite link: {}", discord.invite_link());
    BotData::new(app_config)
}

/// Registers the commands, connects to Discord and runs until the client stops.
///
/// Registration happens before login, so a failure there ends start-up
/// without ever connecting to the gateway.
///
/// # Errors
/// Returns an error if registration fails, the client cannot be created or the
/// connection fails.
#[instrument(skip(token, app_config))]
pub async fn run_bot(token: String, app_config: AppConfig) -> Result<()> {
    register_commands(&token, &app_config.discord).await?;

    let app_config = Arc::new(app_config);
    let setup_config = Arc::clone(&app_config);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(handlers::error::on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event::handle_event(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            let app_config = Arc::clone(&setup_config);
            Box::pin(async move {
                Ok::<_, Error>(ready_data(
                    app_config,
                    &ready.user.name,
                    ready.application.id.get(),
                ))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MESSAGES;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
