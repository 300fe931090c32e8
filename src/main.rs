use dotenvy::dotenv;
use shop_buddy::{bot, config, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let config_path = config::config_path();
    let app_config = config::load_config(&config_path)
        .inspect_err(|e| error!("Failed to load {:?}: {}", config_path, e))?;
    info!("Loaded configuration from {:?}.", config_path);

    // 4. Run the bot. The token is read here, directly before use, not stored in AppConfig
    let token = config::discord::bot_token()
        .inspect_err(|e| error!("{} not found: {}", config::discord::TOKEN_VAR, e))?;

    bot::run_bot(token, app_config).await
}
