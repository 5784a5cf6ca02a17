use std::path::PathBuf;

use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client.
///
/// Slash commands need no privileged intents; `GUILDS` is enough for interactions
/// to carry guild and member data.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and roster file paths
/// - `state` - Shared application state for the event handler
///
/// # Returns
/// - `Ok(Client)` - Configured client, not yet connected
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(
        state,
        PathBuf::from(&config.settings_path),
        PathBuf::from(&config.roster_path),
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects to the gateway and processes events until shutdown.
///
/// # Returns
/// - `Ok(())` - The client shut down
/// - `Err(AppError)` - Connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
