mod bot;
mod config;
mod data;
mod error;
mod gacha;
mod model;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    gacha::{loader::LoadedSettings, roster::RosterStore},
    service::lock::UserLocks,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "mitsuki=info,serenity=warn";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let LoadedSettings { settings, rarities } = startup::read_settings(&config).await?;
    let cards = startup::read_roster(&config, &rarities).await;

    let state = AppState::new(
        db,
        RosterStore::default(),
        UserLocks::new(config.lock_timeout),
        settings,
    );

    let card_count = startup::install_roster(&state, rarities, cards).await?;
    tracing::info!("Starting with {} rollable cards", card_count);

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
