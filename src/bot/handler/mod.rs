use std::path::PathBuf;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    /// Files read by the admin reload command.
    pub settings_path: PathBuf,
    pub roster_path: PathBuf,
}

impl Handler {
    pub fn new(state: AppState, settings_path: PathBuf, roster_path: PathBuf) -> Self {
        Self {
            state,
            settings_path,
            roster_path,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a user invokes a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self, ctx, interaction).await;
    }
}
