//! `/gacha-admin` subcommands.

use std::path::Path;

use serenity::all::{CommandInteraction, CreateEmbed, Permissions};

use crate::{
    bot::{
        command::{get_page, get_string, split_subcommand},
        embed,
    },
    error::AppError,
    gacha::loader::load_files,
    model::card::{CardStatsSort, GetCardStatsParam},
    service::{card::CardService, roster::RosterService},
    state::AppState,
};

const CARDS_PER_PAGE: u64 = 15;

/// Runs a `/gacha-admin` subcommand and renders its reply.
///
/// The command is registered for administrators only; membership permissions are
/// checked again here since guilds can override the default.
///
/// # Arguments
/// - `state` - Shared application state
/// - `command` - The invoking interaction
/// - `settings_path` - Settings YAML read by `reload`, installed with the roster
/// - `roster_path` - Roster YAML read by `reload`
pub async fn handle(
    state: &AppState,
    command: &CommandInteraction,
    settings_path: &Path,
    roster_path: &Path,
) -> Result<CreateEmbed, AppError> {
    let is_admin = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.contains(Permissions::ADMINISTRATOR));
    if !is_admin {
        return Err(AppError::Forbidden(
            "Only administrators can manage the gacha".to_string(),
        ));
    }

    match split_subcommand(command.data.options()) {
        Some(("reload", _)) => {
            let loaded = load_files(settings_path, roster_path).await?;
            let count = RosterService::new(state).reload_from(loaded).await?;
            let version = state.roster.snapshot().await.version();

            tracing::info!(
                "User {} reloaded the roster ({} cards)",
                command.user.id,
                count
            );

            Ok(embed::reload(count, version))
        }
        Some(("cards", options)) => {
            let sort = get_string(&options, "sort")
                .map(|sort| CardStatsSort::parse(&sort))
                .unwrap_or_default();

            let page = CardService::new(state)
                .card_stats(GetCardStatsParam {
                    sort,
                    page: get_page(&options),
                    per_page: CARDS_PER_PAGE,
                })
                .await?;

            Ok(embed::card_stats(&page, sort))
        }
        _ => Err(AppError::NotFound("Unknown admin command".to_string())),
    }
}
