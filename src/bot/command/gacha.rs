//! `/gacha` subcommands.

use chrono::Utc;
use serenity::all::{CommandInteraction, CreateEmbed};

use crate::{
    bot::{
        command::{get_integer, get_page, get_string, get_user, split_subcommand},
        embed,
    },
    error::AppError,
    gacha::random::entropy_source,
    model::{
        inventory::{GetInventoryParam, InventorySort},
        settings::GachaSettings,
    },
    service::{card::CardService, ledger::LedgerService, roll::RollService},
    state::AppState,
};

const CARDS_PER_PAGE: u64 = 10;

/// Whether the invoking member boosts a premium guild.
fn is_premium(settings: &GachaSettings, command: &CommandInteraction) -> bool {
    let boosting = command
        .member
        .as_ref()
        .is_some_and(|member| member.premium_since.is_some());
    let premium_guild = command
        .guild_id
        .is_some_and(|guild_id| settings.is_premium_guild(guild_id.get()));

    boosting && premium_guild
}

/// Runs a `/gacha` subcommand and renders its reply.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Reply to send
/// - `Err(AppError)` - Operation failed; the caller renders the error
pub async fn handle(state: &AppState, command: &CommandInteraction) -> Result<CreateEmbed, AppError> {
    let user_id = command.user.id.get();
    let settings = state.settings.snapshot().await;

    let Some((name, options)) = split_subcommand(command.data.options()) else {
        return Err(AppError::NotFound("Unknown gacha command".to_string()));
    };

    match name {
        "roll" => {
            let mut source = entropy_source();
            let outcome = RollService::new(state)
                .roll(user_id, Utc::now(), &mut source)
                .await?;

            Ok(embed::roll(&outcome, &settings))
        }
        "daily" => {
            let outcome = LedgerService::new(state)
                .claim_daily(user_id, Utc::now(), is_premium(&settings, command))
                .await?;

            Ok(embed::daily(&outcome, &settings))
        }
        "shards" => {
            let target = get_user(&options, "user").unwrap_or(user_id);
            let balance = LedgerService::new(state).balance(target).await?;

            Ok(embed::balance(target, balance, &settings))
        }
        "give" => {
            let Some(target) = get_user(&options, "target") else {
                return Err(AppError::NotFound("Missing recipient".to_string()));
            };
            let amount = get_integer(&options, "amount").unwrap_or(0);
            let outcome = LedgerService::new(state)
                .transfer(user_id, target, amount, Utc::now())
                .await?;

            Ok(embed::transfer(user_id, target, &outcome, &settings))
        }
        "view" => {
            let query = get_string(&options, "card").unwrap_or_default();
            let view = CardService::new(state).view_card(user_id, &query).await?;

            Ok(embed::card(&view))
        }
        "cards" => {
            let target = get_user(&options, "user").unwrap_or(user_id);
            let sort = get_string(&options, "sort")
                .map(|sort| InventorySort::parse(&sort))
                .unwrap_or_default();
            let page = CardService::new(state)
                .inventory(GetInventoryParam {
                    user_id: target,
                    sort,
                    page: get_page(&options),
                    per_page: CARDS_PER_PAGE,
                })
                .await?;

            Ok(embed::inventory(target, &page, sort))
        }
        "gallery" => {
            let target = get_user(&options, "user").unwrap_or(user_id);
            let sort = get_string(&options, "sort")
                .map(|sort| InventorySort::parse(&sort))
                .unwrap_or_default();

            let page = CardService::new(state)
                .inventory(GetInventoryParam {
                    user_id: target,
                    sort,
                    page: get_page(&options),
                    per_page: 1,
                })
                .await?;
            let roster = state.roster.snapshot().await;
            let rarity = page
                .cards
                .first()
                .and_then(|owned| roster.setting(owned.card.rarity));

            Ok(embed::gallery(target, &page, sort, rarity))
        }
        "profile" => {
            let target = get_user(&options, "user").unwrap_or(user_id);
            let profile = CardService::new(state).profile(target).await?;

            Ok(embed::profile(target, &profile, &settings))
        }
        "details" => {
            let rates = CardService::new(state).rates().await;

            Ok(embed::rates(&rates, &settings))
        }
        other => Err(AppError::NotFound(format!("Unknown gacha command '{}'", other))),
    }
}
