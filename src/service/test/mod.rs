use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use test_utils::builder::TestBuilder;

use crate::{
    error::AppError,
    gacha::roster::RosterStore,
    model::{card::Card, rarity::RaritySetting, settings::GachaSettings},
    service::{lock::UserLocks, roster::RosterService},
    state::AppState,
};

mod card;
mod roster;

/// Builds state over a fresh database with every gacha table and an empty roster.
async fn setup_with(settings: GachaSettings, lock_timeout: Duration) -> AppState {
    let test = TestBuilder::new().with_gacha_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    AppState::new(
        db,
        RosterStore::default(),
        UserLocks::new(lock_timeout),
        settings,
    )
}

async fn setup(settings: GachaSettings) -> AppState {
    setup_with(settings, Duration::from_secs(5)).await
}

/// Builds state and installs `two_tier_roster`.
async fn setup_with_roster(settings: GachaSettings) -> Result<AppState, AppError> {
    let state = setup(settings).await;
    let (rarities, cards) = two_tier_roster();
    RosterService::new(&state).reload(rarities, cards).await?;

    Ok(state)
}

/// Rarity 1 at weight 0.9 and rarity 2 at weight 0.1 with pity 5, one card each.
fn two_tier_roster() -> (Vec<RaritySetting>, Vec<Card>) {
    (
        vec![
            RaritySetting::new(1, 0.9).with_dupe_shards(10),
            RaritySetting::new(2, 0.1).with_pity(5).with_dupe_shards(50),
        ],
        vec![
            Card::new("common", "Common", 1, "Character", "Originals"),
            Card::new("rare", "Rare", 2, "Character", "Originals"),
        ],
    )
}

fn settings() -> GachaSettings {
    GachaSettings {
        cost: 100,
        daily_shards: 120,
        first_time_shards: Some(600),
        premium_daily_shards: Some(200),
        ..Default::default()
    }
}

/// 2026-03-01 12:00 UTC.
fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}
