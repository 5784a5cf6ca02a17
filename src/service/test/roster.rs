use super::*;
use crate::{
    data::{card::CardRepository, rarity::RarityRepository},
    error::gacha::GachaError,
    gacha::{loader::LoadedRoster, random::ScriptedDraws},
    service::roll::RollService,
};
use test_utils::factory::currency::CurrencyFactory;

/// Tests installing a roster.
///
/// Verifies that tiers and cards are stored and the snapshot version advances.
///
/// Expected: Ok with 2 cards and version 2
#[tokio::test]
async fn reload_persists_and_installs() -> Result<(), AppError> {
    let state = setup(settings()).await;
    let (rarities, cards) = two_tier_roster();

    let count = RosterService::new(&state).reload(rarities, cards).await?;

    assert_eq!(count, 2);
    let snapshot = state.roster.snapshot().await;
    assert_eq!(snapshot.version(), 2);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(RarityRepository::new(&state.db).get_all().await?.len(), 2);
    assert_eq!(CardRepository::new(&state.db).get_listed().await?.len(), 2);

    Ok(())
}

/// Tests reloading without a card that users own.
///
/// Verifies that the removed card is unlisted, never rolled again, and still resolves
/// for its owners.
///
/// Expected: Ok with the removed card unlisted
#[tokio::test]
async fn reload_unlists_removed_cards() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    CurrencyFactory::new(&state.db)
        .user_id("1")
        .amount(1000)
        .build()
        .await?;
    let mut source = ScriptedDraws::new(vec![0.0]);
    let first = RollService::new(&state).roll(1, noon(), &mut source).await?;
    assert_eq!(first.card.id, "common");

    let (rarities, mut cards) = two_tier_roster();
    cards.retain(|card| card.id != "common");
    cards.push(Card::new("common_2", "Common 2", 1, "Character", "Originals"));
    RosterService::new(&state).reload(rarities, cards).await?;

    let removed = CardRepository::new(&state.db)
        .find_by_id("common")
        .await?
        .unwrap();
    assert!(removed.unlisted);

    let next = RollService::new(&state).roll(1, noon(), &mut source).await?;
    assert_eq!(next.card.id, "common_2");
    assert!(next.is_new);

    Ok(())
}

/// Tests reloading an inconsistent roster.
///
/// Verifies that nothing is written and the previous snapshot stays installed.
///
/// Expected: Err(Configuration) with version and stored tiers unchanged
#[tokio::test]
async fn invalid_reload_keeps_previous_roster() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    let version = state.roster.snapshot().await.version();

    let result = RosterService::new(&state)
        .reload(
            vec![RaritySetting::new(1, 1.0)],
            vec![Card::new("orphan", "Orphan", 7, "Character", "Originals")],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GachaErr(GachaError::Configuration(_)))
    ));
    assert_eq!(state.roster.snapshot().await.version(), version);
    assert_eq!(RarityRepository::new(&state.db).get_all().await?.len(), 2);
    assert!(CardRepository::new(&state.db)
        .find_by_id("orphan")
        .await?
        .is_none());

    Ok(())
}

/// Tests reloading with no tiers.
///
/// Expected: Err(Configuration)
#[tokio::test]
async fn empty_reload_fails() -> Result<(), AppError> {
    let state = setup(settings()).await;

    let result = RosterService::new(&state).reload(Vec::new(), Vec::new()).await;

    assert!(matches!(
        result,
        Err(AppError::GachaErr(GachaError::Configuration(_)))
    ));
    assert!(state.roster.snapshot().await.is_empty());

    Ok(())
}

/// Tests loading the stored roster at startup.
///
/// Verifies that a fresh store picks up what a previous reload persisted, and that an
/// empty database leaves the roster empty.
///
/// Expected: Ok with 2 cards installed
#[tokio::test]
async fn load_stored_restores_roster() -> Result<(), AppError> {
    let state = setup(settings()).await;
    assert_eq!(RosterService::new(&state).load_stored().await?, 0);
    assert!(state.roster.snapshot().await.is_empty());

    let (rarities, cards) = two_tier_roster();
    RosterService::new(&state).reload(rarities, cards).await?;

    let restarted = AppState {
        roster: Default::default(),
        ..state.clone()
    };
    let count = RosterService::new(&restarted).load_stored().await?;

    assert_eq!(count, 2);
    let snapshot = restarted.roster.snapshot().await;
    assert_eq!(snapshot.setting(2).and_then(|s| s.pity), Some(5));
    assert!(snapshot.card("rare").is_some());

    Ok(())
}

/// Tests reloading the gacha files with a new roll cost.
///
/// Verifies that the settings read with the roster replace the live economy, so the
/// next roll debits the new cost.
///
/// Expected: Ok with a 100 shard debit before the reload and 50 after
#[tokio::test]
async fn reload_from_files_updates_economy() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    CurrencyFactory::new(&state.db)
        .user_id("1")
        .amount(1000)
        .build()
        .await?;
    let service = RollService::new(&state);
    let mut source = ScriptedDraws::new(vec![0.0]);

    let before = service.roll(1, noon(), &mut source).await?;
    assert_eq!(before.balance, 900);

    let (rarities, cards) = two_tier_roster();
    RosterService::new(&state)
        .reload_from(LoadedRoster {
            settings: GachaSettings {
                cost: 50,
                ..settings()
            },
            rarities,
            cards,
        })
        .await?;

    assert_eq!(state.settings.snapshot().await.cost, 50);
    // Duplicate of "common" pays 10 back
    let after = service.roll(1, noon(), &mut source).await?;
    assert_eq!(after.balance, 900 - 50 + 10);

    Ok(())
}

/// Tests reloading the gacha files with an unusable roster.
///
/// Verifies that settings are not installed when the roster they came with is rejected.
///
/// Expected: Err(Configuration) and the previous cost still in effect
#[tokio::test]
async fn rejected_reload_keeps_economy() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    let (rarities, _) = two_tier_roster();

    let result = RosterService::new(&state)
        .reload_from(LoadedRoster {
            settings: GachaSettings {
                cost: 50,
                ..settings()
            },
            rarities,
            cards: Vec::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::GachaErr(GachaError::Configuration(_)))
    ));
    assert_eq!(state.settings.snapshot().await.cost, 100);
    assert_eq!(state.roster.snapshot().await.len(), 2);

    Ok(())
}
