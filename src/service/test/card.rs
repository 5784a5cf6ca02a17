use chrono::TimeDelta;
use test_utils::factory::{self, inventory::InventoryFactory};

use super::*;
use crate::{
    model::{
        card::{CardStatsSort, GetCardStatsParam},
        inventory::{GetInventoryParam, InventorySort},
    },
    service::card::CardService,
};

/// Tests viewing a card owned and rolled by several users.
///
/// Verifies the global statistics, the viewer's own entry and the first and last
/// acquirers taken from roll history.
///
/// Expected: Ok with 3 rolls, 2 owners, first acquirer 1 and last acquirer 2
#[tokio::test]
async fn view_card_aggregates_history() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;

    factory::create_roll(&state.db, "1", "rare", noon()).await?;
    factory::create_roll(&state.db, "1", "rare", noon() + TimeDelta::hours(1)).await?;
    factory::create_roll(&state.db, "2", "rare", noon() + TimeDelta::hours(2)).await?;
    InventoryFactory::new(&state.db, "1", "rare")
        .count(2)
        .first_acquired(noon())
        .build()
        .await?;
    factory::create_inventory(&state.db, "2", "rare").await?;

    let view = CardService::new(&state).view_card(1, "rare").await?;

    assert_eq!(view.card.name, "Rare");
    assert_eq!(view.rarity.map(|r| r.rarity), Some(2));
    assert_eq!(view.owned.map(|e| e.count), Some(2));
    assert_eq!(view.total_rolled, 3);
    assert_eq!(view.owners, 2);
    assert_eq!(view.first_acquirer.map(|a| a.user_id), Some(1));

    let last = view.last_acquirer.unwrap();
    assert_eq!(last.user_id, 2);
    assert_eq!(last.time, noon() + TimeDelta::hours(2));

    Ok(())
}

/// Tests viewing a card nobody has rolled, by name.
///
/// Expected: Ok with empty statistics
#[tokio::test]
async fn view_card_by_name_without_history() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;

    let view = CardService::new(&state).view_card(1, "COMMON").await?;

    assert_eq!(view.card.id, "common");
    assert!(view.owned.is_none());
    assert_eq!(view.total_rolled, 0);
    assert_eq!(view.owners, 0);
    assert!(view.first_acquirer.is_none());

    Ok(())
}

/// Tests viewing a card that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn view_unknown_card_fails() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;

    let result = CardService::new(&state).view_card(1, "missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests viewing a card removed by a reload.
///
/// Expected: Ok with the card flagged unlisted
#[tokio::test]
async fn view_unlisted_card() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    let (rarities, mut cards) = two_tier_roster();
    cards.retain(|card| card.id != "common");
    cards.push(Card::new("common_2", "Common 2", 1, "Character", "Originals"));
    RosterService::new(&state).reload(rarities, cards).await?;

    let view = CardService::new(&state).view_card(1, "common").await?;

    assert!(view.card.unlisted);
    assert_eq!(view.rarity.map(|r| r.rarity), Some(1));

    Ok(())
}

/// Tests sorting and paging an inventory.
///
/// Verifies that the count sort orders by copies, that pages split at `per_page`, and
/// that a page past the end is empty.
///
/// Expected: Ok with pages [rare, common] and [card_c]
#[tokio::test]
async fn inventory_sorts_and_pages() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    factory::card::CardFactory::new(&state.db, 1)
        .id("card_c")
        .name("Aardvark")
        .build()
        .await?;

    InventoryFactory::new(&state.db, "1", "common")
        .count(3)
        .first_acquired(noon())
        .build()
        .await?;
    InventoryFactory::new(&state.db, "1", "rare")
        .count(5)
        .first_acquired(noon() + TimeDelta::hours(1))
        .build()
        .await?;
    InventoryFactory::new(&state.db, "1", "card_c")
        .count(1)
        .first_acquired(noon() + TimeDelta::hours(2))
        .build()
        .await?;

    let service = CardService::new(&state);
    let param = |sort, page| GetInventoryParam {
        user_id: 1,
        sort,
        page,
        per_page: 2,
    };

    let first = service.inventory(param(InventorySort::Count, 0)).await?;
    let ids: Vec<&str> = first.cards.iter().map(|c| c.card.id.as_str()).collect();
    assert_eq!(ids, vec!["rare", "common"]);
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);

    let second = service.inventory(param(InventorySort::Count, 1)).await?;
    assert_eq!(second.cards.len(), 1);
    assert_eq!(second.cards[0].card.id, "card_c");

    let past_end = service.inventory(param(InventorySort::Count, 5)).await?;
    assert!(past_end.cards.is_empty());

    let by_date = service.inventory(param(InventorySort::Date, 0)).await?;
    assert_eq!(by_date.cards[0].card.id, "card_c");

    let by_name = service.inventory(param(InventorySort::Alpha, 0)).await?;
    assert_eq!(by_name.cards[0].card.name, "Aardvark");

    let by_rarity = service.inventory(param(InventorySort::Rarity, 0)).await?;
    assert_eq!(by_rarity.cards[0].card.id, "rare");

    Ok(())
}

/// Tests an empty inventory.
///
/// Expected: Ok with no cards and one page
#[tokio::test]
async fn empty_inventory_has_one_page() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;

    let page = CardService::new(&state)
        .inventory(GetInventoryParam {
            user_id: 1,
            sort: InventorySort::default(),
            page: 0,
            per_page: 10,
        })
        .await?;

    assert!(page.cards.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

/// Tests the profile summary.
///
/// Expected: Ok with pity progress, per-tier stats and total rolls
#[tokio::test]
async fn profile_summarizes_user() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    factory::create_pity(&state.db, "1", 2, 3).await?;
    factory::create_roll(&state.db, "1", "common", noon()).await?;
    factory::create_roll(&state.db, "1", "common", noon()).await?;
    factory::create_roll(&state.db, "1", "rare", noon()).await?;
    factory::create_inventory(&state.db, "1", "common").await?;
    factory::create_inventory(&state.db, "1", "rare").await?;

    let profile = CardService::new(&state).profile(1).await?;

    assert_eq!(profile.total_rolls, 3);
    assert_eq!(profile.pity.len(), 1);
    assert_eq!(profile.pity[0].rarity, 2);
    assert_eq!(profile.pity[0].count, 3);
    assert_eq!(profile.pity[0].threshold, 5);

    assert_eq!(profile.rarities.len(), 2);
    assert_eq!(profile.rarities[0].rolled, 2);
    assert_eq!(profile.rarities[0].owned, 1);
    assert_eq!(profile.rarities[0].available, 1);
    assert_eq!(profile.rarities[1].rolled, 1);

    Ok(())
}

/// Tests the rates listing.
///
/// Expected: Ok with normalized probabilities, and an empty list without a roster
#[tokio::test]
async fn rates_follow_current_roster() -> Result<(), AppError> {
    let empty = setup(settings()).await;
    assert!(CardService::new(&empty).rates().await.is_empty());

    let state = setup_with_roster(settings()).await?;
    let rates = CardService::new(&state).rates().await;

    assert_eq!(rates.len(), 2);
    assert!((rates[0].probability - 0.9).abs() < 1e-9);
    assert!((rates[1].probability - 0.1).abs() < 1e-9);
    assert_eq!(rates[1].setting.pity, Some(5));
    assert_eq!(rates[1].cards, 1);

    Ok(())
}

/// Tests listing every stored card with global statistics.
///
/// Verifies that cards nobody obtained and unlisted cards are included, that the
/// rarity sort puts the rarest first, and that copies, owners and acquirers are
/// aggregated per card.
///
/// Expected: Ok with pages [rare, common] and [retired]
#[tokio::test]
async fn card_stats_include_unobtained_cards() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    factory::card::CardFactory::new(&state.db, 1)
        .id("retired")
        .name("Retired")
        .unlisted(true)
        .build()
        .await?;

    factory::create_roll(&state.db, "1", "rare", noon()).await?;
    factory::create_roll(&state.db, "1", "rare", noon() + TimeDelta::hours(1)).await?;
    factory::create_roll(&state.db, "2", "rare", noon() + TimeDelta::hours(2)).await?;
    InventoryFactory::new(&state.db, "1", "rare")
        .count(2)
        .build()
        .await?;
    factory::create_inventory(&state.db, "2", "rare").await?;

    let service = CardService::new(&state);
    let first = service
        .card_stats(GetCardStatsParam {
            sort: CardStatsSort::Rarity,
            page: 0,
            per_page: 2,
        })
        .await?;

    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    let ids: Vec<&str> = first.cards.iter().map(|s| s.card.id.as_str()).collect();
    assert_eq!(ids, vec!["rare", "common"]);

    let rare = &first.cards[0];
    assert_eq!(rare.rolled, 3);
    assert_eq!(rare.owners, 2);
    assert_eq!(rare.rarity.as_ref().map(|r| r.rarity), Some(2));
    assert_eq!(rare.first_acquirer.as_ref().map(|a| a.user_id), Some(1));
    assert_eq!(rare.last_acquirer.as_ref().map(|a| a.user_id), Some(2));

    let common = &first.cards[1];
    assert_eq!(common.rolled, 0);
    assert_eq!(common.owners, 0);
    assert!(common.first_acquirer.is_none());

    let second = service
        .card_stats(GetCardStatsParam {
            sort: CardStatsSort::Rarity,
            page: 1,
            per_page: 2,
        })
        .await?;

    assert_eq!(second.cards.len(), 1);
    assert_eq!(second.cards[0].card.id, "retired");
    assert!(second.cards[0].card.unlisted);

    Ok(())
}

/// Tests the id sort of the full card listing.
///
/// Expected: Ok with cards ordered by id
#[tokio::test]
async fn card_stats_sort_by_id() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;

    let page = CardService::new(&state)
        .card_stats(GetCardStatsParam {
            sort: CardStatsSort::Id,
            page: 0,
            per_page: 10,
        })
        .await?;

    let ids: Vec<&str> = page.cards.iter().map(|s| s.card.id.as_str()).collect();
    assert_eq!(ids, vec!["common", "rare"]);
    assert_eq!(page.total_pages, 1);

    Ok(())
}

/// Tests browsing an inventory one card at a time.
///
/// Verifies that a single-card page reports one page per owned card.
///
/// Expected: Ok with 2 pages and the newest card first
#[tokio::test]
async fn gallery_pages_one_card_at_a_time() -> Result<(), AppError> {
    let state = setup_with_roster(settings()).await?;
    InventoryFactory::new(&state.db, "1", "common")
        .first_acquired(noon())
        .build()
        .await?;
    InventoryFactory::new(&state.db, "1", "rare")
        .first_acquired(noon() + TimeDelta::hours(1))
        .build()
        .await?;

    let page = CardService::new(&state)
        .inventory(GetInventoryParam {
            user_id: 1,
            sort: InventorySort::Date,
            page: 0,
            per_page: 1,
        })
        .await?;

    assert_eq!(page.total_pages, 2);
    assert_eq!(page.cards.len(), 1);
    assert_eq!(page.cards[0].card.id, "rare");

    Ok(())
}
