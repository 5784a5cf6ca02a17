//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating a small roster.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a two-tier roster with one card per tier.
///
/// Rarity 1 has weight 0.9 and no pity. Rarity 2 has weight 0.1 and a pity threshold
/// of 5. Both tiers pay 10 shards on a duplicate.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((rarities, cards))` - Created rarity settings and cards, ordered by rarity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_two_tier_roster(
    db: &DatabaseConnection,
) -> Result<(Vec<entity::gacha_rarity::Model>, Vec<entity::gacha_card::Model>), DbErr> {
    let common = crate::factory::rarity::RarityFactory::new(db, 1)
        .rate(0.9)
        .dupe_shards(10)
        .build()
        .await?;
    let rare = crate::factory::rarity::RarityFactory::new(db, 2)
        .rate(0.1)
        .dupe_shards(10)
        .pity(Some(5))
        .build()
        .await?;

    let common_card = crate::factory::card::create_card(db, 1).await?;
    let rare_card = crate::factory::card::create_card(db, 2).await?;

    Ok((vec![common, rare], vec![common_card, rare_card]))
}
