//! Roll history and roll outcome models.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    model::{card::Card, rarity::RaritySetting},
    util::parse::parse_u64_from_string,
};

/// One entry of the append-only roll log.
#[derive(Debug, Clone, PartialEq)]
pub struct RollRecord {
    pub id: i32,
    pub user_id: u64,
    pub card_id: String,
    pub time: DateTime<Utc>,
}

impl RollRecord {
    pub fn from_entity(entity: entity::gacha_roll::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            card_id: entity.card_id,
            time: entity.time,
        })
    }
}

/// Result of a paid roll.
#[derive(Debug, Clone, PartialEq)]
pub struct RollOutcome {
    pub card: Card,
    pub rarity: RaritySetting,
    /// First copy of this card for the user.
    pub is_new: bool,
    /// Rarity was forced by pity rather than drawn.
    pub forced: bool,
    /// Shards credited for a duplicate; 0 for a new card.
    pub dupe_shards: i64,
    /// Balance after cost and payout.
    pub balance: i64,
}
