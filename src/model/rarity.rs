//! Rarity tier configuration.

/// Default embed colour for tiers without a configured colour.
pub const DEFAULT_RARITY_COLOR: u32 = 0x0000ff;

/// Configuration of one rarity tier.
///
/// Higher `rarity` values are rarer. `rate` is a relative weight; the rate table
/// normalizes weights across all tiers when the roster is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct RaritySetting {
    pub rarity: i32,
    pub rate: f64,
    /// Shards credited when a roll yields a card the user already owns.
    pub dupe_shards: i64,
    pub color: u32,
    pub stars: String,
    /// Rolls guaranteeing this tier or higher, if pity applies to it.
    pub pity: Option<u32>,
}

impl RaritySetting {
    /// Creates a tier with default display data, no dupe payout and no pity.
    pub fn new(rarity: i32, rate: f64) -> Self {
        Self {
            rarity,
            rate,
            dupe_shards: 0,
            color: DEFAULT_RARITY_COLOR,
            stars: "★".repeat(rarity.max(0) as usize),
            pity: None,
        }
    }

    #[cfg(test)]
    pub fn with_pity(mut self, pity: u32) -> Self {
        self.pity = Some(pity);
        self
    }

    #[cfg(test)]
    pub fn with_dupe_shards(mut self, dupe_shards: i64) -> Self {
        self.dupe_shards = dupe_shards;
        self
    }

    /// Converts an entity model to a rarity setting at the repository boundary.
    ///
    /// Non-positive stored pity values are treated as no pity.
    pub fn from_entity(entity: entity::gacha_rarity::Model) -> Self {
        Self {
            rarity: entity.rarity,
            rate: entity.rate,
            dupe_shards: entity.dupe_shards,
            color: entity.color as u32,
            stars: entity.stars,
            pity: entity.pity.filter(|p| *p > 0).map(|p| p as u32),
        }
    }

    pub fn into_active_model(self) -> entity::gacha_rarity::ActiveModel {
        use sea_orm::ActiveValue;

        entity::gacha_rarity::ActiveModel {
            rarity: ActiveValue::Set(self.rarity),
            rate: ActiveValue::Set(self.rate),
            dupe_shards: ActiveValue::Set(self.dupe_shards),
            color: ActiveValue::Set(self.color as i32),
            stars: ActiveValue::Set(self.stars),
            pity: ActiveValue::Set(self.pity.map(|p| p as i32)),
        }
    }
}

/// A tier as shown in the rates listing.
#[derive(Debug, Clone, PartialEq)]
pub struct RarityRate {
    pub setting: RaritySetting,
    /// Normalized roll probability in `[0, 1]`.
    pub probability: f64,
    /// Listed cards of this tier.
    pub cards: usize,
}
