//! Per-user gacha summary.

use crate::model::currency::CurrencyAccount;

/// Pity progress towards one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct PityStatus {
    pub rarity: i32,
    pub count: i64,
    pub threshold: u32,
}

/// Collection progress within one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct RarityStats {
    pub rarity: i32,
    pub stars: String,
    /// Distinct cards of this tier the user owns.
    pub owned: u64,
    /// Listed cards of this tier in the current roster.
    pub available: u64,
    /// Rolls that yielded a card of this tier.
    pub rolled: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub account: CurrencyAccount,
    pub pity: Vec<PityStatus>,
    pub rarities: Vec<RarityStats>,
    pub total_rolls: u64,
}
