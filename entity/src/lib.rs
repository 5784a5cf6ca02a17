//! SeaORM entity models for the gacha tables.

pub mod prelude;

pub mod gacha_card;
pub mod gacha_currency;
pub mod gacha_inventory;
pub mod gacha_pity;
pub mod gacha_rarity;
pub mod gacha_roll;
pub mod gacha_shard_ledger;
