pub use super::gacha_card::Entity as GachaCard;
pub use super::gacha_currency::Entity as GachaCurrency;
pub use super::gacha_inventory::Entity as GachaInventory;
pub use super::gacha_pity::Entity as GachaPity;
pub use super::gacha_rarity::Entity as GachaRarity;
pub use super::gacha_roll::Entity as GachaRoll;
pub use super::gacha_shard_ledger::Entity as GachaShardLedger;
