mod card;
mod currency;
mod inventory;
mod pity;
mod rarity;
mod roll;
mod shard_ledger;
