//! Database repository layer for the gacha tables.
//!
//! Repositories perform CRUD over SeaORM entities and convert rows into domain models at
//! this boundary. Every repository is generic over `ConnectionTrait`, so services can run
//! the same queries on the pool or inside a `DatabaseTransaction`.

pub mod card;
pub mod currency;
pub mod inventory;
pub mod pity;
pub mod rarity;
pub mod roll;
pub mod shard_ledger;

#[cfg(test)]
mod test;
