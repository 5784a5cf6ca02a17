//! Service layer for gacha rules and orchestration.
//!
//! Services sit between the Discord command layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Applying roll, claim and transfer rules
//! - **Serialization**: Holding per-user locks for every mutation
//! - **Transaction Management**: Running each multi-entity mutation in one database
//!   transaction that is rolled back when dropped without commit
//! - **Domain Models**: Returning domain models rather than entity models

pub mod card;
pub mod ledger;
pub mod lock;
pub mod roll;
pub mod roster;

#[cfg(test)]
mod test;
