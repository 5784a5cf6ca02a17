//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let account = factory::create_currency(&db, 500).await?;
//!     let (rarities, cards) = factory::helpers::create_two_tier_roster(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `rarity` - Create rarity settings
//! - `card` - Create roster cards
//! - `currency` - Create shard accounts
//! - `inventory` - Create inventory entries
//! - `pity` - Create pity counters
//! - `roll` - Append roll history
//! - `helpers` - ID generation and a ready-made two-tier roster

pub mod card;
pub mod currency;
pub mod helpers;
pub mod inventory;
pub mod pity;
pub mod rarity;
pub mod roll;

pub use card::create_card;
pub use currency::create_currency;
pub use inventory::create_inventory;
pub use pity::create_pity;
pub use rarity::create_rarity;
pub use roll::create_roll;
