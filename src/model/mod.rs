//! Domain models and operation outcomes.
//!
//! Models are converted from entity models at the repository boundary, so services and
//! the Discord layer never see stringly-typed ids or raw database rows.

pub mod card;
pub mod currency;
pub mod inventory;
pub mod profile;
pub mod rarity;
pub mod roll;
pub mod settings;
