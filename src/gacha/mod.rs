//! Pure gacha rules.
//!
//! Nothing in this module touches the database. Services load the per-user state, run
//! the rules here against an immutable roster snapshot and persist the result.

pub mod daily;
pub mod loader;
pub mod pity;
pub mod random;
pub mod rate;
pub mod roll;
pub mod roster;
pub mod settings;
