//! Application state shared across all command handlers.
//!
//! The state is initialized once during startup and cloned into the Discord event
//! handler. Every field is cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `RosterStore`, `SettingsStore` and `UserLocks` share their inner state through `Arc`

use sea_orm::DatabaseConnection;

use crate::{
    gacha::{roster::RosterStore, settings::SettingsStore},
    model::settings::GachaSettings,
    service::lock::UserLocks,
};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Current roster snapshot, swapped atomically by an admin reload.
    pub roster: RosterStore,

    /// Per-user mutation locks serializing rolls, claims and transfers.
    pub locks: UserLocks,

    /// Shard economy, swapped together with the roster by an admin reload.
    pub settings: SettingsStore,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `roster` - Roster store holding the startup snapshot
    /// - `locks` - Per-user lock registry
    /// - `settings` - Startup shard economy settings
    pub fn new(
        db: DatabaseConnection,
        roster: RosterStore,
        locks: UserLocks,
        settings: GachaSettings,
    ) -> Self {
        Self {
            db,
            roster,
            locks,
            settings: SettingsStore::new(settings),
        }
    }
}
