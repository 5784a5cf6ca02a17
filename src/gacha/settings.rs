//! Live economy settings.
//!
//! Like the roster, settings are swapped whole on reload. Operations take one
//! snapshot at their start and use it throughout.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::settings::GachaSettings;

/// Shared handle to the current economy settings.
#[derive(Clone, Default)]
pub struct SettingsStore {
    current: Arc<RwLock<Arc<GachaSettings>>>,
}

impl SettingsStore {
    pub fn new(settings: GachaSettings) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(settings))),
        }
    }

    /// Current settings.
    pub async fn snapshot(&self) -> Arc<GachaSettings> {
        self.current.read().await.clone()
    }

    /// Replaces the settings.
    ///
    /// # Returns
    /// - `bool` - Whether the new settings differ from the previous ones
    pub async fn install(&self, settings: GachaSettings) -> bool {
        let mut current = self.current.write().await;
        let changed = **current != settings;
        *current = Arc::new(settings);
        changed
    }
}
