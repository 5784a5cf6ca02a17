//! Per-user pity counters and forced-rarity decisions.

use std::collections::BTreeMap;

use crate::model::rarity::RaritySetting;

/// Pity state of one user: consecutive rolls without each tier, keyed by rarity.
///
/// Counters missing from the map are zero. Loaded from storage before a roll and
/// written back afterwards inside the same transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct PityTracker {
    user_id: u64,
    counters: BTreeMap<i32, i64>,
}

impl PityTracker {
    pub fn new(user_id: u64, counters: BTreeMap<i32, i64>) -> Self {
        Self { user_id, counters }
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn count(&self, rarity: i32) -> i64 {
        self.counters.get(&rarity).copied().unwrap_or(0)
    }

    pub fn counters(&self) -> &BTreeMap<i32, i64> {
        &self.counters
    }

    /// Whether the next roll must yield `setting.rarity` or higher.
    ///
    /// True iff the tier has a threshold `t` and the user has missed it `t - 1` times in
    /// a row. A threshold of 1 therefore forces the tier on every roll.
    pub fn should_force(&self, setting: &RaritySetting) -> bool {
        match setting.pity {
            Some(threshold) => self.count(setting.rarity) >= i64::from(threshold) - 1,
            None => false,
        }
    }

    /// Highest tier currently forced by pity, if any.
    pub fn forced_rarity<'s>(
        &self,
        settings: impl IntoIterator<Item = &'s RaritySetting>,
    ) -> Option<i32> {
        settings
            .into_iter()
            .filter(|setting| self.should_force(setting))
            .map(|setting| setting.rarity)
            .max()
    }

    /// Updates every configured tier after a roll resolved `resolved`.
    ///
    /// Tiers at or below the resolved rarity reset to 0; tiers above it count one
    /// more miss.
    pub fn observe<'s>(
        &mut self,
        settings: impl IntoIterator<Item = &'s RaritySetting>,
        resolved: i32,
    ) {
        for setting in settings {
            let counter = self.counters.entry(setting.rarity).or_insert(0);
            if setting.rarity <= resolved {
                *counter = 0;
            } else {
                *counter += 1;
            }
        }
    }
}
