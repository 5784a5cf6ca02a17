//! Versioned roster snapshots.
//!
//! A `Roster` is immutable once built. Reloads build a new one and swap it into the
//! `RosterStore`, so every roll sees exactly one roster from start to finish.

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::{
    error::gacha::GachaError,
    gacha::rate::{NormalizedDistribution, RateTable},
    model::{card::Card, rarity::RaritySetting},
};

/// Rarity settings and rollable cards at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    version: u64,
    settings: BTreeMap<i32, RaritySetting>,
    cards_by_rarity: BTreeMap<i32, Vec<Card>>,
    card_count: usize,
    distribution: Option<NormalizedDistribution>,
}

impl Roster {
    /// A roster with no tiers and no cards. Every roll fails with `EmptyRoster`.
    pub fn empty() -> Self {
        Self {
            version: 0,
            settings: BTreeMap::new(),
            cards_by_rarity: BTreeMap::new(),
            card_count: 0,
            distribution: None,
        }
    }

    /// Validates and indexes a roster.
    ///
    /// Unlisted cards are dropped. Version is 0 until the roster is installed.
    ///
    /// # Returns
    /// - `Ok(Roster)` - Validated roster with its distribution resolved
    /// - `Err(GachaError::Configuration)` - No listed cards, duplicate rarity or card id,
    ///   a card referencing an unknown rarity, or unusable rates
    pub fn new(settings: Vec<RaritySetting>, cards: Vec<Card>) -> Result<Self, GachaError> {
        let distribution = RateTable::resolve(&settings)?;

        let settings: BTreeMap<i32, RaritySetting> =
            settings.into_iter().map(|s| (s.rarity, s)).collect();

        let mut seen = HashSet::new();
        let mut cards_by_rarity: BTreeMap<i32, Vec<Card>> = BTreeMap::new();
        let mut card_count = 0;

        for card in cards.into_iter().filter(|card| !card.unlisted) {
            if !seen.insert(card.id.clone()) {
                return Err(GachaError::Configuration(format!(
                    "card id '{}' appears more than once",
                    card.id
                )));
            }
            if !settings.contains_key(&card.rarity) {
                return Err(GachaError::Configuration(format!(
                    "card '{}' has unknown rarity {}",
                    card.id, card.rarity
                )));
            }
            card_count += 1;
            cards_by_rarity.entry(card.rarity).or_default().push(card);
        }

        if card_count == 0 {
            return Err(GachaError::Configuration(
                "roster contains no cards".to_string(),
            ));
        }

        // Stable card order within a tier keeps seeded rolls reproducible
        for cards in cards_by_rarity.values_mut() {
            cards.sort_by(|a, b| a.id.cmp(&b.id));
        }

        Ok(Self {
            version: 0,
            settings,
            cards_by_rarity,
            card_count,
            distribution: Some(distribution),
        })
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.card_count == 0
    }

    /// Number of rollable cards.
    pub fn len(&self) -> usize {
        self.card_count
    }

    /// Rarity settings in ascending rarity order.
    pub fn settings(&self) -> impl Iterator<Item = &RaritySetting> {
        self.settings.values()
    }

    pub fn setting(&self, rarity: i32) -> Option<&RaritySetting> {
        self.settings.get(&rarity)
    }

    /// Listed cards of one tier, ordered by id.
    pub fn cards_of(&self, rarity: i32) -> &[Card] {
        self.cards_by_rarity
            .get(&rarity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards_by_rarity
            .values()
            .flatten()
            .find(|card| card.id == card_id)
    }

    /// All listed cards, ascending by rarity then id.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards_by_rarity.values().flatten()
    }

    /// Roll distribution of this roster.
    ///
    /// # Returns
    /// - `Err(GachaError::EmptyRoster)` - The roster is empty
    pub fn distribution(&self) -> Result<&NormalizedDistribution, GachaError> {
        self.distribution.as_ref().ok_or(GachaError::EmptyRoster)
    }
}

/// Shared handle to the current roster snapshot.
///
/// Readers clone the inner `Arc` and keep using it even if a reload swaps the snapshot
/// mid-operation.
#[derive(Clone)]
pub struct RosterStore {
    current: Arc<RwLock<Arc<Roster>>>,
    writer: Arc<Mutex<()>>,
}

impl RosterStore {
    /// Creates a store holding `roster` as version 1.
    pub fn new(mut roster: Roster) -> Self {
        roster.version = 1;
        Self {
            current: Arc::new(RwLock::new(Arc::new(roster))),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Current snapshot.
    pub async fn snapshot(&self) -> Arc<Roster> {
        self.current.read().await.clone()
    }

    /// Serializes reloads so that persisting and installing a roster happen in the
    /// same order for concurrent reloads. Readers are never blocked by it.
    pub async fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    /// Replaces the snapshot, assigning the next version.
    ///
    /// # Returns
    /// - `Arc<Roster>` - The installed snapshot
    pub async fn install(&self, mut roster: Roster) -> Arc<Roster> {
        let mut current = self.current.write().await;
        roster.version = current.version + 1;
        let roster = Arc::new(roster);
        *current = roster.clone();
        roster
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new(Roster::empty())
    }
}
