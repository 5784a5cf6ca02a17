//! Read models: card details, inventories, profiles and rates.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{
    data::{
        card::CardRepository, currency::CurrencyRepository, inventory::InventoryRepository,
        pity::PityRepository, roll::RollRepository,
    },
    error::AppError,
    model::{
        card::{Acquirer, Card, CardStats, CardStatsPage, CardStatsSort, CardView, GetCardStatsParam},
        inventory::{GetInventoryParam, InventoryPage, InventorySort, OwnedCard},
        profile::{PityStatus, Profile, RarityStats},
        rarity::RarityRate,
        roll::RollRecord,
    },
    state::AppState,
};

pub struct CardService<'a> {
    state: &'a AppState,
}

impl<'a> CardService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Finds a card by id, or by exact name ignoring case.
    ///
    /// Listed cards are searched first; unlisted cards are still found by id.
    async fn find_card(&self, query: &str) -> Result<Option<Card>, AppError> {
        let roster = self.state.roster.snapshot().await;

        if let Some(card) = roster.card(query) {
            return Ok(Some(card.clone()));
        }
        if let Some(card) = roster
            .cards()
            .find(|card| card.name.eq_ignore_ascii_case(query.trim()))
        {
            return Ok(Some(card.clone()));
        }

        Ok(CardRepository::new(&self.state.db).find_by_id(query).await?)
    }

    /// Gets card details with global statistics and the viewer's own copy.
    ///
    /// # Arguments
    /// - `viewer_id` - User viewing the card
    /// - `query` - Card id or exact card name
    ///
    /// # Returns
    /// - `Ok(CardView)` - Card details
    /// - `Err(AppError::NotFound)` - No card matches `query`
    /// - `Err(AppError)` - Database error
    pub async fn view_card(&self, viewer_id: u64, query: &str) -> Result<CardView, AppError> {
        let card = self
            .find_card(query)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No card named '{}'", query)))?;

        let roster = self.state.roster.snapshot().await;
        let inventory_repo = InventoryRepository::new(&self.state.db);
        let roll_repo = RollRepository::new(&self.state.db);

        let acquirer = |record: RollRecord| Acquirer {
            user_id: record.user_id,
            time: record.time,
        };

        Ok(CardView {
            rarity: roster.setting(card.rarity).cloned(),
            owned: inventory_repo.find(viewer_id, &card.id).await?,
            total_rolled: roll_repo.count_by_card(&card.id).await?,
            owners: inventory_repo.count_owners(&card.id).await?,
            first_acquirer: roll_repo.first_by_card(&card.id).await?.map(acquirer),
            last_acquirer: roll_repo.last_by_card(&card.id).await?.map(acquirer),
            card,
        })
    }

    /// Gets one page of a user's cards.
    ///
    /// Pages are zero-based. A page past the end is empty; `total_pages` is at least 1.
    ///
    /// # Returns
    /// - `Ok(InventoryPage)` - Requested page and paging totals
    /// - `Err(AppError)` - Database error
    pub async fn inventory(&self, param: GetInventoryParam) -> Result<InventoryPage, AppError> {
        let entries = InventoryRepository::new(&self.state.db)
            .get_by_user(param.user_id)
            .await?;
        let card_ids: Vec<String> = entries.iter().map(|e| e.card_id.clone()).collect();
        let cards: HashMap<String, Card> = CardRepository::new(&self.state.db)
            .find_by_ids(&card_ids)
            .await?
            .into_iter()
            .map(|card| (card.id.clone(), card))
            .collect();

        let mut owned: Vec<OwnedCard> = entries
            .into_iter()
            .filter_map(|entry| match cards.get(&entry.card_id) {
                Some(card) => Some(OwnedCard {
                    card: card.clone(),
                    entry,
                }),
                None => {
                    tracing::warn!(
                        "User {} owns unknown card '{}'",
                        entry.user_id,
                        entry.card_id
                    );
                    None
                }
            })
            .collect();

        sort_owned(&mut owned, param.sort);

        let per_page = param.per_page.max(1);
        let total = owned.len() as u64;
        let total_pages = total.div_ceil(per_page).max(1);
        let cards = owned
            .into_iter()
            .skip((param.page.saturating_mul(per_page)) as usize)
            .take(per_page as usize)
            .collect();

        Ok(InventoryPage {
            cards,
            total,
            page: param.page,
            per_page,
            total_pages,
        })
    }

    /// Gets a user's balance, pity progress and per-tier collection stats.
    ///
    /// Tiers come from the current roster; counters of removed tiers are not shown.
    pub async fn profile(&self, user_id: u64) -> Result<Profile, AppError> {
        let roster = self.state.roster.snapshot().await;

        let account = CurrencyRepository::new(&self.state.db)
            .get_or_empty(user_id)
            .await?;
        let counters = PityRepository::new(&self.state.db)
            .get_for_user(user_id)
            .await?;
        let entries = InventoryRepository::new(&self.state.db)
            .get_by_user(user_id)
            .await?;
        let rolls = RollRepository::new(&self.state.db)
            .get_by_user(user_id)
            .await?;

        let mut card_ids: HashSet<String> = entries.iter().map(|e| e.card_id.clone()).collect();
        card_ids.extend(rolls.iter().map(|r| r.card_id.clone()));
        let card_ids: Vec<String> = card_ids.into_iter().collect();
        let rarity_of: HashMap<String, i32> = CardRepository::new(&self.state.db)
            .find_by_ids(&card_ids)
            .await?
            .into_iter()
            .map(|card| (card.id, card.rarity))
            .collect();

        let mut owned: BTreeMap<i32, u64> = BTreeMap::new();
        for entry in &entries {
            if let Some(rarity) = rarity_of.get(&entry.card_id) {
                *owned.entry(*rarity).or_default() += 1;
            }
        }
        let mut rolled: BTreeMap<i32, u64> = BTreeMap::new();
        for roll in &rolls {
            if let Some(rarity) = rarity_of.get(&roll.card_id) {
                *rolled.entry(*rarity).or_default() += 1;
            }
        }

        let pity = roster
            .settings()
            .filter_map(|setting| {
                setting.pity.map(|threshold| PityStatus {
                    rarity: setting.rarity,
                    count: counters.get(&setting.rarity).copied().unwrap_or(0),
                    threshold,
                })
            })
            .collect();

        let rarities = roster
            .settings()
            .map(|setting| RarityStats {
                rarity: setting.rarity,
                stars: setting.stars.clone(),
                owned: owned.get(&setting.rarity).copied().unwrap_or(0),
                available: roster.cards_of(setting.rarity).len() as u64,
                rolled: rolled.get(&setting.rarity).copied().unwrap_or(0),
            })
            .collect();

        Ok(Profile {
            account,
            pity,
            rarities,
            total_rolls: rolls.len() as u64,
        })
    }

    /// Gets one page of every stored card with global roll and owner statistics.
    ///
    /// Cards nobody obtained and cards unlisted by a reload are included. Pages are
    /// zero-based; `total_pages` is at least 1.
    ///
    /// # Returns
    /// - `Ok(CardStatsPage)` - Requested page and paging totals
    /// - `Err(AppError)` - Database error
    pub async fn card_stats(&self, param: GetCardStatsParam) -> Result<CardStatsPage, AppError> {
        let roster = self.state.roster.snapshot().await;
        let cards = CardRepository::new(&self.state.db).get_all().await?;
        let entries = InventoryRepository::new(&self.state.db).get_all().await?;
        let rolls = RollRepository::new(&self.state.db).get_all().await?;

        let mut holdings: HashMap<String, (u64, u64)> = HashMap::new();
        for entry in entries {
            let (owners, copies) = holdings.entry(entry.card_id).or_default();
            *owners += 1;
            *copies += entry.count.max(0) as u64;
        }

        let mut acquirers: HashMap<String, (Acquirer, Acquirer)> = HashMap::new();
        for roll in rolls {
            let acquirer = Acquirer {
                user_id: roll.user_id,
                time: roll.time,
            };
            match acquirers.get_mut(&roll.card_id) {
                Some((_, last)) => *last = acquirer,
                None => {
                    acquirers.insert(roll.card_id, (acquirer.clone(), acquirer));
                }
            }
        }

        let mut stats: Vec<CardStats> = cards
            .into_iter()
            .map(|card| {
                let (owners, rolled) = holdings.get(&card.id).copied().unwrap_or_default();
                let (first_acquirer, last_acquirer) = match acquirers.remove(&card.id) {
                    Some((first, last)) => (Some(first), Some(last)),
                    None => (None, None),
                };
                CardStats {
                    rarity: roster.setting(card.rarity).cloned(),
                    rolled,
                    owners,
                    first_acquirer,
                    last_acquirer,
                    card,
                }
            })
            .collect();

        sort_stats(&mut stats, param.sort);

        let per_page = param.per_page.max(1);
        let total = stats.len() as u64;
        let total_pages = total.div_ceil(per_page).max(1);
        let cards = stats
            .into_iter()
            .skip((param.page.saturating_mul(per_page)) as usize)
            .take(per_page as usize)
            .collect();

        Ok(CardStatsPage {
            cards,
            total,
            page: param.page,
            total_pages,
        })
    }

    /// Roll probabilities of the current roster, ascending by rarity.
    ///
    /// Empty when no roster is loaded.
    pub async fn rates(&self) -> Vec<RarityRate> {
        let roster = self.state.roster.snapshot().await;
        let Ok(distribution) = roster.distribution() else {
            return Vec::new();
        };

        roster
            .settings()
            .map(|setting| RarityRate {
                setting: setting.clone(),
                probability: distribution.probability(setting.rarity).unwrap_or(0.0),
                cards: roster.cards_of(setting.rarity).len(),
            })
            .collect()
    }
}

/// Orders owned cards; ties fall back to card id.
fn sort_owned(owned: &mut [OwnedCard], sort: InventorySort) {
    match sort {
        InventorySort::Date => owned.sort_by(|a, b| {
            b.entry
                .first_acquired
                .cmp(&a.entry.first_acquired)
                .then_with(|| a.card.id.cmp(&b.card.id))
        }),
        InventorySort::Count => owned.sort_by(|a, b| {
            b.entry
                .count
                .cmp(&a.entry.count)
                .then_with(|| a.card.id.cmp(&b.card.id))
        }),
        InventorySort::Rarity => owned.sort_by(|a, b| {
            b.card
                .rarity
                .cmp(&a.card.rarity)
                .then_with(|| a.card.id.cmp(&b.card.id))
        }),
        InventorySort::Alpha => owned.sort_by(|a, b| {
            a.card
                .name
                .to_lowercase()
                .cmp(&b.card.name.to_lowercase())
                .then_with(|| a.card.id.cmp(&b.card.id))
        }),
        InventorySort::Series => owned.sort_by(|a, b| {
            a.card
                .series
                .cmp(&b.card.series)
                .then_with(|| a.card.name.cmp(&b.card.name))
                .then_with(|| a.card.id.cmp(&b.card.id))
        }),
        InventorySort::Id => owned.sort_by(|a, b| a.card.id.cmp(&b.card.id)),
    }
}

/// Orders the full card listing; ties fall back to card id.
fn sort_stats(stats: &mut [CardStats], sort: CardStatsSort) {
    match sort {
        CardStatsSort::Rarity => stats.sort_by(|a, b| {
            b.card
                .rarity
                .cmp(&a.card.rarity)
                .then_with(|| a.card.name.to_lowercase().cmp(&b.card.name.to_lowercase()))
                .then_with(|| a.card.id.cmp(&b.card.id))
        }),
        CardStatsSort::Alpha => stats.sort_by(|a, b| {
            a.card
                .name
                .to_lowercase()
                .cmp(&b.card.name.to_lowercase())
                .then_with(|| a.card.id.cmp(&b.card.id))
        }),
        CardStatsSort::Series => stats.sort_by(|a, b| {
            a.card
                .card_type
                .cmp(&b.card.card_type)
                .then_with(|| a.card.series.cmp(&b.card.series))
                .then_with(|| a.card.rarity.cmp(&b.card.rarity))
                .then_with(|| a.card.id.cmp(&b.card.id))
        }),
        CardStatsSort::Id => stats.sort_by(|a, b| a.card.id.cmp(&b.card.id)),
    }
}
