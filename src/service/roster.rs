//! Roster reloads and startup loading.

use sea_orm::TransactionTrait;

use crate::{
    data::{card::CardRepository, rarity::RarityRepository},
    error::AppError,
    gacha::{loader::LoadedRoster, roster::Roster},
    model::{card::Card, rarity::RaritySetting},
    state::AppState,
};

pub struct RosterService<'a> {
    state: &'a AppState,
}

impl<'a> RosterService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Replaces the roster.
    ///
    /// The new roster is validated before anything is written. Tiers and cards are
    /// then stored in one transaction; stored cards missing from `cards` are unlisted
    /// rather than deleted. The in-memory snapshot is swapped only after the commit,
    /// so rolls in flight finish on the previous roster.
    ///
    /// # Arguments
    /// - `rarities` - Complete set of rarity tiers
    /// - `cards` - Complete set of rollable cards
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of rollable cards in the installed roster
    /// - `Err(GachaError::Configuration)` - The roster is empty or inconsistent
    /// - `Err(AppError)` - Database error; the previous roster stays installed
    pub async fn reload(
        &self,
        rarities: Vec<RaritySetting>,
        cards: Vec<Card>,
    ) -> Result<usize, AppError> {
        let _writer = self.state.roster.lock_writer().await;

        self.replace_roster(rarities, cards).await
    }

    /// Replaces the roster and the economy settings read from the gacha files.
    ///
    /// Settings are installed only once the roster is stored, so a rejected roster
    /// leaves both the previous roster and the previous settings in place.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of rollable cards in the installed roster
    /// - `Err(GachaError::Configuration)` - The roster is empty or inconsistent
    /// - `Err(AppError)` - Database error
    pub async fn reload_from(&self, loaded: LoadedRoster) -> Result<usize, AppError> {
        let LoadedRoster {
            settings,
            rarities,
            cards,
        } = loaded;

        let _writer = self.state.roster.lock_writer().await;

        let count = self.replace_roster(rarities, cards).await?;
        if self.state.settings.install(settings).await {
            tracing::info!("Installed updated economy settings");
        }

        Ok(count)
    }

    /// Stores and installs a roster. The caller holds the roster writer lock.
    async fn replace_roster(
        &self,
        rarities: Vec<RaritySetting>,
        cards: Vec<Card>,
    ) -> Result<usize, AppError> {
        let roster = Roster::new(rarities.clone(), cards)?;
        let listed: Vec<Card> = roster.cards().cloned().collect();
        let keep: Vec<String> = listed.iter().map(|card| card.id.clone()).collect();

        let txn = self.state.db.begin().await?;
        RarityRepository::new(&txn).replace_all(&rarities).await?;
        let card_repo = CardRepository::new(&txn);
        card_repo.upsert_many(listed).await?;
        let unlisted = card_repo.unlist_missing(&keep).await?;
        txn.commit().await?;

        let installed = self.state.roster.install(roster).await;

        tracing::info!(
            "Installed roster v{} with {} cards across {} rarities ({} cards unlisted)",
            installed.version(),
            installed.len(),
            rarities.len(),
            unlisted
        );

        Ok(installed.len())
    }

    /// Installs the roster stored in the database.
    ///
    /// Leaves the current snapshot untouched when nothing is stored.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of rollable cards installed
    /// - `Err(GachaError::Configuration)` - Stored roster is inconsistent
    /// - `Err(AppError)` - Database error
    pub async fn load_stored(&self) -> Result<usize, AppError> {
        let rarities = RarityRepository::new(&self.state.db).get_all().await?;
        let cards = CardRepository::new(&self.state.db).get_listed().await?;

        if rarities.is_empty() || cards.is_empty() {
            tracing::warn!("No stored roster found, rolls are unavailable until a reload");
            return Ok(0);
        }

        let _writer = self.state.roster.lock_writer().await;
        let installed = self.state.roster.install(Roster::new(rarities, cards)?).await;

        tracing::info!(
            "Installed stored roster v{} with {} cards",
            installed.version(),
            installed.len()
        );

        Ok(installed.len())
    }
}
