//! Paid rolls.

use chrono::{DateTime, Utc};
use sea_orm::TransactionTrait;

use crate::{
    data::{inventory::InventoryRepository, pity::PityRepository, roll::RollRepository},
    error::{gacha::GachaError, AppError},
    gacha::{pity::PityTracker, random::RollSource, roll::RollEngine},
    model::{currency::ShardReason, roll::RollOutcome},
    service::ledger::{apply_delta, dupe_payout},
    state::AppState,
};

pub struct RollService<'a> {
    state: &'a AppState,
}

impl<'a> RollService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Performs one paid roll.
    ///
    /// Holds the user's lock and one roster and settings snapshot for the whole roll. The cost
    /// debit, pity update, inventory upsert, roll log append and duplicate payout are
    /// written in a single transaction; any error drops it uncommitted, leaving the
    /// user's state as it was.
    ///
    /// # Arguments
    /// - `user_id` - Rolling user
    /// - `now` - Roll time recorded in inventory and history
    /// - `source` - Randomness for the tier draw and card pick
    ///
    /// # Returns
    /// - `Ok(RollOutcome)` - Obtained card, whether it is new, and the new balance
    /// - `Err(GachaError::EmptyRoster)` - No cards loaded
    /// - `Err(GachaError::InsufficientFunds)` - Balance below the roll cost
    /// - `Err(GachaError::EmptyRarity)` - The resolved tier has no cards
    /// - `Err(GachaError::Concurrency)` - User lock not acquired in time
    pub async fn roll(
        &self,
        user_id: u64,
        now: DateTime<Utc>,
        source: &mut impl RollSource,
    ) -> Result<RollOutcome, AppError> {
        let _guard = self.state.locks.lock(user_id).await?;

        let roster = self.state.roster.snapshot().await;
        let settings = self.state.settings.snapshot().await;
        if roster.is_empty() {
            return Err(GachaError::EmptyRoster.into());
        }

        let txn = self.state.db.begin().await?;

        let account = apply_delta(
            &txn,
            user_id,
            -settings.cost,
            ShardReason::Roll,
            now,
        )
        .await?;

        let pity_repo = PityRepository::new(&txn);
        let mut pity = PityTracker::new(user_id, pity_repo.get_for_user(user_id).await?);
        let outcome = RollEngine::new(&roster).roll(&mut pity, source)?;
        pity_repo.save_for_user(user_id, pity.counters()).await?;

        let rarity = roster
            .setting(outcome.rarity)
            .cloned()
            .ok_or_else(|| {
                GachaError::Configuration(format!("rarity {} is not configured", outcome.rarity))
            })?;

        let (_, is_new) = InventoryRepository::new(&txn)
            .add_copy(user_id, &outcome.card.id, now)
            .await?;
        RollRepository::new(&txn)
            .append(user_id, &outcome.card.id, now)
            .await?;

        let dupe_shards = if is_new {
            0
        } else {
            dupe_payout(Some(&rarity), rarity.rarity)?
        };
        let balance = if dupe_shards > 0 {
            apply_delta(&txn, user_id, dupe_shards, ShardReason::Dupe, now)
                .await?
                .balance
        } else {
            account.balance
        };

        txn.commit().await?;

        tracing::debug!(
            "User {} rolled {} (rarity {}, forced: {}, new: {}) on roster v{}",
            user_id,
            outcome.card.id,
            outcome.rarity,
            outcome.forced,
            is_new,
            roster.version()
        );

        Ok(RollOutcome {
            card: outcome.card,
            rarity,
            is_new,
            forced: outcome.forced,
            dupe_shards,
            balance,
        })
    }
}
