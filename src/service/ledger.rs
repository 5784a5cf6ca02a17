//! Shard balances, daily claims, transfers and duplicate payouts.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::{
    data::{currency::CurrencyRepository, shard_ledger::ShardLedgerRepository},
    error::{gacha::GachaError, AppError},
    model::{
        currency::{ClaimOutcome, CurrencyAccount, ShardReason, TransferOutcome},
        rarity::RaritySetting,
    },
    state::AppState,
};

/// Adds `delta` to a user's balance and records why.
///
/// Runs on whatever connection it is given; callers pass their open transaction.
///
/// # Returns
/// - `Ok(CurrencyAccount)` - Account after the change
/// - `Err(GachaError::InsufficientFunds)` - The change would make the balance negative
/// - `Err(AppError)` - Database error
pub(crate) async fn apply_delta<C: ConnectionTrait>(
    conn: &C,
    user_id: u64,
    delta: i64,
    reason: ShardReason,
    now: DateTime<Utc>,
) -> Result<CurrencyAccount, AppError> {
    let repo = CurrencyRepository::new(conn);
    let mut account = repo.get_or_empty(user_id).await?;

    let balance = account
        .balance
        .checked_add(delta)
        .ok_or(GachaError::InvalidAmount(delta))?;
    if balance < 0 {
        return Err(GachaError::InsufficientFunds {
            balance: account.balance,
            required: -delta,
        }
        .into());
    }

    account.balance = balance;
    repo.save(&account).await?;
    ShardLedgerRepository::new(conn)
        .append(user_id, delta, reason, now)
        .await?;

    Ok(account)
}

pub struct LedgerService<'a> {
    state: &'a AppState,
}

impl<'a> LedgerService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Current balance of a user; 0 if they never held shards.
    pub async fn balance(&self, user_id: u64) -> Result<i64, AppError> {
        Ok(CurrencyRepository::new(&self.state.db)
            .get_or_empty(user_id)
            .await?
            .balance)
    }

    /// Claims the daily bonus.
    ///
    /// A user may claim once per reset window. The amount follows the configured
    /// bonus policy. Claiming twice in one window is not an error: the outcome has
    /// `granted == false` and nothing is written.
    ///
    /// # Arguments
    /// - `user_id` - Claiming user
    /// - `now` - Claim time
    /// - `is_premium` - The claim is made by a booster of a premium guild
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome)` - Granted or refused claim with the next reset boundary
    /// - `Err(GachaError::Concurrency)` - User lock not acquired in time
    /// - `Err(AppError)` - Database error
    pub async fn claim_daily(
        &self,
        user_id: u64,
        now: DateTime<Utc>,
        is_premium: bool,
    ) -> Result<ClaimOutcome, AppError> {
        let _guard = self.state.locks.lock(user_id).await?;
        let settings = self.state.settings.snapshot().await;

        let txn = self.state.db.begin().await?;
        let repo = CurrencyRepository::new(&txn);
        let account = repo.get_or_empty(user_id).await?;
        let next_claim_at = settings.daily_reset.next_boundary(now);

        if !settings.daily_reset.is_eligible(account.last_daily, now) {
            tracing::debug!("User {} already claimed this daily window", user_id);

            return Ok(ClaimOutcome {
                granted: false,
                amount: 0,
                bonus_kind: None,
                next_claim_at,
                balance: account.balance,
            });
        }

        let (amount, bonus_kind) = settings.daily_amount(account.first_daily.is_none(), is_premium);
        let account = repo.record_daily(user_id, amount, now).await?;
        ShardLedgerRepository::new(&txn)
            .append(user_id, amount, ShardReason::Daily, now)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} claimed {} daily shards ({:?})", user_id, amount, bonus_kind);

        Ok(ClaimOutcome {
            granted: true,
            amount,
            bonus_kind: Some(bonus_kind),
            next_claim_at,
            balance: account.balance,
        })
    }

    /// Moves shards from one user to another.
    ///
    /// Both users are locked in ascending id order and both balances change in one
    /// transaction, so a failed transfer leaves both untouched.
    ///
    /// # Returns
    /// - `Ok(TransferOutcome)` - Balances of both users afterwards
    /// - `Err(GachaError::InvalidAmount)` - `amount` is below 1
    /// - `Err(GachaError::InvalidTarget)` - Sender and recipient are the same user
    /// - `Err(GachaError::InsufficientFunds)` - Sender balance is below `amount`
    /// - `Err(GachaError::Concurrency)` - Locks not acquired in time
    pub async fn transfer(
        &self,
        from_user_id: u64,
        to_user_id: u64,
        amount: i64,
        now: DateTime<Utc>,
    ) -> Result<TransferOutcome, AppError> {
        if amount < 1 {
            return Err(GachaError::InvalidAmount(amount).into());
        }
        if from_user_id == to_user_id {
            return Err(GachaError::InvalidTarget.into());
        }

        let _guard = self.state.locks.lock_pair(from_user_id, to_user_id).await?;

        let txn = self.state.db.begin().await?;
        let from = apply_delta(&txn, from_user_id, -amount, ShardReason::Transfer, now).await?;
        let to = apply_delta(&txn, to_user_id, amount, ShardReason::Transfer, now).await?;
        txn.commit().await?;

        tracing::info!(
            "User {} gave {} shards to user {}",
            from_user_id,
            amount,
            to_user_id
        );

        Ok(TransferOutcome {
            amount,
            from_balance: from.balance,
            to_balance: to.balance,
        })
    }

    /// Credits the duplicate payout of a tier.
    ///
    /// Rolls credit duplicates inside their own transaction; this is the standalone
    /// form for callers outside a roll.
    ///
    /// # Returns
    /// - `Ok(i64)` - Shards credited
    /// - `Err(GachaError::Configuration)` - The tier is not in the current roster
    /// - `Err(GachaError::Concurrency)` - User lock not acquired in time
    pub async fn apply_dupe_payout(
        &self,
        user_id: u64,
        rarity: i32,
        now: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let roster = self.state.roster.snapshot().await;
        let amount = dupe_payout(roster.setting(rarity), rarity)?;

        let _guard = self.state.locks.lock(user_id).await?;

        if amount > 0 {
            let txn = self.state.db.begin().await?;
            apply_delta(&txn, user_id, amount, ShardReason::Dupe, now).await?;
            txn.commit().await?;
        }

        Ok(amount)
    }
}

/// Duplicate payout of a tier, never negative.
pub(crate) fn dupe_payout(
    setting: Option<&RaritySetting>,
    rarity: i32,
) -> Result<i64, GachaError> {
    setting
        .map(|setting| setting.dupe_shards.max(0))
        .ok_or_else(|| GachaError::Configuration(format!("rarity {} is not configured", rarity)))
}
