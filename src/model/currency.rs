//! Shard balance models and ledger outcomes.

use chrono::{DateTime, Utc};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// A user's shard balance and daily claim state.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyAccount {
    pub user_id: u64,
    pub balance: i64,
    pub last_daily: Option<DateTime<Utc>>,
    /// Set by the first daily claim and never changed afterwards.
    pub first_daily: Option<DateTime<Utc>>,
}

impl CurrencyAccount {
    /// An account that has never been written.
    pub fn empty(user_id: u64) -> Self {
        Self {
            user_id,
            balance: 0,
            last_daily: None,
            first_daily: None,
        }
    }

    /// Converts an entity model to an account at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(CurrencyAccount)` - The converted account
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user id is not numeric
    pub fn from_entity(entity: entity::gacha_currency::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            balance: entity.amount,
            last_daily: entity.last_daily,
            first_daily: entity.first_daily,
        })
    }
}

/// Source of a balance mutation. Every shard movement has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardReason {
    Daily,
    Roll,
    Dupe,
    Transfer,
}

impl ShardReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Roll => "roll",
            Self::Dupe => "dupe",
            Self::Transfer => "transfer",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "daily" => Ok(Self::Daily),
            "roll" => Ok(Self::Roll),
            "dupe" => Ok(Self::Dupe),
            "transfer" => Ok(Self::Transfer),
            other => Err(InternalError::UnknownShardReason(other.to_string())),
        }
    }
}

/// One audited balance mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShardLedgerEntry {
    pub id: i32,
    pub user_id: u64,
    pub delta: i64,
    pub reason: ShardReason,
    pub time: DateTime<Utc>,
}

impl ShardLedgerEntry {
    pub fn from_entity(entity: entity::gacha_shard_ledger::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            delta: entity.delta,
            reason: ShardReason::parse(&entity.reason)?,
            time: entity.time,
        })
    }
}

/// Which bonus a granted daily claim paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyBonusKind {
    Standard,
    Premium,
    FirstTime,
    /// First-time and premium amounts were added together.
    FirstTimePremium,
}

/// Result of a daily claim. Not granting is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimOutcome {
    pub granted: bool,
    /// Shards credited; 0 when not granted.
    pub amount: i64,
    /// `None` when not granted.
    pub bonus_kind: Option<DailyBonusKind>,
    /// Next reset boundary after the claim attempt.
    pub next_claim_at: DateTime<Utc>,
    pub balance: i64,
}

/// Balances of both parties after a transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    pub amount: i64,
    pub from_balance: i64,
    pub to_balance: i64,
}
