//! Shard ledger repository.
//!
//! Append-only. Each row records one balance mutation and its reason, so the sum of a
//! user's deltas always equals their stored balance.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::currency::{ShardLedgerEntry, ShardReason},
};

pub struct ShardLedgerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShardLedgerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one balance mutation.
    ///
    /// # Arguments
    /// - `user_id` - Account whose balance changed
    /// - `delta` - Signed change in shards
    /// - `reason` - Source of the change
    /// - `time` - When the change happened
    pub async fn append(
        &self,
        user_id: u64,
        delta: i64,
        reason: ShardReason,
        time: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::gacha_shard_ledger::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id.to_string()),
            delta: ActiveValue::Set(delta),
            reason: ActiveValue::Set(reason.as_str().to_string()),
            time: ActiveValue::Set(time),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets a user's ledger in insertion order.
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<ShardLedgerEntry>, AppError> {
        entity::prelude::GachaShardLedger::find()
            .filter(entity::gacha_shard_ledger::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::gacha_shard_ledger::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ShardLedgerEntry::from_entity)
            .collect()
    }
}
