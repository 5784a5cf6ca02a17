//! Roll history repository.
//!
//! The log is append-only; ids increase with every roll, so ordering by id is ordering
//! by time even when two rolls share a timestamp.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{error::AppError, model::roll::RollRecord};

pub struct RollRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RollRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a roll to the log.
    ///
    /// # Returns
    /// - `Ok(RollRecord)` - The stored record with its assigned id
    /// - `Err(AppError)` - Database error during insert
    pub async fn append(
        &self,
        user_id: u64,
        card_id: &str,
        time: DateTime<Utc>,
    ) -> Result<RollRecord, AppError> {
        let entity = entity::gacha_roll::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id.to_string()),
            card_id: ActiveValue::Set(card_id.to_string()),
            time: ActiveValue::Set(time),
        }
        .insert(self.db)
        .await?;

        RollRecord::from_entity(entity)
    }

    /// Counts how many times a card was rolled by anyone.
    pub async fn count_by_card(&self, card_id: &str) -> Result<u64, AppError> {
        Ok(entity::prelude::GachaRoll::find()
            .filter(entity::gacha_roll::Column::CardId.eq(card_id))
            .count(self.db)
            .await?)
    }

    /// Earliest roll of a card.
    pub async fn first_by_card(&self, card_id: &str) -> Result<Option<RollRecord>, AppError> {
        entity::prelude::GachaRoll::find()
            .filter(entity::gacha_roll::Column::CardId.eq(card_id))
            .order_by_asc(entity::gacha_roll::Column::Id)
            .one(self.db)
            .await?
            .map(RollRecord::from_entity)
            .transpose()
    }

    /// Latest roll of a card.
    pub async fn last_by_card(&self, card_id: &str) -> Result<Option<RollRecord>, AppError> {
        entity::prelude::GachaRoll::find()
            .filter(entity::gacha_roll::Column::CardId.eq(card_id))
            .order_by_desc(entity::gacha_roll::Column::Id)
            .one(self.db)
            .await?
            .map(RollRecord::from_entity)
            .transpose()
    }

    /// Gets the whole log in order.
    pub async fn get_all(&self) -> Result<Vec<RollRecord>, AppError> {
        entity::prelude::GachaRoll::find()
            .order_by_asc(entity::gacha_roll::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(RollRecord::from_entity)
            .collect()
    }

    /// Gets every roll of a user in log order.
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<RollRecord>, AppError> {
        entity::prelude::GachaRoll::find()
            .filter(entity::gacha_roll::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::gacha_roll::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(RollRecord::from_entity)
            .collect()
    }
}
