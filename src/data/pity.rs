//! Pity counter repository.
//!
//! One row per `(user, rarity)`, created the first time a counter is written.

use std::collections::BTreeMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct PityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all stored counters of a user keyed by rarity.
    ///
    /// # Returns
    /// - `Ok(BTreeMap<i32, i64>)` - Stored counters; missing rarities are zero
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_user(&self, user_id: u64) -> Result<BTreeMap<i32, i64>, DbErr> {
        let entities = entity::prelude::GachaPity::find()
            .filter(entity::gacha_pity::Column::UserId.eq(user_id.to_string()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| (entity.rarity, entity.count))
            .collect())
    }

    /// Writes every counter in `counters` for a user.
    ///
    /// Existing rows are updated in place; missing rows are created. Rows for rarities
    /// absent from `counters` are left untouched.
    pub async fn save_for_user(
        &self,
        user_id: u64,
        counters: &BTreeMap<i32, i64>,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::GachaPity::find()
            .filter(entity::gacha_pity::Column::UserId.eq(user_id.to_string()))
            .all(self.db)
            .await?;

        for (&rarity, &count) in counters {
            match existing.iter().find(|row| row.rarity == rarity) {
                Some(row) if row.count == count => {}
                Some(row) => {
                    let mut active: entity::gacha_pity::ActiveModel = row.clone().into();
                    active.count = ActiveValue::Set(count);
                    active.update(self.db).await?;
                }
                None => {
                    entity::gacha_pity::ActiveModel {
                        id: ActiveValue::NotSet,
                        user_id: ActiveValue::Set(user_id.to_string()),
                        rarity: ActiveValue::Set(rarity),
                        count: ActiveValue::Set(count),
                    }
                    .insert(self.db)
                    .await?;
                }
            }
        }

        Ok(())
    }
}
