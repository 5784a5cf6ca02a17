//! Inventory repository.
//!
//! One row per `(user, card)` holding the copy count and the first acquisition time.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use crate::{error::AppError, model::inventory::InventoryEntry};

/// Repository providing database operations for card ownership.
pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new InventoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    async fn find_entity(
        &self,
        user_id: u64,
        card_id: &str,
    ) -> Result<Option<entity::gacha_inventory::Model>, AppError> {
        Ok(entity::prelude::GachaInventory::find()
            .filter(entity::gacha_inventory::Column::UserId.eq(user_id.to_string()))
            .filter(entity::gacha_inventory::Column::CardId.eq(card_id))
            .one(self.db)
            .await?)
    }

    /// Finds a user's entry for one card.
    ///
    /// # Returns
    /// - `Ok(Some(InventoryEntry))` - The user owns the card
    /// - `Ok(None)` - The user never obtained the card
    /// - `Err(AppError)` - Database error or unparsable stored id
    pub async fn find(
        &self,
        user_id: u64,
        card_id: &str,
    ) -> Result<Option<InventoryEntry>, AppError> {
        self.find_entity(user_id, card_id)
            .await?
            .map(InventoryEntry::from_entity)
            .transpose()
    }

    /// Records one more copy of a card.
    ///
    /// Creates the entry with `count = 1` and `first_acquired = now` if absent,
    /// otherwise increments `count` and leaves `first_acquired` unchanged.
    ///
    /// # Returns
    /// - `Ok((InventoryEntry, true))` - First copy of the card
    /// - `Ok((InventoryEntry, false))` - Duplicate copy
    /// - `Err(AppError)` - Database error
    pub async fn add_copy(
        &self,
        user_id: u64,
        card_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(InventoryEntry, bool), AppError> {
        let (entity, is_new) = match self.find_entity(user_id, card_id).await? {
            Some(existing) => {
                let count = existing.count + 1;
                let mut active: entity::gacha_inventory::ActiveModel = existing.into();
                active.count = ActiveValue::Set(count);
                (active.update(self.db).await?, false)
            }
            None => {
                let entity = entity::gacha_inventory::ActiveModel {
                    id: ActiveValue::NotSet,
                    user_id: ActiveValue::Set(user_id.to_string()),
                    card_id: ActiveValue::Set(card_id.to_string()),
                    count: ActiveValue::Set(1),
                    first_acquired: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await?;
                (entity, true)
            }
        };

        Ok((InventoryEntry::from_entity(entity)?, is_new))
    }

    /// Gets every entry of a user, unordered.
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<InventoryEntry>, AppError> {
        entity::prelude::GachaInventory::find()
            .filter(entity::gacha_inventory::Column::UserId.eq(user_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .map(InventoryEntry::from_entity)
            .collect()
    }

    /// Gets every entry of every user.
    pub async fn get_all(&self) -> Result<Vec<InventoryEntry>, AppError> {
        entity::prelude::GachaInventory::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(InventoryEntry::from_entity)
            .collect()
    }

    /// Counts distinct owners of a card.
    pub async fn count_owners(&self, card_id: &str) -> Result<u64, AppError> {
        Ok(entity::prelude::GachaInventory::find()
            .filter(entity::gacha_inventory::Column::CardId.eq(card_id))
            .count(self.db)
            .await?)
    }
}
