//! Inventory entry factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating inventory entries with customizable fields.
pub struct InventoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    card_id: String,
    count: i64,
    first_acquired: DateTime<Utc>,
}

impl<'a> InventoryFactory<'a> {
    /// Creates a new InventoryFactory owning one copy acquired now.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner Discord ID as string
    /// - `card_id` - Owned card ID
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        card_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            card_id: card_id.into(),
            count: 1,
            first_acquired: Utc::now(),
        }
    }

    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn first_acquired(mut self, first_acquired: DateTime<Utc>) -> Self {
        self.first_acquired = first_acquired;
        self
    }

    pub async fn build(self) -> Result<entity::gacha_inventory::Model, DbErr> {
        entity::gacha_inventory::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            card_id: ActiveValue::Set(self.card_id),
            count: ActiveValue::Set(self.count),
            first_acquired: ActiveValue::Set(self.first_acquired),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inventory entry holding one copy of `card_id`.
pub async fn create_inventory(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    card_id: impl Into<String>,
) -> Result<entity::gacha_inventory::Model, DbErr> {
    InventoryFactory::new(db, user_id, card_id).build().await
}
