//! Card factory for creating test roster cards.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::new(&db, 2)
///     .id("mitsuki")
///     .series("Originals")
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    rarity: i32,
    series: String,
    unlisted: bool,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with default values.
    ///
    /// Defaults:
    /// - id: `"card_{id}"` where id is auto-incremented
    /// - name: `"Card {id}"`
    /// - series: `"Series"`
    /// - unlisted: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `rarity` - Rarity tier of the card
    pub fn new(db: &'a DatabaseConnection, rarity: i32) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("card_{}", id),
            name: format!("Card {}", id),
            rarity,
            series: "Series".to_string(),
            unlisted: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = series.into();
        self
    }

    pub fn unlisted(mut self, unlisted: bool) -> Self {
        self.unlisted = unlisted;
        self
    }

    /// Builds and inserts the card into the database.
    ///
    /// # Returns
    /// - `Ok(entity::gacha_card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::gacha_card::Model, DbErr> {
        entity::gacha_card::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            rarity: ActiveValue::Set(self.rarity),
            card_type: ActiveValue::Set("Character".to_string()),
            series: ActiveValue::Set(self.series),
            image: ActiveValue::Set(None),
            unlisted: ActiveValue::Set(self.unlisted),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listed card of the given rarity with default values.
pub async fn create_card(
    db: &DatabaseConnection,
    rarity: i32,
) -> Result<entity::gacha_card::Model, DbErr> {
    CardFactory::new(db, rarity).build().await
}
