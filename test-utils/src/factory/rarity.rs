//! Rarity setting factory for creating test roster tiers.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rarity settings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::rarity::RarityFactory;
///
/// let rare = RarityFactory::new(&db, 3)
///     .rate(0.05)
///     .pity(Some(10))
///     .build()
///     .await?;
/// ```
pub struct RarityFactory<'a> {
    db: &'a DatabaseConnection,
    rarity: i32,
    rate: f64,
    dupe_shards: i64,
    pity: Option<i32>,
}

impl<'a> RarityFactory<'a> {
    /// Creates a new RarityFactory with default values.
    ///
    /// Defaults:
    /// - rate: `1.0`
    /// - dupe_shards: `0`
    /// - pity: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `rarity` - Rarity tier value, which is also the primary key
    pub fn new(db: &'a DatabaseConnection, rarity: i32) -> Self {
        Self {
            db,
            rarity,
            rate: 1.0,
            dupe_shards: 0,
            pity: None,
        }
    }

    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn dupe_shards(mut self, dupe_shards: i64) -> Self {
        self.dupe_shards = dupe_shards;
        self
    }

    pub fn pity(mut self, pity: Option<i32>) -> Self {
        self.pity = pity;
        self
    }

    /// Builds and inserts the rarity setting into the database.
    ///
    /// # Returns
    /// - `Ok(entity::gacha_rarity::Model)` - Created rarity setting
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::gacha_rarity::Model, DbErr> {
        entity::gacha_rarity::ActiveModel {
            rarity: ActiveValue::Set(self.rarity),
            rate: ActiveValue::Set(self.rate),
            dupe_shards: ActiveValue::Set(self.dupe_shards),
            color: ActiveValue::Set(0x0000ff),
            stars: ActiveValue::Set("★".repeat(self.rarity.max(0) as usize)),
            pity: ActiveValue::Set(self.pity),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rarity setting with default values.
///
/// Shorthand for `RarityFactory::new(db, rarity).build().await`.
pub async fn create_rarity(
    db: &DatabaseConnection,
    rarity: i32,
) -> Result<entity::gacha_rarity::Model, DbErr> {
    RarityFactory::new(db, rarity).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_rarity_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(GachaRarity).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let rarity = create_rarity(db, 3).await?;

        assert_eq!(rarity.rarity, 3);
        assert_eq!(rarity.stars, "★★★");
        assert!(rarity.pity.is_none());

        Ok(())
    }
}
