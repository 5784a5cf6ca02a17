//! Rarity setting repository.

use migration::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::rarity::RaritySetting;

/// Repository providing database operations for rarity tiers.
pub struct RarityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RarityRepository<'a, C> {
    /// Creates a new RarityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all rarity tiers in ascending rarity order.
    pub async fn get_all(&self) -> Result<Vec<RaritySetting>, DbErr> {
        let entities = entity::prelude::GachaRarity::find()
            .order_by_asc(entity::gacha_rarity::Column::Rarity)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(RaritySetting::from_entity)
            .collect())
    }

    /// Replaces the stored tiers with `settings`.
    ///
    /// Tiers absent from `settings` are deleted, the rest are inserted or updated.
    ///
    /// # Returns
    /// - `Ok(())` - Stored tiers now match `settings`
    /// - `Err(DbErr)` - Database error during delete or upsert
    pub async fn replace_all(&self, settings: &[RaritySetting]) -> Result<(), DbErr> {
        let keep: Vec<i32> = settings.iter().map(|s| s.rarity).collect();

        entity::prelude::GachaRarity::delete_many()
            .filter(entity::gacha_rarity::Column::Rarity.is_not_in(keep))
            .exec(self.db)
            .await?;

        for setting in settings {
            entity::prelude::GachaRarity::insert(setting.clone().into_active_model())
                .on_conflict(
                    OnConflict::column(entity::gacha_rarity::Column::Rarity)
                        .update_columns([
                            entity::gacha_rarity::Column::Rate,
                            entity::gacha_rarity::Column::DupeShards,
                            entity::gacha_rarity::Column::Color,
                            entity::gacha_rarity::Column::Stars,
                            entity::gacha_rarity::Column::Pity,
                        ])
                        .to_owned(),
                )
                .exec(self.db)
                .await?;
        }

        Ok(())
    }
}
