//! Pity counter factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a pity counter row for `(user_id, rarity)` with the given count.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID as string
/// - `rarity` - Rarity tier the counter tracks
/// - `count` - Consecutive misses to store
///
/// # Returns
/// - `Ok(entity::gacha_pity::Model)` - Created counter
/// - `Err(DbErr)` - Database error during insert
pub async fn create_pity(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    rarity: i32,
    count: i64,
) -> Result<entity::gacha_pity::Model, DbErr> {
    entity::gacha_pity::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id.into()),
        rarity: ActiveValue::Set(rarity),
        count: ActiveValue::Set(count),
    }
    .insert(db)
    .await
}
