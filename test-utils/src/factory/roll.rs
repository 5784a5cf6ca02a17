//! Roll history factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Appends a roll record for `user_id` obtaining `card_id` at `time`.
///
/// # Returns
/// - `Ok(entity::gacha_roll::Model)` - Created record with its assigned id
/// - `Err(DbErr)` - Database error during insert
pub async fn create_roll(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    card_id: impl Into<String>,
    time: DateTime<Utc>,
) -> Result<entity::gacha_roll::Model, DbErr> {
    entity::gacha_roll::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id.into()),
        card_id: ActiveValue::Set(card_id.into()),
        time: ActiveValue::Set(time),
    }
    .insert(db)
    .await
}
