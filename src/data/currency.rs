//! Currency account repository.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::{error::AppError, model::currency::CurrencyAccount};

/// Repository providing database operations for shard balances and daily claim state.
pub struct CurrencyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CurrencyRepository<'a, C> {
    /// Creates a new CurrencyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the account of a user.
    ///
    /// # Returns
    /// - `Ok(Some(CurrencyAccount))` - Account exists
    /// - `Ok(None)` - User never held shards
    /// - `Err(AppError)` - Database error or unparsable stored id
    pub async fn find_by_user(&self, user_id: u64) -> Result<Option<CurrencyAccount>, AppError> {
        let entity = entity::prelude::GachaCurrency::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(CurrencyAccount::from_entity).transpose()
    }

    /// Gets the account of a user, or an empty account if none is stored.
    pub async fn get_or_empty(&self, user_id: u64) -> Result<CurrencyAccount, AppError> {
        Ok(self
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| CurrencyAccount::empty(user_id)))
    }

    /// Writes the full account state, creating the row if needed.
    ///
    /// # Returns
    /// - `Ok(())` - Account stored
    /// - `Err(AppError)` - Database error during upsert
    pub async fn save(&self, account: &CurrencyAccount) -> Result<(), AppError> {
        entity::prelude::GachaCurrency::insert(entity::gacha_currency::ActiveModel {
            user_id: ActiveValue::Set(account.user_id.to_string()),
            amount: ActiveValue::Set(account.balance),
            last_daily: ActiveValue::Set(account.last_daily),
            first_daily: ActiveValue::Set(account.first_daily),
        })
        .on_conflict(
            OnConflict::column(entity::gacha_currency::Column::UserId)
                .update_columns([
                    entity::gacha_currency::Column::Amount,
                    entity::gacha_currency::Column::LastDaily,
                    entity::gacha_currency::Column::FirstDaily,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Stores a daily claim: credits `amount` and stamps the claim timestamps.
    ///
    /// `first_daily` is only set if it was empty.
    ///
    /// # Returns
    /// - `Ok(CurrencyAccount)` - Account after the claim
    /// - `Err(AppError)` - Database error
    pub async fn record_daily(
        &self,
        user_id: u64,
        amount: i64,
        now: DateTime<Utc>,
    ) -> Result<CurrencyAccount, AppError> {
        let mut account = self.get_or_empty(user_id).await?;
        account.balance += amount;
        account.last_daily = Some(now);
        account.first_daily.get_or_insert(now);

        self.save(&account).await?;

        Ok(account)
    }
}
