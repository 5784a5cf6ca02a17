//! Currency account factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating currency accounts with customizable fields.
///
/// The factory writes the account row only. Tests asserting ledger attribution should
/// fund accounts through the service layer instead.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::currency::CurrencyFactory;
///
/// let account = CurrencyFactory::new(&db)
///     .user_id("123456789")
///     .amount(500)
///     .build()
///     .await?;
/// ```
pub struct CurrencyFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    amount: i64,
    last_daily: Option<DateTime<Utc>>,
    first_daily: Option<DateTime<Utc>>,
}

impl<'a> CurrencyFactory<'a> {
    /// Creates a new CurrencyFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented numeric string
    /// - amount: `0`
    /// - last_daily / first_daily: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            amount: 0,
            last_daily: None,
            first_daily: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Marks the account as having claimed a daily bonus at `at`.
    ///
    /// Sets both `last_daily` and `first_daily`.
    pub fn claimed_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_daily = Some(at);
        self.first_daily = Some(at);
        self
    }

    /// Builds and inserts the currency account into the database.
    ///
    /// # Returns
    /// - `Ok(entity::gacha_currency::Model)` - Created account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::gacha_currency::Model, DbErr> {
        entity::gacha_currency::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            amount: ActiveValue::Set(self.amount),
            last_daily: ActiveValue::Set(self.last_daily),
            first_daily: ActiveValue::Set(self.first_daily),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a currency account holding `amount` shards for a fresh user id.
pub async fn create_currency(
    db: &DatabaseConnection,
    amount: i64,
) -> Result<entity::gacha_currency::Model, DbErr> {
    CurrencyFactory::new(db).amount(amount).build().await
}
