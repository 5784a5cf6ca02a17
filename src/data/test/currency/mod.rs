use crate::{data::currency::CurrencyRepository, error::AppError, model::currency::CurrencyAccount};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod record_daily;
mod save;
