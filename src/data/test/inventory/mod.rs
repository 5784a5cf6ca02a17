use crate::{data::inventory::InventoryRepository, error::AppError};
use chrono::{TimeDelta, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod add_copy;
mod count_owners;
mod get_all;
