use crate::{data::roll::RollRepository, error::AppError};
use chrono::{TimeDelta, Utc};
use test_utils::{builder::TestBuilder, factory};

mod append;
mod first_by_card;
mod get_all;
