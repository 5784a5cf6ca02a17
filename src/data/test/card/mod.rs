use crate::{data::card::CardRepository, error::AppError, model::card::Card};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_listed;
mod unlist_missing;
mod upsert_many;
