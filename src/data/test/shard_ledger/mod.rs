use crate::{
    data::shard_ledger::ShardLedgerRepository,
    error::AppError,
    model::currency::ShardReason,
};
use chrono::Utc;
use test_utils::builder::TestBuilder;

mod append;
