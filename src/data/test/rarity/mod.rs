use crate::{data::rarity::RarityRepository, error::AppError, model::rarity::RaritySetting};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod replace_all;
