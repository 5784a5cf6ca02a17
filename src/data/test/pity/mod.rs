use std::collections::BTreeMap;

use crate::{data::pity::PityRepository, error::AppError};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod save_for_user;
