use sea_orm::entity::prelude::*;

/// Per-rarity roll weight, duplicate payout, display data and pity threshold.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gacha_rarity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rarity: i32,
    pub rate: f64,
    pub dupe_shards: i64,
    pub color: i32,
    pub stars: String,
    pub pity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
