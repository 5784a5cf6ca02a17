pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_gacha_rarity_table;
mod m20260301_000002_create_gacha_card_table;
mod m20260301_000003_create_gacha_currency_table;
mod m20260301_000004_create_gacha_pity_table;
mod m20260301_000005_create_gacha_inventory_table;
mod m20260301_000006_create_gacha_roll_table;
mod m20260301_000007_create_gacha_shard_ledger_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_gacha_rarity_table::Migration),
            Box::new(m20260301_000002_create_gacha_card_table::Migration),
            Box::new(m20260301_000003_create_gacha_currency_table::Migration),
            Box::new(m20260301_000004_create_gacha_pity_table::Migration),
            Box::new(m20260301_000005_create_gacha_inventory_table::Migration),
            Box::new(m20260301_000006_create_gacha_roll_table::Migration),
            Box::new(m20260301_000007_create_gacha_shard_ledger_table::Migration),
        ]
    }
}
