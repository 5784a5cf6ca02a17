use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GachaRarity::Table)
                    .if_not_exists()
                    .col(integer(GachaRarity::Rarity).primary_key())
                    .col(double(GachaRarity::Rate))
                    .col(big_integer(GachaRarity::DupeShards).default(0))
                    .col(integer(GachaRarity::Color))
                    .col(string(GachaRarity::Stars))
                    .col(integer_null(GachaRarity::Pity))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GachaRarity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GachaRarity {
    Table,
    Rarity,
    Rate,
    DupeShards,
    Color,
    Stars,
    Pity,
}
