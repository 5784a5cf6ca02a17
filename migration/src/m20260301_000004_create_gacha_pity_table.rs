use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GachaPity::Table)
                    .if_not_exists()
                    .col(pk_auto(GachaPity::Id))
                    .col(string(GachaPity::UserId))
                    .col(integer(GachaPity::Rarity))
                    .col(big_integer(GachaPity::Count).default(0))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_gacha_pity_user_rarity")
                            .col(GachaPity::UserId)
                            .col(GachaPity::Rarity),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GachaPity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GachaPity {
    Table,
    Id,
    UserId,
    Rarity,
    Count,
}
