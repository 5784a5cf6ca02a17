use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GachaInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(GachaInventory::Id))
                    .col(string(GachaInventory::UserId))
                    .col(string(GachaInventory::CardId))
                    .col(big_integer(GachaInventory::Count).default(1))
                    .col(timestamp(GachaInventory::FirstAcquired))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_gacha_inventory_user_card")
                            .col(GachaInventory::UserId)
                            .col(GachaInventory::CardId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GachaInventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GachaInventory {
    Table,
    Id,
    UserId,
    CardId,
    Count,
    FirstAcquired,
}
