use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GachaCurrency::Table)
                    .if_not_exists()
                    .col(string(GachaCurrency::UserId).primary_key())
                    .col(big_integer(GachaCurrency::Amount).default(0))
                    .col(timestamp_null(GachaCurrency::LastDaily))
                    .col(timestamp_null(GachaCurrency::FirstDaily))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GachaCurrency::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GachaCurrency {
    Table,
    UserId,
    Amount,
    LastDaily,
    FirstDaily,
}
