use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GachaShardLedger::Table)
                    .if_not_exists()
                    .col(pk_auto(GachaShardLedger::Id))
                    .col(string(GachaShardLedger::UserId))
                    .col(big_integer(GachaShardLedger::Delta))
                    .col(string(GachaShardLedger::Reason))
                    .col(timestamp(GachaShardLedger::Time))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GachaShardLedger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GachaShardLedger {
    Table,
    Id,
    UserId,
    Delta,
    Reason,
    Time,
}
