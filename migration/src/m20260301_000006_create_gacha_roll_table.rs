use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GachaRoll::Table)
                    .if_not_exists()
                    .col(pk_auto(GachaRoll::Id))
                    .col(string(GachaRoll::UserId))
                    .col(string(GachaRoll::CardId))
                    .col(timestamp(GachaRoll::Time))
                    .to_owned(),
            )
            .await?;

        // Card statistics scan the log by card
        manager
            .create_index(
                Index::create()
                    .name("idx_gacha_roll_card_id")
                    .table(GachaRoll::Table)
                    .col(GachaRoll::CardId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_gacha_roll_card_id")
                    .table(GachaRoll::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GachaRoll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GachaRoll {
    Table,
    Id,
    UserId,
    CardId,
    Time,
}
