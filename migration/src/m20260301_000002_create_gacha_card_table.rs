use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GachaCard::Table)
                    .if_not_exists()
                    .col(string(GachaCard::Id).primary_key())
                    .col(string(GachaCard::Name))
                    .col(integer(GachaCard::Rarity))
                    .col(string(GachaCard::CardType))
                    .col(string(GachaCard::Series))
                    .col(string_null(GachaCard::Image))
                    .col(boolean(GachaCard::Unlisted).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gacha_card_rarity")
                    .table(GachaCard::Table)
                    .col(GachaCard::Rarity)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_gacha_card_rarity")
                    .table(GachaCard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GachaCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GachaCard {
    Table,
    Id,
    Name,
    Rarity,
    CardType,
    Series,
    Image,
    Unlisted,
}
