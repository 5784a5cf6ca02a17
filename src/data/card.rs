//! Card repository.
//!
//! Cards are never deleted. Removing a card from the roster marks it unlisted so that
//! inventories and roll history keep resolving to a name and rarity.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::card::Card;

/// Repository providing database operations for roster cards.
pub struct CardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardRepository<'a, C> {
    /// Creates a new CardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every stored card, listed or not, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::GachaCard::find()
            .order_by_asc(entity::gacha_card::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    /// Gets cards that can currently be rolled, ordered by id.
    pub async fn get_listed(&self) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::GachaCard::find()
            .filter(entity::gacha_card::Column::Unlisted.eq(false))
            .order_by_asc(entity::gacha_card::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    /// Finds a card by id, including unlisted cards.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - Card found
    /// - `Ok(None)` - No card with that id was ever stored
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, card_id: &str) -> Result<Option<Card>, DbErr> {
        let entity = entity::prelude::GachaCard::find_by_id(card_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Card::from_entity))
    }

    /// Gets the stored cards among `card_ids`. Unknown ids are ignored.
    pub async fn find_by_ids(&self, card_ids: &[String]) -> Result<Vec<Card>, DbErr> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::GachaCard::find()
            .filter(entity::gacha_card::Column::Id.is_in(card_ids.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    /// Inserts or updates cards, relisting any that were unlisted.
    pub async fn upsert_many(&self, cards: Vec<Card>) -> Result<(), DbErr> {
        for card in cards {
            let card = Card {
                unlisted: false,
                ..card
            };

            entity::prelude::GachaCard::insert(card.into_active_model())
                .on_conflict(
                    OnConflict::column(entity::gacha_card::Column::Id)
                        .update_columns([
                            entity::gacha_card::Column::Name,
                            entity::gacha_card::Column::Rarity,
                            entity::gacha_card::Column::CardType,
                            entity::gacha_card::Column::Series,
                            entity::gacha_card::Column::Image,
                            entity::gacha_card::Column::Unlisted,
                        ])
                        .to_owned(),
                )
                .exec(self.db)
                .await?;
        }

        Ok(())
    }

    /// Marks every listed card whose id is not in `keep` as unlisted.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cards newly unlisted
    /// - `Err(DbErr)` - Database error during update
    pub async fn unlist_missing(&self, keep: &[String]) -> Result<u64, DbErr> {
        let result = entity::prelude::GachaCard::update_many()
            .col_expr(entity::gacha_card::Column::Unlisted, Expr::value(true))
            .filter(entity::gacha_card::Column::Unlisted.eq(false))
            .filter(entity::gacha_card::Column::Id.is_not_in(keep.iter().cloned()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
