//! Card domain models.

use chrono::{DateTime, Utc};

use crate::model::{inventory::InventoryEntry, rarity::RaritySetting};

/// A collectible card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub rarity: i32,
    pub card_type: String,
    pub series: String,
    pub image: Option<String>,
    /// Removed from the roster. Still viewable and owned, never rolled.
    pub unlisted: bool,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rarity: i32,
        card_type: impl Into<String>,
        series: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity,
            card_type: card_type.into(),
            series: series.into(),
            image: None,
            unlisted: false,
        }
    }

    pub fn from_entity(entity: entity::gacha_card::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            rarity: entity.rarity,
            card_type: entity.card_type,
            series: entity.series,
            image: entity.image,
            unlisted: entity.unlisted,
        }
    }

    pub fn into_active_model(self) -> entity::gacha_card::ActiveModel {
        use sea_orm::ActiveValue;

        entity::gacha_card::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            rarity: ActiveValue::Set(self.rarity),
            card_type: ActiveValue::Set(self.card_type),
            series: ActiveValue::Set(self.series),
            image: ActiveValue::Set(self.image),
            unlisted: ActiveValue::Set(self.unlisted),
        }
    }
}

/// A user who obtained a card, and when.
#[derive(Debug, Clone, PartialEq)]
pub struct Acquirer {
    pub user_id: u64,
    pub time: DateTime<Utc>,
}

/// Card details with global statistics and the viewer's own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub card: Card,
    /// Display data of the card's tier. `None` when the tier was removed by a reload.
    pub rarity: Option<RaritySetting>,
    /// The viewer's inventory entry, if they own the card.
    pub owned: Option<InventoryEntry>,
    pub total_rolled: u64,
    pub owners: u64,
    pub first_acquirer: Option<Acquirer>,
    pub last_acquirer: Option<Acquirer>,
}

/// Global statistics of one stored card, listed or not.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStats {
    pub card: Card,
    pub rarity: Option<RaritySetting>,
    /// Copies obtained by all users.
    pub rolled: u64,
    pub owners: u64,
    pub first_acquirer: Option<Acquirer>,
    pub last_acquirer: Option<Acquirer>,
}

/// Orderings for the full card listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStatsSort {
    /// Rarest first, then by name.
    #[default]
    Rarity,
    Alpha,
    /// By type, series, rarity and id.
    Series,
    Id,
}

impl CardStatsSort {
    pub const ALL: [CardStatsSort; 4] = [Self::Rarity, Self::Alpha, Self::Series, Self::Id];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rarity => "rarity",
            Self::Alpha => "alpha",
            Self::Series => "series",
            Self::Id => "id",
        }
    }

    /// Parses a sort name, falling back to `Rarity` for unknown input.
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .unwrap_or_default()
    }
}

/// Parameters for listing every card.
#[derive(Debug, Clone)]
pub struct GetCardStatsParam {
    pub sort: CardStatsSort,
    /// Zero-based page index.
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardStatsPage {
    pub cards: Vec<CardStats>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}
