//! Inventory domain models.

use chrono::{DateTime, Utc};

use crate::{error::AppError, model::card::Card, util::parse::parse_u64_from_string};

/// A user's holding of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub user_id: u64,
    pub card_id: String,
    pub count: i64,
    /// Set on the first acquisition, never changed afterwards.
    pub first_acquired: DateTime<Utc>,
}

impl InventoryEntry {
    pub fn from_entity(entity: entity::gacha_inventory::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            card_id: entity.card_id,
            count: entity.count,
            first_acquired: entity.first_acquired,
        })
    }
}

/// Orderings for the inventory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventorySort {
    /// Newest first acquisition first.
    #[default]
    Date,
    /// Most copies first.
    Count,
    /// Rarest first.
    Rarity,
    Alpha,
    Series,
    Id,
}

impl InventorySort {
    pub const ALL: [InventorySort; 6] = [
        Self::Date,
        Self::Count,
        Self::Rarity,
        Self::Alpha,
        Self::Series,
        Self::Id,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Count => "count",
            Self::Rarity => "rarity",
            Self::Alpha => "alpha",
            Self::Series => "series",
            Self::Id => "id",
        }
    }

    /// Parses a sort name, falling back to `Date` for unknown input.
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .unwrap_or_default()
    }
}

/// Parameters for listing a user's cards.
#[derive(Debug, Clone)]
pub struct GetInventoryParam {
    pub user_id: u64,
    pub sort: InventorySort,
    /// Zero-based page index.
    pub page: u64,
    pub per_page: u64,
}

/// An owned card joined with its inventory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedCard {
    pub card: Card,
    pub entry: InventoryEntry,
}

/// Paginated inventory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryPage {
    pub cards: Vec<OwnedCard>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
