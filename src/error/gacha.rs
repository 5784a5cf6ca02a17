use thiserror::Error;

/// Gacha rule violations and roster misconfiguration.
///
/// `Configuration`, `EmptyRoster` and `EmptyRarity` are operator defects; the rest are
/// caused by user input or contention and are reported to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GachaError {
    /// Rarity settings or roster content cannot be used.
    #[error("Gacha configuration error: {0}")]
    Configuration(String),

    /// No cards are loaded.
    #[error("The card roster is empty")]
    EmptyRoster,

    /// The resolved rarity has no listed cards.
    #[error("No cards available for rarity {0}")]
    EmptyRarity(i32),

    #[error("Not enough shards: you have {balance} but need {required}")]
    InsufficientFunds { balance: i64, required: i64 },

    #[error("Invalid amount {0}: must be at least 1")]
    InvalidAmount(i64),

    #[error("You cannot give shards to yourself")]
    InvalidTarget,

    /// Per-user lock could not be acquired in time. Safe to retry.
    #[error("Application busy, try again later")]
    Concurrency,
}

impl GachaError {
    /// Whether the error should be shown to the user rather than logged as a defect.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InsufficientFunds { .. }
                | Self::InvalidAmount(_)
                | Self::InvalidTarget
                | Self::Concurrency
        )
    }

    /// Whether the same request may succeed if repeated later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Concurrency)
    }
}
