//! Error types for the gacha bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and infrastructure
//! failures. The Discord layer decides how each variant is reported to the invoking user.

pub mod config;
pub mod gacha;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, gacha::GachaError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Gacha rule violation or roster misconfiguration.
    ///
    /// User-facing variants are reported verbatim to the invoking user.
    #[error(transparent)]
    GachaErr(#[from] GachaError),

    /// Unexpected internal state such as an unparsable stored id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Settings or roster YAML failed to parse.
    #[error(transparent)]
    YamlErr(#[from] serde_yaml::Error),

    /// Settings or roster file could not be read.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// The invoking user may not run the command.
    #[error("{0}")]
    Forbidden(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message shown to the Discord user who triggered the failing operation.
    ///
    /// Rule violations and lookups are shown as-is. Configuration defects and
    /// infrastructure failures are logged and replaced by a generic message.
    ///
    /// # Returns
    /// - `String` - Text safe to display in a reply
    pub fn user_message(&self) -> String {
        match self {
            Self::GachaErr(err) if err.is_user_facing() => err.to_string(),
            Self::NotFound(msg) | Self::Forbidden(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                "Something went wrong, please contact the bot operator".to_string()
            }
        }
    }
}
