use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SETTINGS_PATH: &str = "data/gacha/settings.yaml";
const DEFAULT_ROSTER_PATH: &str = "data/gacha/roster.yaml";
const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5000;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub settings_path: String,
    pub roster_path: String,

    /// Longest wait for a per-user lock before failing with a retryable error.
    pub lock_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let lock_timeout_ms = match std::env::var("LOCK_TIMEOUT_MS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "LOCK_TIMEOUT_MS".to_string(),
                    reason: e.to_string(),
                })?,
            Err(_) => DEFAULT_LOCK_TIMEOUT_MS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            settings_path: std::env::var("GACHA_SETTINGS_PATH")
                .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string()),
            roster_path: std::env::var("GACHA_ROSTER_PATH")
                .unwrap_or_else(|_| DEFAULT_ROSTER_PATH.to_string()),
            lock_timeout: Duration::from_millis(lock_timeout_ms),
        })
    }
}
