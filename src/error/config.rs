use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check the `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Daily reset time is not in `HH:MM±HHMM` form.
    #[error("Invalid daily reset time '{0}', expected HH:MM+HHMM")]
    InvalidResetTime(String),

    /// A shard amount in the settings file is below zero.
    #[error("Settings value {key} must not be negative, got {value}")]
    NegativeAmount { key: String, value: i64 },
}
