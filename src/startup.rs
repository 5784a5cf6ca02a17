use crate::{
    config::Config,
    error::AppError,
    gacha::loader::{load_roster_file, load_settings_file, LoadedSettings},
    model::{card::Card, rarity::RaritySetting},
    service::roster::RosterService,
    state::AppState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Reads the economy settings file.
///
/// Settings are not stored in the database, so there is nothing to fall back to and
/// startup fails if they cannot be used.
///
/// # Returns
/// - `Ok(LoadedSettings)` - Economy settings and rarity tiers
/// - `Err(AppError)` - The file is missing, malformed or holds negative amounts
pub async fn read_settings(config: &Config) -> Result<LoadedSettings, AppError> {
    load_settings_file(&config.settings_path)
        .await
        .inspect_err(|e| {
            tracing::error!(
                "Failed to load gacha settings from {}: {}",
                config.settings_path,
                e
            )
        })
}

/// Reads the roster file.
///
/// A missing or broken roster file is not fatal: the bot then runs with the roster
/// stored by the last successful reload.
///
/// # Returns
/// - `Some(Vec<Card>)` - The file was read and parsed
/// - `None` - Loading failed; the reason is logged
pub async fn read_roster(config: &Config, rarities: &[RaritySetting]) -> Option<Vec<Card>> {
    match load_roster_file(&config.roster_path, rarities).await {
        Ok(cards) => Some(cards),
        Err(e) => {
            tracing::warn!(
                "Failed to load roster from {}, using stored roster: {}",
                config.roster_path,
                e
            );
            None
        }
    }
}

/// Installs the startup roster.
///
/// Prefers the roster read from disk; falls back to the stored roster when none was
/// read or the one read is inconsistent.
///
/// # Returns
/// - `Ok(usize)` - Number of rollable cards installed
/// - `Err(AppError)` - Database error, or the stored roster is inconsistent
pub async fn install_roster(
    state: &AppState,
    rarities: Vec<RaritySetting>,
    cards: Option<Vec<Card>>,
) -> Result<usize, AppError> {
    let service = RosterService::new(state);

    if let Some(cards) = cards {
        match service.reload(rarities, cards).await {
            Ok(count) => return Ok(count),
            Err(AppError::GachaErr(e)) => {
                tracing::error!("Roster files are invalid, using stored roster: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    service.load_stored().await
}
