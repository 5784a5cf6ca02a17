//! Settings and roster YAML files.
//!
//! Settings carry the shard economy and the rarity tiers:
//!
//! ```yaml
//! cost: 100
//! currency_icon: "💎"
//! currency_name: Shards
//! daily_shards: 120
//! first_time_shards: 625
//! premium_daily_shards: 200
//! premium_guilds: [123456789012345678]
//! daily_reset: "00:00+0000"
//! rarities:
//!   - { value: 1, rate: 0.79, dupe_shards: 10 }
//!   - { value: 2, rate: 0.2, dupe_shards: 50, pity: 10, color: 0x00ff00 }
//! ```
//!
//! The roster maps card ids to cards:
//!
//! ```yaml
//! mitsuki:
//!   name: Mitsuki
//!   rarity: 2
//!   type: Character
//!   series: Originals
//!   image: https://example.com/mitsuki.png
//! ```

use std::{collections::BTreeMap, path::Path};

use serde::Deserialize;

use crate::{
    error::{config::ConfigError, AppError},
    gacha::daily::DailyReset,
    model::{
        card::Card,
        rarity::RaritySetting,
        settings::{DailyBonusPolicy, GachaSettings},
    },
};

#[derive(Debug, Deserialize)]
struct SettingsFile {
    cost: i64,
    #[serde(default)]
    currency_icon: String,
    #[serde(default = "default_currency_name")]
    currency_name: String,
    daily_shards: i64,
    first_time_shards: Option<i64>,
    premium_daily_shards: Option<i64>,
    #[serde(default)]
    premium_guilds: Vec<u64>,
    #[serde(default)]
    daily_bonus_policy: DailyBonusPolicy,
    #[serde(default = "default_daily_reset")]
    daily_reset: String,
    rarities: Vec<RarityEntry>,
}

#[derive(Debug, Deserialize)]
struct RarityEntry {
    value: i32,
    rate: f64,
    #[serde(default)]
    dupe_shards: i64,
    color: Option<u32>,
    stars: Option<String>,
    /// 0 disables pity for the tier.
    #[serde(default)]
    pity: u32,
}

#[derive(Debug, Deserialize)]
struct CardEntry {
    name: Option<String>,
    rarity: Option<i32>,
    #[serde(rename = "type")]
    card_type: Option<String>,
    series: Option<String>,
    image: Option<String>,
}

fn default_currency_name() -> String {
    "Shards".to_string()
}

fn default_daily_reset() -> String {
    "00:00+0000".to_string()
}

fn non_negative(key: &str, value: Option<i64>) -> Result<(), ConfigError> {
    match value {
        Some(value) if value < 0 => Err(ConfigError::NegativeAmount {
            key: key.to_string(),
            value,
        }),
        _ => Ok(()),
    }
}

/// Parsed settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSettings {
    pub settings: GachaSettings,
    pub rarities: Vec<RaritySetting>,
}

/// Parses a settings file.
///
/// Rates are kept as raw weights; normalization happens when the roster is built.
///
/// # Returns
/// - `Ok(LoadedSettings)` - Economy settings and rarity tiers
/// - `Err(AppError::YamlErr)` - Malformed YAML or missing mandatory keys
/// - `Err(AppError::ConfigErr)` - Unparsable `daily_reset` or a negative shard amount
pub fn parse_settings(yaml: &str) -> Result<LoadedSettings, AppError> {
    let file: SettingsFile = serde_yaml::from_str(yaml)?;

    let amounts = [
        ("cost", Some(file.cost)),
        ("daily_shards", Some(file.daily_shards)),
        ("first_time_shards", file.first_time_shards),
        ("premium_daily_shards", file.premium_daily_shards),
    ];
    for (key, value) in amounts {
        non_negative(key, value)?;
    }
    for entry in &file.rarities {
        non_negative(
            &format!("rarities[{}].dupe_shards", entry.value),
            Some(entry.dupe_shards),
        )?;
    }

    let rarities = file
        .rarities
        .into_iter()
        .map(|entry| {
            let defaults = RaritySetting::new(entry.value, entry.rate);
            RaritySetting {
                dupe_shards: entry.dupe_shards,
                color: entry.color.unwrap_or(defaults.color),
                stars: entry.stars.unwrap_or(defaults.stars),
                pity: Some(entry.pity).filter(|p| *p > 0),
                ..defaults
            }
        })
        .collect();

    let settings = GachaSettings {
        cost: file.cost,
        currency_icon: file.currency_icon,
        currency_name: file.currency_name,
        daily_shards: file.daily_shards,
        first_time_shards: file.first_time_shards,
        premium_daily_shards: file.premium_daily_shards,
        premium_guilds: file.premium_guilds,
        daily_bonus_policy: file.daily_bonus_policy,
        daily_reset: DailyReset::parse(&file.daily_reset)?,
    };

    Ok(LoadedSettings { settings, rarities })
}

/// Parses a roster file.
///
/// Entries missing a mandatory field, with wrongly typed fields, or naming a rarity
/// absent from `rarities` are skipped with a warning.
///
/// # Returns
/// - `Ok(Vec<Card>)` - Usable cards ordered by id
/// - `Err(AppError::YamlErr)` - The file is not a mapping of card ids
pub fn parse_roster(yaml: &str, rarities: &[RaritySetting]) -> Result<Vec<Card>, AppError> {
    let entries: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(yaml)?;

    let mut cards = Vec::with_capacity(entries.len());
    for (id, value) in entries {
        let entry: CardEntry = match serde_yaml::from_value(value) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping roster entry '{}': {}", id, e);
                continue;
            }
        };

        let (Some(name), Some(rarity), Some(card_type), Some(series)) =
            (entry.name, entry.rarity, entry.card_type, entry.series)
        else {
            tracing::warn!("Skipping roster entry '{}': missing mandatory field", id);
            continue;
        };

        if !rarities.iter().any(|r| r.rarity == rarity) {
            tracing::warn!(
                "Skipping roster entry '{}': unknown rarity {}",
                id,
                rarity
            );
            continue;
        }

        cards.push(Card {
            image: entry.image,
            ..Card::new(id, name, rarity, card_type, series)
        });
    }

    Ok(cards)
}

/// Settings and roster read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRoster {
    pub settings: GachaSettings,
    pub rarities: Vec<RaritySetting>,
    pub cards: Vec<Card>,
}

/// Reads and parses the settings file.
///
/// # Returns
/// - `Ok(LoadedSettings)` - Economy settings and rarity tiers
/// - `Err(AppError::IoErr)` - The file could not be read
/// - `Err(AppError)` - The file could not be parsed or holds unusable values
pub async fn load_settings_file(path: impl AsRef<Path>) -> Result<LoadedSettings, AppError> {
    let yaml = tokio::fs::read_to_string(path.as_ref()).await?;

    parse_settings(&yaml)
}

/// Reads and parses the roster file against the configured tiers.
///
/// # Returns
/// - `Ok(Vec<Card>)` - Usable cards ordered by id
/// - `Err(AppError::IoErr)` - The file could not be read
/// - `Err(AppError::YamlErr)` - The file is not a mapping of card ids
pub async fn load_roster_file(
    path: impl AsRef<Path>,
    rarities: &[RaritySetting],
) -> Result<Vec<Card>, AppError> {
    let yaml = tokio::fs::read_to_string(path.as_ref()).await?;

    parse_roster(&yaml, rarities)
}

/// Reads and parses the settings and roster files.
///
/// # Arguments
/// - `settings_path` - Path to the settings YAML
/// - `roster_path` - Path to the roster YAML
///
/// # Returns
/// - `Ok(LoadedRoster)` - Parsed settings, tiers and cards
/// - `Err(AppError::IoErr)` - A file could not be read
/// - `Err(AppError)` - A file could not be parsed
pub async fn load_files(
    settings_path: impl AsRef<Path>,
    roster_path: impl AsRef<Path>,
) -> Result<LoadedRoster, AppError> {
    let LoadedSettings { settings, rarities } = load_settings_file(settings_path.as_ref()).await?;
    let cards = load_roster_file(roster_path.as_ref(), &rarities).await?;

    tracing::info!(
        "Loaded {} rarities and {} cards from {} and {}",
        rarities.len(),
        cards.len(),
        settings_path.as_ref().display(),
        roster_path.as_ref().display()
    );

    Ok(LoadedRoster {
        settings,
        rarities,
        cards,
    })
}
