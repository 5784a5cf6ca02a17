//! Economy settings for rolls and daily claims.

use serde::Deserialize;

use crate::{gacha::daily::DailyReset, model::currency::DailyBonusKind};

/// How first-time and premium daily bonuses combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyBonusPolicy {
    /// First-time bonus wins, then premium, then the standard amount.
    #[default]
    FirstTimeOverridesPremium,
    /// First-time and premium amounts are added when both apply.
    Stack,
}

/// Shard economy shared by every roll and claim.
#[derive(Debug, Clone, PartialEq)]
pub struct GachaSettings {
    /// Shards debited per roll.
    pub cost: i64,
    pub currency_icon: String,
    pub currency_name: String,
    pub daily_shards: i64,
    pub first_time_shards: Option<i64>,
    pub premium_daily_shards: Option<i64>,
    /// Guilds whose boosters receive the premium daily bonus.
    pub premium_guilds: Vec<u64>,
    pub daily_bonus_policy: DailyBonusPolicy,
    pub daily_reset: DailyReset,
}

impl Default for GachaSettings {
    fn default() -> Self {
        Self {
            cost: 100,
            currency_icon: String::new(),
            currency_name: "Shards".to_string(),
            daily_shards: 120,
            first_time_shards: Some(625),
            premium_daily_shards: None,
            premium_guilds: Vec::new(),
            daily_bonus_policy: DailyBonusPolicy::default(),
            daily_reset: DailyReset::default(),
        }
    }
}

impl GachaSettings {
    /// Currency label such as `"💎 Shards"`.
    pub fn currency(&self) -> String {
        format!("{} {}", self.currency_icon, self.currency_name)
            .trim()
            .to_string()
    }

    /// Whether boosting `guild_id` makes a member eligible for the premium bonus.
    pub fn is_premium_guild(&self, guild_id: u64) -> bool {
        self.premium_guilds.contains(&guild_id)
    }

    /// Amount and kind of an eligible daily claim.
    ///
    /// Bonuses configured as absent or non-positive never apply.
    ///
    /// # Arguments
    /// - `first_time` - The user has never claimed a daily before
    /// - `premium` - The claim was made in a premium context
    pub fn daily_amount(&self, first_time: bool, premium: bool) -> (i64, DailyBonusKind) {
        let first_bonus = self.first_time_shards.filter(|s| *s > 0).filter(|_| first_time);
        let premium_bonus = self.premium_daily_shards.filter(|s| *s > 0).filter(|_| premium);

        match (self.daily_bonus_policy, first_bonus, premium_bonus) {
            (DailyBonusPolicy::Stack, Some(first), Some(premium)) => {
                (first + premium, DailyBonusKind::FirstTimePremium)
            }
            (_, Some(first), _) => (first, DailyBonusKind::FirstTime),
            (_, None, Some(premium)) => (premium, DailyBonusKind::Premium),
            (_, None, None) => (self.daily_shards, DailyBonusKind::Standard),
        }
    }
}
