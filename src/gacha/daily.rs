//! Daily claim reset boundaries.

use chrono::{DateTime, FixedOffset, NaiveTime, Offset, TimeDelta, TimeZone, Utc};

use crate::error::config::ConfigError;

/// Time of day, in a fixed UTC offset, at which daily claims become available again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyReset {
    time: NaiveTime,
    offset: FixedOffset,
}

impl DailyReset {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// Parses `HH:MM±HHMM`, for example `00:00+0000` or `04:30-0500`.
    ///
    /// # Returns
    /// - `Ok(DailyReset)` - Parsed reset time
    /// - `Err(ConfigError::InvalidResetTime)` - Value is not in the expected form
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let parsed = DateTime::parse_from_str(
            &format!("2000-01-01 {}", value.trim()),
            "%Y-%m-%d %H:%M%z",
        )
        .map_err(|_| ConfigError::InvalidResetTime(value.to_string()))?;

        Ok(Self::new(parsed.time(), *parsed.offset()))
    }

    /// Most recent reset boundary at or before `now`.
    pub fn last_boundary(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let local = now.with_timezone(&self.offset);
        let today = local.date_naive().and_time(self.time);
        let boundary = self.to_utc(today);

        if boundary > now {
            boundary - TimeDelta::days(1)
        } else {
            boundary
        }
    }

    /// First reset boundary strictly after `now`.
    pub fn next_boundary(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.last_boundary(now) + TimeDelta::days(1)
    }

    /// Whether a user whose last claim was `last_claim` may claim at `now`.
    pub fn is_eligible(&self, last_claim: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match last_claim {
            Some(last_claim) => last_claim < self.last_boundary(now),
            None => true,
        }
    }

    fn to_utc(&self, local: chrono::NaiveDateTime) -> DateTime<Utc> {
        let utc = local - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()));
        Utc.from_utc_datetime(&utc)
    }
}

impl Default for DailyReset {
    /// Midnight UTC.
    fn default() -> Self {
        Self::new(NaiveTime::MIN, Utc.fix())
    }
}

impl TryFrom<String> for DailyReset {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
