//! Normalization of rarity weights into roll probabilities.

use crate::{error::gacha::GachaError, model::rarity::RaritySetting};

/// Roll probability per rarity, ascending by rarity and summing to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDistribution {
    entries: Vec<(i32, f64)>,
}

impl NormalizedDistribution {
    /// `(rarity, probability)` pairs in ascending rarity order.
    pub fn entries(&self) -> &[(i32, f64)] {
        &self.entries
    }

    pub fn probability(&self, rarity: i32) -> Option<f64> {
        self.entries
            .iter()
            .find(|(r, _)| *r == rarity)
            .map(|(_, p)| *p)
    }

    /// Picks the rarity whose cumulative interval contains `x`.
    ///
    /// Intervals are laid out in ascending rarity order. Zero-probability tiers own an
    /// empty interval and are never picked. `x` at or past the accumulated total
    /// (floating point drift) resolves to the highest tier with a non-zero probability.
    ///
    /// # Arguments
    /// - `x` - Uniform draw in `[0, 1)`
    pub fn pick(&self, x: f64) -> i32 {
        let mut cumulative = 0.0;
        let mut last_possible = None;

        for &(rarity, probability) in &self.entries {
            if probability <= 0.0 {
                continue;
            }
            cumulative += probability;
            last_possible = Some(rarity);
            if x < cumulative {
                return rarity;
            }
        }

        // resolve() guarantees at least one non-zero tier
        last_possible.unwrap_or_default()
    }
}

/// Converts configured rarity weights into a roll distribution.
pub struct RateTable;

impl RateTable {
    /// Normalizes weights so that tier `i` gets `rate_i / Σ rate_j`.
    ///
    /// # Arguments
    /// - `settings` - Rarity tiers in any order
    ///
    /// # Returns
    /// - `Ok(NormalizedDistribution)` - Probabilities in ascending rarity order
    /// - `Err(GachaError::Configuration)` - No tiers, duplicate tiers, a negative or
    ///   non-finite weight, or all weights zero
    pub fn resolve(settings: &[RaritySetting]) -> Result<NormalizedDistribution, GachaError> {
        if settings.is_empty() {
            return Err(GachaError::Configuration(
                "no rarity settings configured".to_string(),
            ));
        }

        let mut weights: Vec<(i32, f64)> = Vec::with_capacity(settings.len());
        for setting in settings {
            if !setting.rate.is_finite() || setting.rate < 0.0 {
                return Err(GachaError::Configuration(format!(
                    "rarity {} has invalid rate {}",
                    setting.rarity, setting.rate
                )));
            }
            if weights.iter().any(|(r, _)| *r == setting.rarity) {
                return Err(GachaError::Configuration(format!(
                    "rarity {} is configured more than once",
                    setting.rarity
                )));
            }
            weights.push((setting.rarity, setting.rate));
        }

        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(GachaError::Configuration(
                "all rarity rates are zero".to_string(),
            ));
        }

        weights.sort_by_key(|(rarity, _)| *rarity);
        let entries = weights
            .into_iter()
            .map(|(rarity, weight)| (rarity, weight / total))
            .collect();

        Ok(NormalizedDistribution { entries })
    }
}
