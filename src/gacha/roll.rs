//! Single-roll resolution.

use crate::{
    error::gacha::GachaError,
    gacha::{pity::PityTracker, random::RollSource, roster::Roster},
    model::card::Card,
};

/// What the engine decided for one roll, before anything is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutcome {
    pub card: Card,
    pub rarity: i32,
    pub forced: bool,
}

/// Resolves rolls against one roster snapshot.
pub struct RollEngine<'a> {
    roster: &'a Roster,
}

impl<'a> RollEngine<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Resolves one roll and advances the user's pity counters.
    ///
    /// The highest pity-forced tier wins; otherwise one draw from `source` picks a tier
    /// from the distribution. A card is picked uniformly from that tier. Pity counters
    /// change only when a card was found.
    ///
    /// # Arguments
    /// - `pity` - The rolling user's counters, updated in place
    /// - `source` - Randomness for the tier draw and the card pick
    ///
    /// # Returns
    /// - `Ok(EngineOutcome)` - Picked card, its tier and whether pity forced it
    /// - `Err(GachaError::EmptyRoster)` - No cards loaded
    /// - `Err(GachaError::EmptyRarity)` - The resolved tier has no cards
    pub fn roll(
        &self,
        pity: &mut PityTracker,
        source: &mut impl RollSource,
    ) -> Result<EngineOutcome, GachaError> {
        if self.roster.is_empty() {
            return Err(GachaError::EmptyRoster);
        }
        let distribution = self.roster.distribution()?;

        let forced_rarity = pity.forced_rarity(self.roster.settings());
        let rarity = match forced_rarity {
            Some(rarity) => {
                tracing::debug!("Pity forces rarity {} for user {}", rarity, pity.user_id());
                rarity
            }
            None => distribution.pick(source.draw()),
        };

        let cards = self.roster.cards_of(rarity);
        if cards.is_empty() {
            return Err(GachaError::EmptyRarity(rarity));
        }
        let card = cards[source.pick(cards.len()).min(cards.len() - 1)].clone();

        pity.observe(self.roster.settings(), rarity);

        Ok(EngineOutcome {
            card,
            rarity,
            forced: forced_rarity.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{
        gacha::random::{seeded_source, ScriptedDraws},
        model::rarity::RaritySetting,
    };

    fn roster() -> Roster {
        Roster::new(
            vec![
                RaritySetting::new(1, 0.9),
                RaritySetting::new(2, 0.1).with_pity(5),
            ],
            vec![
                Card::new("common", "Common", 1, "Character", "S"),
                Card::new("rare", "Rare", 2, "Character", "S"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn fifth_roll_is_forced_by_pity() {
        let roster = roster();
        let engine = RollEngine::new(&roster);
        let mut pity = PityTracker::new(1, BTreeMap::new());
        // Every draw lands in the common interval
        let mut source = ScriptedDraws::new(vec![0.0]);

        for _ in 0..4 {
            let outcome = engine.roll(&mut pity, &mut source).unwrap();
            assert_eq!(outcome.rarity, 1);
            assert!(!outcome.forced);
        }
        assert_eq!(pity.count(2), 4);

        let outcome = engine.roll(&mut pity, &mut source).unwrap();

        assert_eq!(outcome.rarity, 2);
        assert_eq!(outcome.card.id, "rare");
        assert!(outcome.forced);
        assert_eq!(pity.count(1), 0);
        assert_eq!(pity.count(2), 0);
        // Forced rolls do not consume a draw
        assert_eq!(source.consumed(), 4);
    }

    #[test]
    fn miss_streak_never_reaches_threshold() {
        let roster = roster();
        let engine = RollEngine::new(&roster);
        let mut pity = PityTracker::new(1, BTreeMap::new());
        let mut source = seeded_source(1234);

        let mut streak = 0;
        for _ in 0..500 {
            let outcome = engine.roll(&mut pity, &mut source).unwrap();
            if outcome.rarity < 2 {
                streak += 1;
            } else {
                streak = 0;
            }
            assert!(streak < 5);
        }
    }

    #[test]
    fn natural_hit_resets_lower_counters() {
        let roster = roster();
        let engine = RollEngine::new(&roster);
        let mut pity = PityTracker::new(1, BTreeMap::from([(1, 0), (2, 2)]));
        let mut source = ScriptedDraws::new(vec![0.95]);

        let outcome = engine.roll(&mut pity, &mut source).unwrap();

        assert_eq!(outcome.rarity, 2);
        assert!(!outcome.forced);
        assert_eq!(pity.count(1), 0);
        assert_eq!(pity.count(2), 0);
    }

    #[test]
    fn empty_rarity_fails_without_fallback() {
        let roster = Roster::new(
            vec![RaritySetting::new(1, 0.5), RaritySetting::new(2, 0.5)],
            vec![Card::new("common", "Common", 1, "Character", "S")],
        )
        .unwrap();
        let engine = RollEngine::new(&roster);
        let mut pity = PityTracker::new(1, BTreeMap::from([(2, 3)]));
        let mut source = ScriptedDraws::new(vec![0.75]);

        let result = engine.roll(&mut pity, &mut source);

        assert_eq!(result, Err(GachaError::EmptyRarity(2)));
        // Counters are untouched by a failed roll
        assert_eq!(pity.count(2), 3);
    }

    #[test]
    fn empty_roster_fails() {
        let roster = Roster::empty();
        let engine = RollEngine::new(&roster);
        let mut pity = PityTracker::new(1, BTreeMap::new());

        assert_eq!(
            engine.roll(&mut pity, &mut ScriptedDraws::new(vec![0.0])),
            Err(GachaError::EmptyRoster)
        );
    }
}
