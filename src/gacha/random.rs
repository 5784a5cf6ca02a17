//! Injectable randomness for rolls.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the two random choices a roll makes.
pub trait RollSource {
    /// Uniform draw in `[0, 1)` used to pick a rarity.
    fn draw(&mut self) -> f64;

    /// Uniform index in `0..len` used to pick a card within a rarity. `len` is non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl RollSource for StdRng {
    fn draw(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Creates a roll source seeded from the thread-local generator.
pub fn entropy_source() -> StdRng {
    StdRng::from_rng(&mut rand::rng())
}

/// Creates a reproducible roll source.
#[cfg(test)]
pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays fixed draws, then repeats the last one. Card picks always return 0.
#[cfg(test)]
pub struct ScriptedDraws {
    draws: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedDraws {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, next: 0 }
    }

    /// Number of rarity draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl RollSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        let index = self.next.min(self.draws.len().saturating_sub(1));
        self.next += 1;
        self.draws.get(index).copied().unwrap_or(0.0)
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}
