//! Random pattern generation for demos, surveys and tests

use crate::io::configuration::PatternConfig;
use crate::spatial::coordinates::dot_count;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Draw a random pattern with a uniformly chosen length
///
/// The target length is drawn from `[min_points, max_points]` (just
/// `min_points` when the bounds are inverted). Dots are then drawn without
/// replacement from the whole grid until the target is met or the grid runs
/// out, so the result never repeats a dot and never leaves the grid.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    min_points: usize,
    max_points: usize,
    grid_size: usize,
) -> Vec<i64> {
    let target_length = if max_points > min_points {
        rng.random_range(min_points..=max_points)
    } else {
        min_points
    };

    let mut available: Vec<i64> = (0..dot_count(grid_size) as i64).collect();
    let mut pattern = Vec::with_capacity(target_length.min(available.len()));

    while pattern.len() < target_length && !available.is_empty() {
        let pick = rng.random_range(0..available.len());
        pattern.push(available.remove(pick));
    }

    pattern
}

/// Seeded pattern source for reproducible sequences of random patterns
pub struct PatternGenerator {
    rng: StdRng,
    config: PatternConfig,
}

impl PatternGenerator {
    /// Create a deterministic generator for the given constraints
    pub fn new(config: PatternConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    /// Constraints the generator draws against
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Draw the next random pattern
    pub fn next_pattern(&mut self) -> Vec<i64> {
        generate(
            &mut self.rng,
            self.config.min_points,
            self.config.max_points,
            self.config.grid_size,
        )
    }
}

impl Iterator for PatternGenerator {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_pattern())
    }
}
