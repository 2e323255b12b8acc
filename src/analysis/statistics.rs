//! Per-pattern summaries and score distributions over batches of patterns

use crate::algorithm::codec::encode;
use crate::algorithm::validation::validate_with;
use crate::analysis::complexity::{ComplexityLevel, ComplexityResult, score};
use crate::io::configuration::PatternConfig;

/// Everything a host typically shows about one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternStats {
    /// Comma-separated form of the pattern
    pub encoded: String,
    /// Number of dots
    pub length: usize,
    /// Complexity score
    pub score: u32,
    /// Complexity rating
    pub level: ComplexityLevel,
    /// Whether the pattern passes validation under the configuration
    pub is_valid: bool,
    /// Validation message
    pub message: String,
}

impl PatternStats {
    /// Validate and score a pattern in one pass
    pub fn analyze(pattern: &[i64], config: &PatternConfig) -> Self {
        let validation = validate_with(pattern, config);
        let complexity = score(pattern, config.grid_size);

        Self {
            encoded: encode(pattern),
            length: pattern.len(),
            score: complexity.score,
            level: complexity.level,
            is_valid: validation.is_valid,
            message: validation.message,
        }
    }
}

/// Tally of complexity levels across many scored patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelHistogram {
    counts: [usize; ComplexityLevel::ALL.len()],
    score_sum: u64,
    total: usize,
}

impl LevelHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one scored pattern
    pub fn record(&mut self, result: &ComplexityResult) {
        if let Some(count) = self.counts.get_mut(result.level as usize) {
            *count += 1;
        }
        self.score_sum += u64::from(result.score);
        self.total += 1;
    }

    /// Patterns recorded at a given level
    pub fn count(&self, level: ComplexityLevel) -> usize {
        self.counts.get(level as usize).copied().unwrap_or(0)
    }

    /// Patterns recorded in total
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Mean score, or zero when nothing was recorded
    pub fn mean_score(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score_sum as f64 / self.total as f64
    }

    /// Share of patterns at a given level, in `[0, 1]`
    pub fn fraction(&self, level: ComplexityLevel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(level) as f64 / self.total as f64
    }

    /// Levels with their counts, weakest first
    pub fn iter(&self) -> impl Iterator<Item = (ComplexityLevel, usize)> + '_ {
        ComplexityLevel::ALL
            .into_iter()
            .map(|level| (level, self.count(level)))
    }
}

impl Extend<ComplexityResult> for LevelHistogram {
    fn extend<T: IntoIterator<Item = ComplexityResult>>(&mut self, iter: T) {
        for result in iter {
            self.record(&result);
        }
    }
}
