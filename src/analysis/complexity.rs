//! Complexity scoring of traced patterns
//!
//! The score sums four independent contributions, always in this order:
//!
//! | Factor            | Contribution                                |
//! |-------------------|---------------------------------------------|
//! | Length            | `min(len - 2, 6) * 10`                      |
//! | Direction changes | changed step vectors `* 5`                  |
//! | Line crossings    | crossing non-adjacent segment pairs `* 15`  |
//! | Corner usage      | corner dots visited `* 8`                   |
//!
//! Each non-zero contribution is also recorded as a human-readable factor
//! string. Factors explain a score; nothing downstream should parse them.

use crate::io::configuration::{
    CORNER_WEIGHT, CROSSING_WEIGHT, DIRECTION_CHANGE_WEIGHT, LENGTH_SCORE_CAP, LENGTH_WEIGHT,
    MEDIUM_THRESHOLD, STRONG_THRESHOLD, VERY_STRONG_THRESHOLD, WEAK_THRESHOLD,
};
use crate::spatial::coordinates::{corner_indices, index_to_coord};
use crate::spatial::segments::count_crossings;
use std::fmt;

/// Qualitative rating of a pattern, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplexityLevel {
    /// Fewer than two dots, nothing to score
    Invalid,
    /// Score below 20
    VeryWeak,
    /// Score from 20
    Weak,
    /// Score from 40
    Medium,
    /// Score from 60
    Strong,
    /// Score from 80
    VeryStrong,
}

impl ComplexityLevel {
    /// All levels from weakest to strongest
    pub const ALL: [Self; 6] = [
        Self::Invalid,
        Self::VeryWeak,
        Self::Weak,
        Self::Medium,
        Self::Strong,
        Self::VeryStrong,
    ];

    /// Rate a score, checking thresholds from the highest down
    pub const fn from_score(score: u32) -> Self {
        if score >= VERY_STRONG_THRESHOLD {
            Self::VeryStrong
        } else if score >= STRONG_THRESHOLD {
            Self::Strong
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else if score >= WEAK_THRESHOLD {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    /// Kebab-case label, e.g. `very-strong`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::VeryWeak => "very-weak",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very-strong",
        }
    }

    /// Check whether this level meets an acceptance floor
    pub fn at_least(self, minimum: Self) -> bool {
        self >= minimum
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score, rating and per-factor breakdown of one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityResult {
    /// Sum of all factor contributions
    pub score: u32,
    /// Rating derived from the score
    pub level: ComplexityLevel,
    /// Non-zero contributions in the order they were computed
    pub factors: Vec<String>,
}

impl ComplexityResult {
    /// Result for patterns too short to score
    pub const fn invalid() -> Self {
        Self {
            score: 0,
            level: ComplexityLevel::Invalid,
            factors: Vec::new(),
        }
    }
}

/// Score a pattern on a `grid_size` × `grid_size` grid
pub fn score(pattern: &[i64], grid_size: usize) -> ComplexityResult {
    if pattern.len() < 2 {
        return ComplexityResult::invalid();
    }

    let mut total: u32 = 0;
    let mut factors = Vec::new();
    let mut record = |label: &str, count: usize, weight: u32| {
        let contribution = u32::try_from(count)
            .unwrap_or(u32::MAX)
            .saturating_mul(weight);
        total = total.saturating_add(contribution);
        if contribution > 0 {
            factors.push(format!("{label}: +{contribution}"));
        }
    };

    let length_steps = (pattern.len() - 2).min(LENGTH_SCORE_CAP);
    record("Length", length_steps, LENGTH_WEIGHT);

    let changes = count_direction_changes(pattern, grid_size);
    record("Direction changes", changes, DIRECTION_CHANGE_WEIGHT);

    let crossings = count_crossings(pattern, grid_size);
    record("Line crossings", crossings, CROSSING_WEIGHT);

    let corners = count_corner_visits(pattern, grid_size);
    record("Corner usage", corners, CORNER_WEIGHT);

    ComplexityResult {
        score: total,
        level: ComplexityLevel::from_score(total),
        factors,
    }
}

/// Count positions where the step vector differs from the previous step
///
/// Vectors are compared exactly, so reversing along the same line counts as
/// a change while continuing straight does not.
pub fn count_direction_changes(pattern: &[i64], grid_size: usize) -> usize {
    pattern
        .windows(3)
        .filter(|window| match window {
            [a, b, c] => {
                let (prev, curr, next) = (
                    index_to_coord(*a, grid_size),
                    index_to_coord(*b, grid_size),
                    index_to_coord(*c, grid_size),
                );
                prev.direction_to(curr) != curr.direction_to(next)
            }
            _ => false,
        })
        .count()
}

/// Count pattern entries that are corner dots
pub fn count_corner_visits(pattern: &[i64], grid_size: usize) -> usize {
    let corners = corner_indices(grid_size);
    pattern.iter().filter(|p| corners.contains(p)).count()
}
