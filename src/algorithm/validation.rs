//! Structural validation of pattern sequences
//!
//! Checks run in a fixed order and stop at the first failure: presence,
//! minimum length, maximum length, index range, then uniqueness. Every
//! outcome is returned as data; nothing here panics on malformed input.

use crate::algorithm::bitset::DotBitset;
use crate::io::configuration::PatternConfig;
use crate::spatial::coordinates::{is_on_grid, max_index};
use std::fmt;

/// Message reported for an accepted pattern
pub const VALID_MESSAGE: &str = "Valid pattern";

/// Reason a pattern was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// No sequence was supplied at all
    NotAnArray,
    /// Fewer dots than the configured minimum
    TooFewPoints {
        /// Configured minimum
        min_points: usize,
    },
    /// More dots than the configured maximum
    TooManyPoints {
        /// Configured maximum
        max_points: usize,
    },
    /// An index outside the grid, the first one in sequence order
    PointOutOfRange {
        /// The offending index
        point: i64,
        /// Largest index on the grid
        max_index: i64,
    },
    /// Some dot appears more than once
    DuplicatePoints,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnArray => f.write_str("Pattern must be an array"),
            Self::TooFewPoints { min_points } => {
                write!(f, "Pattern must have at least {min_points} points")
            }
            Self::TooManyPoints { max_points } => {
                write!(f, "Pattern cannot have more than {max_points} points")
            }
            Self::PointOutOfRange { point, max_index } => {
                write!(f, "Invalid point: {point}. Must be between 0 and {max_index}")
            }
            Self::DuplicatePoints => f.write_str("Pattern cannot have duplicate points"),
        }
    }
}

/// Outcome of validating one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether every check passed
    pub is_valid: bool,
    /// Human-readable reason, or a neutral confirmation when valid
    pub message: String,
    /// Structured reason when invalid
    pub failure: Option<ValidationFailure>,
}

impl ValidationResult {
    /// Result for an accepted pattern
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: VALID_MESSAGE.to_string(),
            failure: None,
        }
    }

    /// Result for a rejected pattern
    pub fn invalid(failure: ValidationFailure) -> Self {
        Self {
            is_valid: false,
            message: failure.to_string(),
            failure: Some(failure),
        }
    }
}

impl From<Option<ValidationFailure>> for ValidationResult {
    fn from(failure: Option<ValidationFailure>) -> Self {
        failure.map_or_else(Self::valid, Self::invalid)
    }
}

/// Validate a pattern against length bounds, grid range and uniqueness
pub fn validate(
    pattern: &[i64],
    min_points: usize,
    max_points: usize,
    grid_size: usize,
) -> ValidationResult {
    find_failure(pattern, min_points, max_points, grid_size).into()
}

/// Validate host input that may be missing altogether
///
/// `None` is reported as [`ValidationFailure::NotAnArray`].
pub fn validate_input(
    pattern: Option<&[i64]>,
    min_points: usize,
    max_points: usize,
    grid_size: usize,
) -> ValidationResult {
    pattern.map_or_else(
        || ValidationResult::invalid(ValidationFailure::NotAnArray),
        |p| validate(p, min_points, max_points, grid_size),
    )
}

/// Validate a pattern against a configuration
pub fn validate_with(pattern: &[i64], config: &PatternConfig) -> ValidationResult {
    validate(pattern, config.min_points, config.max_points, config.grid_size)
}

fn find_failure(
    pattern: &[i64],
    min_points: usize,
    max_points: usize,
    grid_size: usize,
) -> Option<ValidationFailure> {
    if pattern.len() < min_points {
        return Some(ValidationFailure::TooFewPoints { min_points });
    }

    if pattern.len() > max_points {
        return Some(ValidationFailure::TooManyPoints { max_points });
    }

    if let Some(&point) = pattern.iter().find(|&&p| !is_on_grid(p, grid_size)) {
        return Some(ValidationFailure::PointOutOfRange {
            point,
            max_index: max_index(grid_size),
        });
    }

    // Every index is on the grid here, so insert only fails on a repeat
    let mut seen = DotBitset::new(grid_size);
    if !pattern.iter().all(|&p| seen.insert(p)) {
        return Some(ValidationFailure::DuplicatePoints);
    }

    None
}
