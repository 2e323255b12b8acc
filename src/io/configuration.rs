//! Scoring constants, runtime configuration defaults and named presets

use crate::io::error::{PatternError, Result, invalid_parameter};
use crate::spatial::coordinates::dot_count;
use std::fmt;
use std::str::FromStr;

// Default constraints for a classic 3×3 lock screen
/// Fewest dots an accepted pattern may contain
pub const DEFAULT_MIN_POINTS: usize = 4;
/// Most dots an accepted pattern may contain
pub const DEFAULT_MAX_POINTS: usize = 9;
/// Width and height of the dot grid
pub const DEFAULT_GRID_SIZE: usize = 3;

// Complexity weights
/// Points awarded per dot beyond the second
pub const LENGTH_WEIGHT: u32 = 10;
/// Dots beyond the second that still earn length points
pub const LENGTH_SCORE_CAP: usize = 6;
/// Points awarded per change of direction
pub const DIRECTION_CHANGE_WEIGHT: u32 = 5;
/// Points awarded per pair of crossing segments
pub const CROSSING_WEIGHT: u32 = 15;
/// Points awarded per corner dot visited
pub const CORNER_WEIGHT: u32 = 8;

// Level thresholds, inclusive lower bounds
/// Minimum score rated very strong
pub const VERY_STRONG_THRESHOLD: u32 = 80;
/// Minimum score rated strong
pub const STRONG_THRESHOLD: u32 = 60;
/// Minimum score rated medium
pub const MEDIUM_THRESHOLD: u32 = 40;
/// Minimum score rated weak
pub const WEAK_THRESHOLD: u32 = 20;

/// Separator used by the textual pattern form
pub const SEQUENCE_SEPARATOR: &str = ",";

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Patterns printed by `generate` when no count is given
pub const DEFAULT_GENERATE_COUNT: usize = 1;
/// Patterns scored by `survey` when no sample size is given
pub const DEFAULT_SURVEY_SAMPLES: usize = 10_000;

// Progress bar display settings
/// Samples scored between progress bar redraws
pub const PROGRESS_UPDATE_INTERVAL: usize = 256;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Constraints applied to a pattern: length bounds and grid dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    /// Fewest dots an accepted pattern may contain
    pub min_points: usize,
    /// Most dots an accepted pattern may contain
    pub max_points: usize,
    /// Width and height of the dot grid
    pub grid_size: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            min_points: DEFAULT_MIN_POINTS,
            max_points: DEFAULT_MAX_POINTS,
            grid_size: DEFAULT_GRID_SIZE,
        }
    }
}

impl PatternConfig {
    /// Create a configuration from explicit bounds
    pub const fn new(min_points: usize, max_points: usize, grid_size: usize) -> Self {
        Self {
            min_points,
            max_points,
            grid_size,
        }
    }

    /// Number of dots on the configured grid
    pub const fn dot_count(&self) -> usize {
        dot_count(self.grid_size)
    }

    /// Check that the configuration can accept at least one pattern
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `grid_size` is zero
    /// - `min_points` exceeds `max_points`
    /// - `min_points` exceeds the number of dots on the grid
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &"grid must have at least one dot",
            ));
        }

        if self.min_points > self.max_points {
            return Err(invalid_parameter(
                "min_points",
                &self.min_points,
                &format!("exceeds max_points ({})", self.max_points),
            ));
        }

        if self.min_points > self.dot_count() {
            return Err(invalid_parameter(
                "min_points",
                &self.min_points,
                &format!(
                    "a {0}x{0} grid only has {1} dots",
                    self.grid_size,
                    self.dot_count()
                ),
            ));
        }

        Ok(())
    }
}

/// Named constraint sets for common uses of a lock pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Preset {
    /// Phone lock screen: 4 to 9 dots on 3×3
    #[default]
    MobileLock,
    /// Sensitive applications: 6 to 16 dots on 4×4
    Security,
    /// Casual games: 3 to 25 dots on 5×5
    Gaming,
    /// Basic authentication: 3 to 6 dots on 3×3
    Simple,
}

impl Preset {
    /// All presets in declaration order
    pub const ALL: [Self; 4] = [Self::MobileLock, Self::Security, Self::Gaming, Self::Simple];

    /// Constraint set described by this preset
    pub const fn config(self) -> PatternConfig {
        match self {
            Self::MobileLock => PatternConfig::new(4, 9, 3),
            Self::Security => PatternConfig::new(6, 16, 4),
            Self::Gaming => PatternConfig::new(3, 25, 5),
            Self::Simple => PatternConfig::new(3, 6, 3),
        }
    }

    /// Kebab-case name accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::MobileLock => "mobile-lock",
            Self::Security => "security",
            Self::Gaming => "gaming",
            Self::Simple => "simple",
        }
    }
}

impl From<Preset> for PatternConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| {
                invalid_parameter(
                    "preset",
                    &s,
                    &"expected one of mobile-lock, security, gaming, simple",
                )
            })
    }
}
