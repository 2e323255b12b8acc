//! Validation and complexity scoring for patterns traced on a square dot grid
//!
//! A pattern is an ordered list of row-major dot indices, e.g. `[0, 1, 2, 5, 8]`
//! on a 3×3 lock screen. The engine converts patterns to and from their
//! comma-separated form, checks them against length, range and uniqueness
//! constraints, and rates them from path length, direction changes,
//! self-crossings and corner usage. All of it is pure and deterministic.
//!
//! A headless capture session and event bus are provided for hosts that want
//! the widget's gesture handling without a display surface.

#![forbid(unsafe_code)]

/// Codec, validation, bitsets and random generation
pub mod algorithm;
/// Complexity scoring and batch statistics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Gesture capture state machine and notifications
pub mod session;
/// Grid coordinates and segment geometry
pub mod spatial;

pub use algorithm::codec::{decode, encode, is_well_formed_sequence_string};
pub use algorithm::generator::{PatternGenerator, generate};
pub use algorithm::validation::{ValidationFailure, ValidationResult, validate};
pub use analysis::complexity::{ComplexityLevel, ComplexityResult, score};
pub use io::configuration::{PatternConfig, Preset};
pub use io::error::{PatternError, Result};
pub use spatial::segments::count_crossings;
