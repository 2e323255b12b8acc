//! Grid geometry for traced patterns
//!
//! This module contains spatial-related functionality including:
//! - Index and coordinate conversion on square dot grids
//! - Segment construction, orientation and crossing detection

/// Index and coordinate conversion, corner lookup and grid bounds
pub mod coordinates;
/// Segment intersection and crossing counts
pub mod segments;

pub use coordinates::Coordinate;
pub use segments::{Segment, count_crossings};
