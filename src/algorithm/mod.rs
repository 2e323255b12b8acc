/// Fixed-size dot membership set used for duplicate detection
pub mod bitset;
/// Comma-separated textual form of patterns
pub mod codec;
/// Seeded random pattern generation
pub mod generator;
/// Length, range and uniqueness checks on patterns
pub mod validation;
