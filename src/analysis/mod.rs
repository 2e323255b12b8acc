//! Analysis modules for scoring patterns and summarizing batches

/// Complexity scoring from length, direction changes, crossings and corners
pub mod complexity;
/// Per-pattern summaries and level histograms
pub mod statistics;
