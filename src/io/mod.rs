/// Command-line parsing and command execution
pub mod cli;
/// Constants, constraint sets and presets
pub mod configuration;
/// Error type for non-domain failures
pub mod error;
/// Progress bars for batch commands
pub mod progress;
/// Text diagrams of patterns on the grid
pub mod visualization;
