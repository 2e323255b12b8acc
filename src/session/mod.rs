//! Headless gesture capture and notification
//!
//! Mirrors what a drawing widget does between pointer events, without any
//! rendering: accumulate dots, validate and score on release, notify listeners.

/// Gesture state machine driving validation and scoring
pub mod capture;
/// Publish/subscribe bus for session notifications
pub mod events;

pub use capture::{Mode, PatternSession, SessionOutcome};
pub use events::{EventBus, EventKind, PatternEvent};
