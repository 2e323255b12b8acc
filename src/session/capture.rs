//! Headless capture session for one drawing surface
//!
//! The session turns a stream of dot hits into a single authoritative pattern,
//! runs validation and scoring when the gesture ends, and publishes every
//! state change on its [`EventBus`]. Input arriving while the session is
//! disabled, in view mode, or outside a gesture is ignored.

use crate::algorithm::bitset::DotBitset;
use crate::algorithm::validation::{validate, validate_with};
use crate::analysis::complexity::{ComplexityResult, score};
use crate::io::configuration::PatternConfig;
use crate::session::events::{EventBus, ListenerFailure, PatternEvent};
use crate::spatial::coordinates::is_on_grid;

/// Whether the session accepts gestures or only displays a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Gestures build a new pattern
    #[default]
    Draw,
    /// A loaded pattern is shown and input is ignored
    View,
}

/// Result of ending a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The pattern passed validation
    Accepted {
        /// Finished pattern
        pattern: Vec<i64>,
        /// Its complexity
        complexity: ComplexityResult,
    },
    /// The pattern failed validation
    Rejected {
        /// Rejected pattern
        pattern: Vec<i64>,
        /// Validation message
        error: String,
    },
}

/// Gesture state machine with event notification
#[derive(Debug)]
pub struct PatternSession {
    config: PatternConfig,
    pattern: Vec<i64>,
    visited: DotBitset,
    drawing: bool,
    mode: Mode,
    disabled: bool,
    events: EventBus,
    failures: Vec<ListenerFailure>,
}

impl PatternSession {
    /// Create an idle session in draw mode
    pub fn new(config: PatternConfig) -> Self {
        Self {
            config,
            pattern: Vec::new(),
            visited: DotBitset::new(config.grid_size),
            drawing: false,
            mode: Mode::Draw,
            disabled: false,
            events: EventBus::new(),
            failures: Vec::new(),
        }
    }

    /// Start a gesture on `index`, discarding any previous pattern
    ///
    /// Returns whether the input was accepted.
    pub fn begin(&mut self, index: i64) -> bool {
        if self.disabled || self.mode == Mode::View || !is_on_grid(index, self.config.grid_size)
        {
            return false;
        }

        self.drawing = true;
        self.reset_pattern();
        self.push_dot(index);
        self.emit(PatternEvent::PatternStart {
            index,
            pattern: self.pattern.clone(),
        });
        true
    }

    /// Append `index` to the gesture in progress
    ///
    /// Dots already in the pattern are skipped, as are hits outside a gesture.
    /// Returns whether the dot was appended.
    pub fn extend(&mut self, index: i64) -> bool {
        if self.disabled || !self.drawing || self.visited.contains(index) {
            return false;
        }
        if !self.push_dot(index) {
            return false;
        }

        self.emit(PatternEvent::PatternChange {
            index,
            pattern: self.pattern.clone(),
        });
        true
    }

    /// Keyboard selection: starts a gesture when idle, extends it otherwise
    pub fn select(&mut self, index: i64) -> bool {
        if self.disabled || self.mode == Mode::View {
            return false;
        }
        if self.drawing {
            self.extend(index)
        } else {
            self.begin(index)
        }
    }

    /// End the gesture in progress, validating and scoring the pattern
    ///
    /// Returns `None` when no gesture was in progress.
    pub fn finish(&mut self) -> Option<SessionOutcome> {
        if self.disabled || !self.drawing {
            return None;
        }
        self.drawing = false;

        let pattern = self.pattern.clone();
        let validation = validate_with(&pattern, &self.config);
        if !validation.is_valid {
            self.emit(PatternEvent::PatternError {
                pattern: pattern.clone(),
                error: validation.message.clone(),
            });
            return Some(SessionOutcome::Rejected {
                pattern,
                error: validation.message,
            });
        }

        let complexity = score(&pattern, self.config.grid_size);
        self.emit(PatternEvent::PatternComplete {
            pattern: pattern.clone(),
            complexity: complexity.clone(),
        });
        Some(SessionOutcome::Accepted {
            pattern,
            complexity,
        })
    }

    /// Replace the pattern without a gesture
    ///
    /// Any non-empty pattern that fits the grid and the maximum length is
    /// accepted. Returns whether the pattern was loaded.
    pub fn load(&mut self, pattern: &[i64]) -> bool {
        let validation = validate(
            pattern,
            1,
            self.config.max_points,
            self.config.grid_size,
        );
        if !validation.is_valid {
            self.emit(PatternEvent::Error {
                error: validation.message,
            });
            return false;
        }

        self.drawing = false;
        self.reset_pattern();
        for &index in pattern {
            self.push_dot(index);
        }
        self.emit(PatternEvent::PatternLoaded {
            pattern: self.pattern.clone(),
        });
        true
    }

    /// Discard the current pattern and any gesture in progress
    pub fn clear(&mut self) {
        self.drawing = false;
        self.reset_pattern();
        self.emit(PatternEvent::PatternClear);
    }

    /// Switch to draw mode, enable input and clear the pattern
    pub fn enter_draw_mode(&mut self) {
        self.mode = Mode::Draw;
        self.disabled = false;
        self.clear();
        self.emit(PatternEvent::ModeChange { mode: self.mode });
    }

    /// Switch to view mode showing `pattern`
    ///
    /// Returns whether the pattern could be loaded. The mode changes either way.
    pub fn enter_view_mode(&mut self, pattern: &[i64]) -> bool {
        self.mode = Mode::View;
        self.disabled = true;
        let loaded = self.load(pattern);
        self.emit(PatternEvent::ModeChange { mode: self.mode });
        loaded
    }

    /// Enable or disable input
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.emit(PatternEvent::DisabledChange { disabled });
    }

    /// Replace the constraints
    ///
    /// A grid size change clears the pattern, since its indices no longer
    /// name the same dots.
    pub fn update_config(&mut self, config: PatternConfig) {
        let old_config = self.config;
        self.config = config;

        if old_config.grid_size != config.grid_size {
            self.drawing = false;
            self.pattern.clear();
            self.visited = DotBitset::new(config.grid_size);
        }

        self.emit(PatternEvent::ConfigChange {
            old_config,
            new_config: config,
        });
    }

    /// Current pattern, in traversal order
    pub fn pattern(&self) -> &[i64] {
        &self.pattern
    }

    /// Current constraints
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Current mode
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a gesture is in progress
    pub const fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Whether input is being ignored
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Event bus for subscribing to session notifications
    pub const fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Take the listener failures collected since the last call
    pub fn take_listener_failures(&mut self) -> Vec<ListenerFailure> {
        std::mem::take(&mut self.failures)
    }

    fn push_dot(&mut self, index: i64) -> bool {
        let added = self.visited.insert(index);
        if added {
            self.pattern.push(index);
        }
        added
    }

    fn reset_pattern(&mut self) {
        self.pattern.clear();
        self.visited.clear();
    }

    fn emit(&mut self, event: PatternEvent) {
        let failures = self.events.publish(&event);
        self.failures.extend(failures);
    }
}
