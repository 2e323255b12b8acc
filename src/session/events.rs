//! Synchronous publish/subscribe bus for capture session notifications
//!
//! Listeners are invoked on the publishing thread, in subscription order.
//! A listener reports failure by returning an error; the failure is collected
//! and delivery continues with the remaining listeners.

use crate::analysis::complexity::ComplexityResult;
use crate::io::configuration::PatternConfig;
use crate::session::capture::Mode;
use std::fmt;

/// Notification emitted by a capture session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternEvent {
    /// A gesture began on a dot
    PatternStart {
        /// Dot the gesture began on
        index: i64,
        /// Pattern so far
        pattern: Vec<i64>,
    },
    /// A dot was appended to the gesture in progress
    PatternChange {
        /// Dot just added
        index: i64,
        /// Pattern so far
        pattern: Vec<i64>,
    },
    /// A finished gesture passed validation
    PatternComplete {
        /// Finished pattern
        pattern: Vec<i64>,
        /// Its complexity
        complexity: ComplexityResult,
    },
    /// A finished gesture failed validation
    PatternError {
        /// Rejected pattern
        pattern: Vec<i64>,
        /// Validation message
        error: String,
    },
    /// A pattern was loaded programmatically
    PatternLoaded {
        /// Loaded pattern
        pattern: Vec<i64>,
    },
    /// The current pattern was discarded
    PatternClear,
    /// A programmatic load was rejected
    Error {
        /// Validation message
        error: String,
    },
    /// The session switched between drawing and viewing
    ModeChange {
        /// New mode
        mode: Mode,
    },
    /// Input was enabled or disabled
    DisabledChange {
        /// Whether input is now ignored
        disabled: bool,
    },
    /// The constraints were replaced
    ConfigChange {
        /// Constraints before the change
        old_config: PatternConfig,
        /// Constraints after the change
        new_config: PatternConfig,
    },
}

impl PatternEvent {
    /// Kind used to route this event to subscribers
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::PatternStart { .. } => EventKind::PatternStart,
            Self::PatternChange { .. } => EventKind::PatternChange,
            Self::PatternComplete { .. } => EventKind::PatternComplete,
            Self::PatternError { .. } => EventKind::PatternError,
            Self::PatternLoaded { .. } => EventKind::PatternLoaded,
            Self::PatternClear => EventKind::PatternClear,
            Self::Error { .. } => EventKind::Error,
            Self::ModeChange { .. } => EventKind::ModeChange,
            Self::DisabledChange { .. } => EventKind::DisabledChange,
            Self::ConfigChange { .. } => EventKind::ConfigChange,
        }
    }
}

/// Routing key for [`PatternEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// See [`PatternEvent::PatternStart`]
    PatternStart,
    /// See [`PatternEvent::PatternChange`]
    PatternChange,
    /// See [`PatternEvent::PatternComplete`]
    PatternComplete,
    /// See [`PatternEvent::PatternError`]
    PatternError,
    /// See [`PatternEvent::PatternLoaded`]
    PatternLoaded,
    /// See [`PatternEvent::PatternClear`]
    PatternClear,
    /// See [`PatternEvent::Error`]
    Error,
    /// See [`PatternEvent::ModeChange`]
    ModeChange,
    /// See [`PatternEvent::DisabledChange`]
    DisabledChange,
    /// See [`PatternEvent::ConfigChange`]
    ConfigChange,
}

impl EventKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 10] = [
        Self::PatternStart,
        Self::PatternChange,
        Self::PatternComplete,
        Self::PatternError,
        Self::PatternLoaded,
        Self::PatternClear,
        Self::Error,
        Self::ModeChange,
        Self::DisabledChange,
        Self::ConfigChange,
    ];
}

/// Failure reported by a listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError {
    /// Description of what went wrong
    pub reason: String,
}

impl ListenerError {
    /// Create a listener error from any message
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ListenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for ListenerError {}

/// Handle returned by a subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Listener failure collected during one publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Listener that failed
    pub listener: ListenerId,
    /// Kind of event being delivered
    pub kind: EventKind,
    /// What the listener reported
    pub error: ListenerError,
}

/// Callback invoked for each delivered event
pub type Listener = Box<dyn FnMut(&PatternEvent) -> Result<(), ListenerError>>;

struct Subscription {
    id: ListenerId,
    kind: EventKind,
    once: bool,
    listener: Listener,
}

/// Registry of listeners keyed by event kind
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.subscriptions.len())
            .field("kinds", &self.event_kinds())
            .finish()
    }
}

impl EventBus {
    /// Create a bus with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every event of `kind`
    pub fn subscribe<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&PatternEvent) -> Result<(), ListenerError> + 'static,
    {
        self.register(kind, false, Box::new(listener))
    }

    /// Register a listener that is removed after its first delivery
    pub fn subscribe_once<F>(&mut self, kind: EventKind, listener: F) -> ListenerId
    where
        F: FnMut(&PatternEvent) -> Result<(), ListenerError> + 'static,
    {
        self.register(kind, true, Box::new(listener))
    }

    fn register(&mut self, kind: EventKind, once: bool, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            kind,
            once,
            listener,
        });
        id
    }

    /// Remove one listener, returning whether it was registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Remove every listener for `kind`, returning how many were removed
    pub fn unsubscribe_kind(&mut self, kind: EventKind) -> usize {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.kind != kind);
        before - self.subscriptions.len()
    }

    /// Deliver an event to every listener of its kind
    ///
    /// Returns the failures reported by listeners; an empty vector means every
    /// listener accepted the event.
    pub fn publish(&mut self, event: &PatternEvent) -> Vec<ListenerFailure> {
        let kind = event.kind();
        let mut failures = Vec::new();
        let mut delivered_once = Vec::new();

        for subscription in self.subscriptions.iter_mut().filter(|s| s.kind == kind) {
            if let Err(error) = (subscription.listener)(event) {
                failures.push(ListenerFailure {
                    listener: subscription.id,
                    kind,
                    error,
                });
            }
            if subscription.once {
                delivered_once.push(subscription.id);
            }
        }

        if !delivered_once.is_empty() {
            self.subscriptions
                .retain(|s| !delivered_once.contains(&s.id));
        }

        failures
    }

    /// Number of listeners registered for `kind`
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.subscriptions.iter().filter(|s| s.kind == kind).count()
    }

    /// Check if any listener is registered for `kind`
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.subscriptions.iter().any(|s| s.kind == kind)
    }

    /// Kinds that currently have listeners, sorted and without repeats
    pub fn event_kinds(&self) -> Vec<EventKind> {
        let mut kinds: Vec<EventKind> = self.subscriptions.iter().map(|s| s.kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    }

    /// Remove every listener
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}
