// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` struct and `ToastKind` enum used
//! throughout the toast subsystem.

use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind determines the default title, display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Operation completed successfully (5s duration).
    #[default]
    Success,
    /// Informational message (5s duration).
    Info,
    /// Warning that doesn't block operation (7s duration).
    Warning,
    /// Error requiring attention (manual dismiss).
    Error,
}

impl ToastKind {
    /// Returns the default title shown when the dispatcher was not given one.
    #[must_use]
    pub fn default_title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Info => "Information",
            ToastKind::Warning => "Warning",
            ToastKind::Error => "Error",
        }
    }

    /// Returns the auto-dismiss duration for this kind.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            ToastKind::Success | ToastKind::Info => Some(Duration::from_secs(5)),
            ToastKind::Warning => Some(Duration::from_secs(7)),
            ToastKind::Error => None, // Manual dismiss required
        }
    }
}

/// Visual emphasis of a toast action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// An inline action button on a toast (e.g. "Retry" on a network error).
///
/// Clicks are surfaced to the host as [`ActionInvoked`](super::ActionInvoked)
/// events; the `loading` flag is the only sub-state that mutates after
/// creation, while the host's follow-up work is in flight.
#[derive(Debug, Clone)]
pub struct ToastAction {
    label: String,
    style: ActionStyle,
    loading: bool,
}

impl ToastAction {
    /// Creates an action with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ActionStyle::default(),
            loading: false,
        }
    }

    /// Sets the visual style of the action button.
    #[must_use]
    pub fn style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn action_style(&self) -> ActionStyle {
        self.style
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// A transient notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast.
    id: ToastId,
    /// Kind (determines default title, duration and styling).
    kind: ToastKind,
    /// Title line; defaults to the kind title.
    title: String,
    /// Body text.
    message: String,
    /// Custom auto-dismiss duration (overrides the kind default).
    duration: Option<Duration>,
    /// If true, no auto-dismiss deadline is ever set.
    persistent: bool,
    /// When this toast was created.
    created_at: Instant,
    /// Inline action buttons, in display order.
    actions: Vec<ToastAction>,
}

impl Toast {
    /// Creates a new toast with the given kind and message.
    ///
    /// Dispatch is permissive: an empty message is tolerated rather than
    /// rejected, so a malformed call site still produces a visible toast.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            kind,
            title: kind.default_title().to_string(),
            message: message.into(),
            duration: None,
            persistent: false,
            created_at: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Replaces the default kind title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the kind default.
    ///
    /// Useful to keep an error visible for a bounded time, or to give a
    /// long success message more room to be read.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Marks the toast persistent: it is only removed explicitly or by
    /// capacity eviction, never by a deadline.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    /// Appends an inline action button.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn actions(&self) -> &[ToastAction] {
        &self.actions
    }

    /// Returns when this toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this toast.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the duration after which this toast auto-dismisses, if any.
    ///
    /// The explicit `persistent` flag wins over everything; otherwise a
    /// per-toast duration override wins over the kind default.
    #[must_use]
    pub fn effective_duration(&self) -> Option<Duration> {
        if self.persistent {
            None
        } else {
            self.duration.or_else(|| self.kind.auto_dismiss_duration())
        }
    }

    /// Returns whether this toast never auto-dismisses.
    ///
    /// Persistent entries are evicted last when the queue is at capacity.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.effective_duration().is_none()
    }

    /// Returns whether this toast's deadline has passed.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        match self.effective_duration() {
            Some(d) => self.age() >= d,
            None => false,
        }
    }

    /// Whether the builder chose explicit timing (a duration override or
    /// the persistent flag), as opposed to inheriting a kind default.
    pub(crate) fn has_explicit_timing(&self) -> bool {
        self.persistent || self.duration.is_some()
    }

    pub(crate) fn title_mut(&mut self) -> &mut String {
        &mut self.title
    }

    pub(crate) fn message_mut(&mut self) -> &mut String {
        &mut self.message
    }

    pub(crate) fn actions_mut(&mut self) -> &mut [ToastAction] {
        &mut self.actions
    }
}
