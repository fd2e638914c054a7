// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` handles insertion, duplicate suppression, capacity
//! eviction and deadline-based removal of toasts. All mutations go through
//! this API; nothing else touches the underlying queue, which is what keeps
//! the dedup and capacity invariants consistent on the single UI thread.

use super::entry::{Toast, ToastId, ToastKind};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;

/// Default maximum number of concurrent toasts.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Messages for toast state changes, emitted by the renderer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// An inline action button was clicked.
    Action(ToastId, String),
    /// Tick for checking auto-dismiss deadlines.
    Tick,
}

/// An action click surfaced back to the host for handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInvoked {
    pub id: ToastId,
    pub label: String,
}

/// A partial update merged into an existing toast.
///
/// Only display fields can change after dispatch; identity, kind and timing
/// are fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct ToastPatch {
    pub title: Option<String>,
    pub message: Option<String>,
}

/// Manages the toast queue.
///
/// Insertion order is preserved for display (newest appended). The queue
/// never exceeds its capacity and dispatch never fails: at capacity the
/// oldest non-persistent entry is evicted, or the oldest persistent one if
/// nothing else is left.
#[derive(Debug)]
pub struct Manager {
    /// Active toasts, oldest first.
    entries: VecDeque<Toast>,
    /// Capacity; dispatch evicts to stay under it.
    max_toasts: usize,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a manager with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_TOASTS)
    }

    /// Creates a manager with a custom capacity (raised to at least 1).
    #[must_use]
    pub fn with_capacity(max_toasts: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_toasts: max_toasts.max(1),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for logging warning and error toasts.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Dispatches a toast, returning its ID. Never fails.
    ///
    /// Any active toast with a byte-identical message is removed first, so
    /// repeated failures (e.g. the same network error) collapse into one
    /// entry. If the queue is still at capacity after dedup, the oldest
    /// non-persistent entry is evicted; if every entry is persistent, the
    /// oldest persistent one goes instead.
    pub fn dispatch(&mut self, toast: Toast) -> ToastId {
        if let Some(handle) = &self.diagnostics {
            match toast.kind() {
                ToastKind::Warning => handle.log_warning(toast.message()),
                ToastKind::Error => handle.log_error(toast.message()),
                ToastKind::Success | ToastKind::Info => {}
            }
        }

        // Duplicate suppression keys on the message string alone.
        self.entries.retain(|t| t.message() != toast.message());

        if self.entries.len() >= self.max_toasts {
            self.evict_one();
        }

        let id = toast.id();
        self.entries.push_back(toast);
        id
    }

    /// Dispatches a success toast with default settings.
    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.dispatch(Toast::success(message))
    }

    /// Dispatches an info toast with default settings.
    pub fn info(&mut self, message: impl Into<String>) -> ToastId {
        self.dispatch(Toast::info(message))
    }

    /// Dispatches a warning toast with default settings.
    pub fn warning(&mut self, message: impl Into<String>) -> ToastId {
        self.dispatch(Toast::warning(message))
    }

    /// Dispatches an error toast with default settings.
    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.dispatch(Toast::error(message))
    }

    /// Removes a toast by ID.
    ///
    /// Returns `true` if the toast was found. Removing an absent ID is a
    /// silent no-op, which makes the race between a deadline sweep and a
    /// manual dismiss click harmless.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.entries.iter().position(|t| t.id() == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes all toasts.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes all toasts of the given kind.
    pub fn clear_kind(&mut self, kind: ToastKind) {
        self.entries.retain(|t| t.kind() != kind);
    }

    /// Merges display fields into an existing toast.
    ///
    /// Returns `true` if the toast was found; a stale ID is a no-op.
    pub fn update(&mut self, id: ToastId, patch: ToastPatch) -> bool {
        let Some(toast) = self.entries.iter_mut().find(|t| t.id() == id) else {
            return false;
        };
        if let Some(title) = patch.title {
            *toast.title_mut() = title;
        }
        if let Some(message) = patch.message {
            *toast.message_mut() = message;
        }
        true
    }

    /// Flips the loading flag of an action button on an existing toast.
    ///
    /// Returns `true` if both the toast and the labelled action exist.
    pub fn set_action_loading(&mut self, id: ToastId, label: &str, loading: bool) -> bool {
        let Some(toast) = self.entries.iter_mut().find(|t| t.id() == id) else {
            return false;
        };
        match toast.actions_mut().iter_mut().find(|a| a.label() == label) {
            Some(action) => {
                action.set_loading(loading);
                true
            }
            None => false,
        }
    }

    /// Removes every toast whose deadline has passed.
    ///
    /// Called from the host's timer subscription. Each entry carries its own
    /// deadline, so one sweep serves any number of staggered timers.
    pub fn tick(&mut self) {
        self.entries.retain(|t| !t.should_auto_dismiss());
    }

    /// Handles a renderer message.
    ///
    /// Action clicks are returned to the host, which owns the follow-up
    /// behavior (retry, navigation, ...).
    pub fn handle_message(&mut self, message: &Message) -> Option<ActionInvoked> {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
                None
            }
            Message::Action(id, label) => {
                if let Some(handle) = &self.diagnostics {
                    handle.log_action(label.clone());
                }
                Some(ActionInvoked {
                    id: *id,
                    label: label.clone(),
                })
            }
            Message::Tick => {
                self.tick();
                None
            }
        }
    }

    /// Returns the active toasts in display order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.max_toasts
    }

    /// Returns whether any active toast carries a deadline.
    ///
    /// Lets the host run its tick subscription only while there is
    /// something to expire.
    #[must_use]
    pub fn has_pending_dismissals(&self) -> bool {
        self.entries.iter().any(|t| !t.is_persistent())
    }

    /// Evicts one entry to make room: the oldest non-persistent entry, or
    /// the oldest persistent one if that is all that remains.
    fn evict_one(&mut self) {
        if let Some(pos) = self.entries.iter().position(|t| !t.is_persistent()) {
            self.entries.remove(pos);
        } else {
            self.entries.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::toast::entry::ToastAction;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
        assert_eq!(manager.max_toasts(), DEFAULT_MAX_TOASTS);
    }

    #[test]
    fn dispatch_appends_in_insertion_order() {
        let mut manager = Manager::new();
        manager.success("first");
        manager.info("second");

        let messages: Vec<_> = manager.iter().map(|t| t.message().to_string()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn queue_never_exceeds_capacity() {
        let mut manager = Manager::with_capacity(5);
        for i in 0..20 {
            manager.success(format!("toast-{i}"));
            assert!(manager.len() <= 5);
        }
    }

    #[test]
    fn sixth_dispatch_evicts_the_oldest() {
        let mut manager = Manager::with_capacity(5);
        for i in 0..6 {
            manager.success(format!("toast-{i}"));
        }

        let messages: Vec<_> = manager.iter().map(|t| t.message().to_string()).collect();
        assert_eq!(
            messages,
            vec!["toast-1", "toast-2", "toast-3", "toast-4", "toast-5"]
        );
    }

    #[test]
    fn eviction_skips_persistent_entries_first() {
        let mut manager = Manager::with_capacity(3);
        manager.error("stays"); // errors are persistent by default
        manager.success("oldest transient");
        manager.success("newer transient");
        manager.success("overflow");

        let messages: Vec<_> = manager.iter().map(|t| t.message().to_string()).collect();
        assert_eq!(messages, vec!["stays", "newer transient", "overflow"]);
    }

    #[test]
    fn all_persistent_still_makes_room() {
        let mut manager = Manager::with_capacity(2);
        manager.error("first error");
        manager.error("second error");
        manager.error("third error");

        let messages: Vec<_> = manager.iter().map(|t| t.message().to_string()).collect();
        assert_eq!(messages, vec!["second error", "third error"]);
    }

    #[test]
    fn duplicate_message_keeps_only_the_newest() {
        let mut manager = Manager::new();
        let first = manager.error("Network down");
        let second = manager.error("Network down");

        assert_eq!(manager.len(), 1);
        let survivor = manager.iter().next().unwrap();
        assert_eq!(survivor.id(), second);
        assert_ne!(survivor.id(), first);
        assert_eq!(survivor.title(), "Error");
        assert_eq!(survivor.message(), "Network down");
    }

    #[test]
    fn dedup_ignores_title_and_kind() {
        // Keying on the message alone is deliberate; see DESIGN.md.
        let mut manager = Manager::new();
        manager.dispatch(Toast::success("Saved").with_title("Employees"));
        manager.dispatch(Toast::info("Saved"));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.success("bye");

        assert!(manager.remove(id));
        assert!(!manager.remove(id));
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn persistent_toast_survives_tick() {
        let mut manager = Manager::new();
        let id = manager.error("kept");
        manager.dispatch(Toast::success("pinned").persistent());

        manager.tick();
        assert_eq!(manager.len(), 2);

        assert!(manager.remove(id));
    }

    #[test]
    fn tick_removes_expired_entries() {
        let mut manager = Manager::new();
        manager.dispatch(Toast::info("gone").duration(Duration::ZERO));
        manager.success("still fresh");

        manager.tick();
        let messages: Vec<_> = manager.iter().map(|t| t.message().to_string()).collect();
        assert_eq!(messages, vec!["still fresh"]);
    }

    #[test]
    fn tick_then_manual_remove_is_safe() {
        let mut manager = Manager::new();
        let id = manager.dispatch(Toast::info("raced").duration(Duration::ZERO));

        // Deadline sweep wins the race; the click arrives afterwards.
        manager.tick();
        assert!(!manager.remove(id));
    }

    #[test]
    fn clear_kind_leaves_other_kinds() {
        let mut manager = Manager::new();
        manager.error("e1");
        manager.error("e2");
        manager.success("s1");

        manager.clear_kind(ToastKind::Error);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.iter().next().unwrap().kind(), ToastKind::Success);
    }

    #[test]
    fn update_merges_display_fields() {
        let mut manager = Manager::new();
        let id = manager.success("uploading");

        let updated = manager.update(
            id,
            ToastPatch {
                message: Some("uploaded".into()),
                ..ToastPatch::default()
            },
        );
        assert!(updated);
        assert_eq!(manager.iter().next().unwrap().message(), "uploaded");
        assert_eq!(manager.iter().next().unwrap().title(), "Success");
    }

    #[test]
    fn update_of_stale_id_is_a_noop() {
        let mut manager = Manager::new();
        let id = manager.success("x");
        manager.remove(id);
        assert!(!manager.update(id, ToastPatch::default()));
    }

    #[test]
    fn set_action_loading_flips_only_the_named_button() {
        let mut manager = Manager::new();
        let id = manager.dispatch(
            Toast::error("Network down")
                .with_action(ToastAction::new("Retry"))
                .with_action(ToastAction::new("Details")),
        );

        assert!(manager.set_action_loading(id, "Retry", true));
        let toast = manager.iter().next().unwrap();
        assert!(toast.actions()[0].is_loading());
        assert!(!toast.actions()[1].is_loading());

        assert!(!manager.set_action_loading(id, "No such action", true));
    }

    #[test]
    fn handle_message_dismiss_and_action() {
        let mut manager = Manager::new();
        let id = manager.dispatch(Toast::error("boom").with_action(ToastAction::new("Retry")));

        let invoked = manager.handle_message(&Message::Action(id, "Retry".into()));
        assert_eq!(
            invoked,
            Some(ActionInvoked {
                id,
                label: "Retry".into()
            })
        );
        assert_eq!(manager.len(), 1);

        manager.handle_message(&Message::Dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn has_pending_dismissals_gates_on_deadlines() {
        let mut manager = Manager::new();
        assert!(!manager.has_pending_dismissals());

        manager.error("no deadline");
        assert!(!manager.has_pending_dismissals());

        manager.success("deadline");
        assert!(manager.has_pending_dismissals());
    }

    #[test]
    fn warning_and_error_dispatches_reach_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.success("quiet");
        manager.warning("low disk");
        manager.error("save failed");

        collector.process_pending();
        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    message: "low disk".into()
                },
                DiagnosticEventKind::Error {
                    message: "save failed".into()
                },
            ]
        );
    }
}
