// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collection for notification activity.
//!
//! The collector receives events from the notification queues through a
//! bounded channel and stores them in a memory-bounded circular buffer.
//! Warning and error toasts are recorded here so a support report can show
//! what the user was told, and when.
//!
//! [`DiagnosticsHandle`] is cheap to clone and never blocks: if the channel
//! is full the event is dropped (backpressure protection for the UI thread).
//! The owning [`DiagnosticsCollector`] drains the channel into its buffer on
//! each UI tick via [`DiagnosticsCollector::process_pending`].

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::collections::VecDeque;

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Default circular buffer capacity.
pub const DEFAULT_BUFFER_CAPACITY: usize = 500;

/// Kind of diagnostic event recorded by the notification system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A warning toast was dispatched.
    Warning { message: String },
    /// An error toast was dispatched.
    Error { message: String },
    /// A toast action or popup button was invoked.
    Action { label: String },
}

/// A single timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// A circular buffer with fixed capacity.
///
/// When the buffer is full, pushing a new element evicts the oldest one.
/// Elements are stored in chronological order (oldest first).
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and safe to hand to any component. Sends are non-blocking;
/// events are dropped if the channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a warning message.
    pub fn log_warning(&self, message: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: message.into(),
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error message.
    pub fn log_error(&self, message: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: message.into(),
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an invoked toast action or popup button.
    pub fn log_action(&self, label: impl Into<String>) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Action {
            label: label.into(),
        });
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector for diagnostic events.
///
/// Owns the buffer and the receiving end of the event channel. The host
/// calls [`process_pending`](Self::process_pending) periodically (on each
/// UI tick) to drain the channel.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains all pending events from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns whether events are waiting in the channel.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.event_rx.is_empty()
    }

    /// Returns the recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_evicts_oldest_at_capacity() {
        let mut buffer = CircularBuffer::new(3);
        for i in 0..5 {
            buffer.push(i);
        }
        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let buffer: CircularBuffer<i32> = CircularBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
    }

    #[test]
    fn handle_events_reach_collector_after_drain() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_warning("disk almost full");
        handle.log_error("save failed");
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);

        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds[0],
            DiagnosticEventKind::Warning {
                message: "disk almost full".into()
            }
        );
        assert_eq!(
            kinds[1],
            DiagnosticEventKind::Error {
                message: "save failed".into()
            }
        );
    }

    #[test]
    fn has_pending_reflects_the_channel() {
        let mut collector = DiagnosticsCollector::default();
        assert!(!collector.has_pending());

        collector.handle().log_error("boom");
        assert!(collector.has_pending());

        collector.process_pending();
        assert!(!collector.has_pending());
    }

    #[test]
    fn handle_is_clone() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let clone = handle.clone();
        clone.log_action("retry");
    }

    #[test]
    fn events_dropped_when_channel_full_do_not_block() {
        let mut collector = DiagnosticsCollector::new(10);
        let handle = collector.handle();

        // Over-fill the channel; sends must stay non-blocking.
        for i in 0..300 {
            handle.log_action(format!("click-{i}"));
        }
        collector.process_pending();
        assert!(collector.len() <= 10);
    }
}
