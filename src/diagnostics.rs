// SPDX-License-Identifier: MPL-2.0
//! Lightweight diagnostics hook for flash lifecycle events.
//!
//! The stack reports shown/closed events through a cloneable
//! [`DiagnosticsHandle`] backed by a memory-bounded ring buffer. Hosts
//! that do not install a handle pay nothing; no event crosses a thread
//! boundary unless the host shares the handle itself.

use crate::message::Kind;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Default number of retained event records.
const DEFAULT_CAPACITY: usize = 256;

/// A flash lifecycle event worth recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashEvent {
    /// A unit became visible in the stack.
    Shown { kind: Kind },
    /// A unit left the stack.
    Closed {
        kind: Kind,
        /// `true` for an explicit close action, `false` for timer expiry
        /// or external teardown.
        manual: bool,
    },
}

/// One recorded event with its monotonic timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub event: FlashEvent,
    pub at: Instant,
}

/// Cloneable handle to a bounded in-memory event log.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<VecDeque<EventRecord>>>,
    capacity: usize,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl DiagnosticsHandle {
    /// Creates a handle retaining at most `capacity` records; the oldest
    /// record is evicted first. A zero capacity records nothing.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(1024)))),
            capacity,
        }
    }

    /// Records an event at the current instant.
    pub fn record(&self, event: FlashEvent) {
        if self.capacity == 0 {
            return;
        }
        let record = EventRecord {
            event,
            at: Instant::now(),
        };
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(record);
        }
    }

    /// Returns a snapshot of the retained records, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buffer| buffer.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_order() {
        let handle = DiagnosticsHandle::default();
        handle.record(FlashEvent::Shown { kind: Kind::Info });
        handle.record(FlashEvent::Closed {
            kind: Kind::Info,
            manual: true,
        });

        let events: Vec<FlashEvent> = handle.events().into_iter().map(|r| r.event).collect();
        assert_eq!(
            events,
            [
                FlashEvent::Shown { kind: Kind::Info },
                FlashEvent::Closed {
                    kind: Kind::Info,
                    manual: true
                }
            ]
        );
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let handle = DiagnosticsHandle::new(2);
        handle.record(FlashEvent::Shown { kind: Kind::Success });
        handle.record(FlashEvent::Shown { kind: Kind::Warning });
        handle.record(FlashEvent::Shown { kind: Kind::Error });

        let kinds: Vec<Kind> = handle
            .events()
            .into_iter()
            .map(|r| match r.event {
                FlashEvent::Shown { kind } | FlashEvent::Closed { kind, .. } => kind,
            })
            .collect();
        assert_eq!(kinds, [Kind::Warning, Kind::Error]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let handle = DiagnosticsHandle::new(0);
        handle.record(FlashEvent::Shown { kind: Kind::Info });
        assert!(handle.is_empty());
    }

    #[test]
    fn clones_share_the_buffer() {
        let handle = DiagnosticsHandle::default();
        let clone = handle.clone();
        clone.record(FlashEvent::Shown { kind: Kind::Info });
        assert_eq!(handle.len(), 1);
    }
}
