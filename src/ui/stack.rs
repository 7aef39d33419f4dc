// SPDX-License-Identifier: MPL-2.0
//! The client-side flash container.
//!
//! A [`Stack`] owns one [`DismissController`] per displayed unit, keeps
//! units in the order they were pushed, limits how many are visible at
//! once, and bridges the server-side pieces ([`FlashStore`] drains and
//! [`Fragment`] application) into displayed toasts.

use super::dismiss::DismissController;
use crate::config::DEFAULT_MAX_VISIBLE;
use crate::diagnostics::{DiagnosticsHandle, FlashEvent};
use crate::dispatch::{Fragment, CONTAINER_ID};
use crate::message::DisplayUnit;
use crate::store::FlashStore;
use std::collections::VecDeque;
use std::time::Instant;

/// Unique identifier for a displayed toast.
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

/// Messages for toast state changes, Elm-style.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Explicit close action on a specific toast.
    Dismiss(ToastId),
    /// Pointer entered a toast; its timer pauses.
    PointerEnter(ToastId),
    /// Pointer left a toast; a fresh full-duration timer starts.
    PointerLeave(ToastId),
    /// Periodic tick driving every controller.
    Tick,
}

/// One displayed unit with its controller.
#[derive(Debug, Clone)]
pub struct ToastEntry {
    id: ToastId,
    unit: DisplayUnit,
    controller: DismissController,
    manual_close: bool,
}

impl ToastEntry {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn unit(&self) -> &DisplayUnit {
        &self.unit
    }

    #[must_use]
    pub fn controller(&self) -> &DismissController {
        &self.controller
    }
}

/// Ordered container of live toasts.
#[derive(Debug, Default)]
pub struct Stack {
    visible: Vec<ToastEntry>,
    queue: VecDeque<DisplayUnit>,
    max_visible: Option<usize>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Stack {
    /// Creates an empty stack with the default visible limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_visible: Some(DEFAULT_MAX_VISIBLE),
            ..Self::default()
        }
    }

    /// Creates an empty stack showing at most `limit` toasts, or without
    /// any limit when `None`.
    #[must_use]
    pub fn with_max_visible(limit: Option<usize>) -> Self {
        Self {
            max_visible: limit,
            ..Self::default()
        }
    }

    /// Installs a diagnostics handle receiving lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a unit. Displayed immediately if below the visible limit,
    /// queued otherwise; queued units appear in push order.
    pub fn push(&mut self, unit: DisplayUnit, now: Instant) {
        if self.has_capacity() {
            self.attach(unit, now);
        } else {
            self.queue.push_back(unit);
        }
    }

    /// Applies a dispatcher fragment. Fragments targeting other containers
    /// are ignored; this stack only owns [`CONTAINER_ID`].
    pub fn apply(&mut self, fragment: Fragment, now: Instant) {
        if fragment.target() == CONTAINER_ID {
            let unit = fragment.unit().clone();
            self.push(unit, now);
        }
    }

    /// Drains a flash store into the stack and completes its render cycle.
    pub fn drain_store(&mut self, store: &mut FlashStore, now: Instant) {
        let units: Vec<DisplayUnit> = store.iter().cloned().collect();
        for unit in units {
            self.push(unit, now);
        }
        store.finish_render();
    }

    /// Handles a toast message at `now`.
    pub fn handle_message(&mut self, message: Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.manual_close = true;
                    entry.controller.close(now);
                }
            }
            Message::PointerEnter(id) => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.controller.pointer_enter(now);
                }
            }
            Message::PointerLeave(id) => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.controller.pointer_leave(now);
                }
            }
            Message::Tick => self.tick(now),
        }
    }

    /// Advances every controller, drops removed toasts, and promotes
    /// queued units into freed slots.
    pub fn tick(&mut self, now: Instant) {
        for entry in &mut self.visible {
            entry.controller.tick(now);
        }

        let diagnostics = self.diagnostics.clone();
        self.visible.retain(|entry| {
            let removed = entry.controller.is_removed();
            if removed {
                if let Some(handle) = &diagnostics {
                    handle.record(FlashEvent::Closed {
                        kind: entry.unit.kind(),
                        manual: entry.manual_close,
                    });
                }
            }
            !removed
        });

        while self.has_capacity() {
            match self.queue.pop_front() {
                Some(unit) => self.attach(unit, now),
                None => break,
            }
        }
    }

    /// Detaches every toast without exit transitions and clears the queue.
    /// Pending deadlines are cancelled with the elements they belonged to.
    pub fn clear(&mut self) {
        for entry in &mut self.visible {
            entry.controller.detach();
        }
        self.visible.clear();
        self.queue.clear();
    }

    /// Visible toasts in push order.
    pub fn visible(&self) -> impl Iterator<Item = &ToastEntry> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn has_capacity(&self) -> bool {
        self.max_visible
            .is_none_or(|limit| self.visible.len() < limit)
    }

    fn attach(&mut self, unit: DisplayUnit, now: Instant) {
        if let Some(handle) = &self.diagnostics {
            handle.record(FlashEvent::Shown { kind: unit.kind() });
        }
        let controller = DismissController::attach(&unit, now);
        self.visible.push(ToastEntry {
            id: ToastId::new(),
            unit,
            controller,
            manual_close: false,
        });
    }

    fn entry_mut(&mut self, id: ToastId) -> Option<&mut ToastEntry> {
        self.visible.iter_mut().find(|entry| entry.id == id)
    }
}
