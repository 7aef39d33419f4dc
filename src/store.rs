// SPDX-License-Identifier: MPL-2.0
//! Per-request-cycle flash store.
//!
//! Entries carry one of two explicit lifetimes rather than living in a
//! single ambiguous map: [`Lifetime::Standard`] survives exactly one
//! subsequent render cycle (the redirect hop), [`Lifetime::Now`] is visible
//! for the current render only. [`FlashStore::finish_render`] performs the
//! end-of-cycle sweep.
//!
//! The store is a plain value passed explicitly through the dispatch call
//! chain; there is no global state.

use crate::message::{DisplayUnit, Kind};

/// How long a stored entry remains available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Visible for the current render and the next one (one redirect hop).
    Standard,
    /// Visible for the current render only.
    Now,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    unit: DisplayUnit,
    lifetime: Lifetime,
}

/// Transient store of flash messages, keyed by kind.
///
/// Setting the same kind twice in one cycle replaces the entry in place;
/// distinct kinds keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashStore {
    entries: Vec<(Kind, Entry)>,
}

impl FlashStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a unit with the standard one-hop lifetime.
    pub fn set(&mut self, unit: DisplayUnit) {
        self.insert(unit, Lifetime::Standard);
    }

    /// Stores a unit visible for the current render only.
    pub fn set_now(&mut self, unit: DisplayUnit) {
        self.insert(unit, Lifetime::Now);
    }

    fn insert(&mut self, unit: DisplayUnit, lifetime: Lifetime) {
        let kind = unit.kind();
        let entry = Entry { unit, lifetime };
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == kind) {
            slot.1 = entry;
        } else {
            self.entries.push((kind, entry));
        }
    }

    /// Returns the stored unit for a kind, if any.
    #[must_use]
    pub fn get(&self, kind: Kind) -> Option<&DisplayUnit> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, e)| &e.unit)
    }

    /// Returns the lifetime of the stored entry for a kind, if any.
    #[must_use]
    pub fn lifetime(&self, kind: Kind) -> Option<Lifetime> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, e)| e.lifetime)
    }

    /// Iterates stored units in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayUnit> {
        self.entries.iter().map(|(_, e)| &e.unit)
    }

    /// Ends one render cycle: drops `Now` entries and demotes `Standard`
    /// entries so they are visible for exactly one more render.
    pub fn finish_render(&mut self) {
        self.entries.retain(|(_, e)| e.lifetime == Lifetime::Standard);
        for (_, entry) in &mut self.entries {
            entry.lifetime = Lifetime::Now;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
