// SPDX-License-Identifier: MPL-2.0
//! `iced_flash` is a reusable flash-message / toast subsystem for Iced
//! applications.
//!
//! It covers the whole path of a transient notification: typed messages
//! with alias normalization ([`message`]), static style presets
//! ([`preset`]), a per-request-cycle store with one-hop semantics
//! ([`store`]), a response dispatcher for full-page and incremental
//! outcomes ([`dispatch`]), and the client-side stack, dismissal state
//! machine, and toast widgets ([`ui`]).

#![doc(html_root_url = "https://docs.rs/iced_flash/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod preset;
pub mod store;
pub mod ui;

pub use dispatch::{Dispatch, Fragment, Outcome, ResponseMode, CONTAINER_ID};
pub use message::{render, DisplayUnit, Kind, Payload, RenderOptions};
pub use preset::{resolve as resolve_preset, Preset};
pub use store::{FlashStore, Lifetime};

#[cfg(test)]
mod tests {
    // This is where common library tests can go
}
