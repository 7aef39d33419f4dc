// SPDX-License-Identifier: MPL-2.0
//! Client-side toast rendering and lifecycle.
//!
//! This module organizes the view-layer code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`dismiss`] - Per-toast dismissal state machine (timing lives here)
//! - [`stack`] - Ordered container owning one controller per toast
//! - [`toast`] - Toast widget rendering units with preset styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG glyphs for the four kinds plus the dismiss cross
//!
//! # Usage
//!
//! ```ignore
//! use iced_flash::ui::{Message, Stack, Toast};
//! use std::time::Instant;
//!
//! // Keep a stack in your application state
//! let mut stack = Stack::new();
//!
//! // Push units as they arrive, tick it from a subscription
//! stack.handle_message(Message::Tick, Instant::now());
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view_overlay(&stack, Instant::now()).map(AppMessage::Flash);
//! ```

pub mod design_tokens;
pub mod dismiss;
pub mod icons;
pub mod stack;
pub mod toast;

pub use dismiss::{DismissController, Phase};
pub use stack::{Message, Stack, ToastEntry, ToastId};
pub use toast::Toast;
