// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all flash-message constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: Toast width and auto-dismiss duration
//! - **Dispatch**: Widths used by the response dispatcher per outcome kind
//! - **Lifecycle**: Entrance transition and removal delay timing
//! - **Stacking**: Visible-toast limits

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default toast width in pixels when neither the payload nor the caller
/// specifies one.
pub const DEFAULT_WIDTH_PX: u32 = 448;

/// Default auto-dismiss duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5000;

// ==========================================================================
// Dispatch Defaults
// ==========================================================================

/// Width applied to success messages emitted through the dispatcher.
pub const DISPATCH_SUCCESS_WIDTH_PX: u32 = 384;

/// Width applied to error messages emitted through the dispatcher.
/// Wider than success so validation text has room to wrap.
pub const DISPATCH_ERROR_WIDTH_PX: u32 = 672;

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Duration of the entrance transition in milliseconds. The toast counts
/// as visible for auto-dismiss purposes from the moment it attaches, not
/// from the end of this transition.
pub const ENTER_TRANSITION_MS: u64 = 300;

/// Delay between the start of the exit transition and detaching the toast,
/// in milliseconds. Independent of the configured auto-dismiss duration.
pub const REMOVE_DELAY_MS: u64 = 500;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Maximum number of toasts displayed at once; additional messages queue.
pub const DEFAULT_MAX_VISIBLE: usize = 3;
