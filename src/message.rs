// SPDX-License-Identifier: MPL-2.0
//! Core flash-message data structures.
//!
//! This module defines the [`Kind`] enum with its alias normalization, the
//! legacy combined [`Payload`] form, and the immutable [`DisplayUnit`]
//! produced by [`render`].

use crate::config::{DEFAULT_DURATION_MS, DEFAULT_WIDTH_PX};

/// Message type category, determining the preset used for display.
///
/// Incoming tags are normalized before lookup: `notice` is an alias for
/// success, `danger` for error, and `alert` for warning. Unrecognized tags
/// silently fall back to [`Kind::Info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Something went wrong (red).
    Error,
    /// Caution, action may need attention (yellow).
    Warning,
    /// Neutral information (blue).
    #[default]
    Info,
}

impl Kind {
    /// Normalizes a type tag (including aliases) to a kind.
    ///
    /// Matching is case-insensitive. There is no error case: anything not
    /// recognized maps to [`Kind::Info`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "success" | "notice" => Kind::Success,
            "error" | "danger" => Kind::Error,
            "warning" | "alert" => Kind::Warning,
            _ => Kind::Info,
        }
    }

    /// Returns the canonical tag for this kind.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }

    /// All kinds, in display-priority order.
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];
}

/// The message argument accepted by [`render`] and the dispatcher.
///
/// Callers usually pass plain text, but the legacy combined form carries
/// its own width alongside the text; an embedded width takes precedence
/// over a separately passed width option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Plain message text.
    Text(String),
    /// Combined form: message text plus an optional embedded width.
    Detailed {
        message: String,
        width_px: Option<u32>,
    },
}

impl Payload {
    /// Creates a combined payload with an embedded width.
    pub fn detailed(message: impl Into<String>, width_px: u32) -> Self {
        Payload::Detailed {
            message: message.into(),
            width_px: Some(width_px),
        }
    }

    fn into_parts(self) -> (String, Option<u32>) {
        match self {
            Payload::Text(text) => (text, None),
            Payload::Detailed { message, width_px } => (message, width_px),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

/// Per-render options for [`render`].
///
/// Both fields lose to a width/duration embedded in the payload and win
/// over the hard defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub width_px: Option<u32>,
    pub duration_ms: Option<u64>,
}

impl RenderOptions {
    #[must_use]
    pub fn width(mut self, width_px: u32) -> Self {
        self.width_px = Some(width_px);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// The resolved, ready-to-render representation of one flash message.
///
/// Immutable once constructed; discarded when the client removes the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUnit {
    kind: Kind,
    text: String,
    width_px: u32,
    duration_ms: u64,
}

impl DisplayUnit {
    /// Creates a display unit, applying defaults for width and duration.
    ///
    /// A zero width is replaced by the default so the `width_px > 0`
    /// invariant always holds.
    #[must_use]
    pub fn new(kind: Kind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            width_px: DEFAULT_WIDTH_PX,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Width of the rendered toast in pixels; always positive.
    #[must_use]
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Auto-dismiss duration in milliseconds.
    ///
    /// Zero means the toast never auto-dismisses and must be closed
    /// manually. This mirrors the observed falsy-disables-the-timer
    /// behavior and is deliberate, not a gap.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

/// Renders a kind + payload + options into a [`DisplayUnit`].
///
/// Defaulting order for width: payload-embedded > option argument > 448 px.
/// Duration: option argument > 5000 ms. Absent text renders as empty; no
/// further validation is performed.
#[must_use]
pub fn render(kind: Kind, payload: Payload, options: RenderOptions) -> DisplayUnit {
    let (text, embedded_width) = payload.into_parts();
    let width_px = embedded_width
        .or(options.width_px)
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WIDTH_PX);
    let duration_ms = options.duration_ms.unwrap_or(DEFAULT_DURATION_MS);

    DisplayUnit {
        kind,
        text,
        width_px,
        duration_ms,
    }
}
