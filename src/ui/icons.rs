// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for toast glyphs.
//!
//! Icons are built as in-memory SVG documents from path data, with the
//! glyph color baked into the document fill. Handles are cached using
//! `OnceLock` so each document is assembled at most once.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the message kind (e.g., `check_circle` not `success_icon`).

use crate::message::Kind;
use crate::preset;
use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Checkmark inside a circle (success group).
pub const CHECK_CIRCLE_PATH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";

/// Cross inside a circle (error group).
pub const CROSS_CIRCLE_PATH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z";

/// Exclamation mark inside a triangle (warning group).
pub const EXCLAMATION_TRIANGLE_PATH: &str = "M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z";

/// Lowercase i inside a circle (info group).
pub const INFO_CIRCLE_PATH: &str = "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z";

/// Plain cross, used by the dismiss button.
pub const CROSS_PATH: &str = "M6.28 5.22a.75.75 0 00-1.06 1.06L8.94 10l-3.72 3.72a.75.75 0 101.06 1.06L10 11.06l3.72 3.72a.75.75 0 101.06-1.06L11.06 10l3.72-3.72a.75.75 0 00-1.06-1.06L10 8.94 6.28 5.22z";

/// Builds a standalone SVG document from path data and a fill color.
fn svg_document(path: &str, fill: Color) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="{}">"#,
            r#"<path fill-rule="evenodd" d="{}" clip-rule="evenodd"/></svg>"#
        ),
        css_color(fill),
        path
    )
}

/// Formats a color as a CSS `rgb()` value for SVG fills.
fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgb({},{},{})",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

/// Returns the glyph for a message kind, colored per its preset.
pub fn kind_glyph(kind: Kind) -> Svg<'static> {
    static HANDLES: OnceLock<[Handle; 4]> = OnceLock::new();
    let handles = HANDLES.get_or_init(|| {
        Kind::ALL.map(|kind| {
            let preset = preset::resolve(kind);
            Handle::from_memory(svg_document(preset.icon_path, preset.icon_color).into_bytes())
        })
    });
    let index = Kind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or_default();
    sized(handles[index].clone(), super::design_tokens::sizing::ICON_MD)
}

/// Returns the dismiss-button cross glyph.
pub fn cross_glyph() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    let handle = HANDLE.get_or_init(|| {
        Handle::from_memory(
            svg_document(CROSS_PATH, super::design_tokens::palette::GRAY_700).into_bytes(),
        )
    });
    sized(handle.clone(), super::design_tokens::sizing::ICON_SM)
}

fn sized(handle: Handle, size: f32) -> Svg<'static> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color_converts_channels() {
        assert_eq!(css_color(Color::from_rgb(1.0, 0.0, 0.5)), "rgb(255,0,128)");
    }

    #[test]
    fn css_color_clamps_out_of_range() {
        assert_eq!(css_color(Color::from_rgb(2.0, -1.0, 0.0)), "rgb(255,0,0)");
    }

    #[test]
    fn svg_document_embeds_path_and_fill() {
        let doc = svg_document(CROSS_PATH, Color::BLACK);
        assert!(doc.starts_with("<svg"));
        assert!(doc.contains(CROSS_PATH));
        assert!(doc.contains("rgb(0,0,0)"));
    }
}
