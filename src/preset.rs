// SPDX-License-Identifier: MPL-2.0
//! Static display presets, one per message kind.
//!
//! [`resolve`] is a pure, total function: alias normalization in
//! [`Kind::from_tag`](crate::message::Kind::from_tag) has already collapsed
//! every tag to one of the four kinds, so there is no error case here.

use crate::message::Kind;
use crate::ui::design_tokens::palette;
use crate::ui::icons;
use iced::Color;

/// The style/icon bundle associated with a message kind.
///
/// Static, one instance per kind; no lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Toast surface tint.
    pub background: Color,
    /// Accent border color.
    pub border: Color,
    /// Message text color on the tinted surface.
    pub text: Color,
    /// Fill of the circular well behind the icon.
    pub icon_background: Color,
    /// Icon glyph color.
    pub icon_color: Color,
    /// SVG path data for the icon glyph (20x20 viewBox).
    pub icon_path: &'static str,
}

const SUCCESS: Preset = Preset {
    background: palette::SUCCESS_50,
    border: palette::SUCCESS_400,
    text: palette::SUCCESS_700,
    icon_background: palette::SUCCESS_100,
    icon_color: palette::SUCCESS_500,
    icon_path: icons::CHECK_CIRCLE_PATH,
};

const WARNING: Preset = Preset {
    background: palette::WARNING_50,
    border: palette::WARNING_400,
    text: palette::WARNING_700,
    icon_background: palette::WARNING_100,
    icon_color: palette::WARNING_500,
    icon_path: icons::EXCLAMATION_TRIANGLE_PATH,
};

const ERROR: Preset = Preset {
    background: palette::ERROR_50,
    border: palette::ERROR_400,
    text: palette::ERROR_700,
    icon_background: palette::ERROR_100,
    icon_color: palette::ERROR_500,
    icon_path: icons::CROSS_CIRCLE_PATH,
};

const INFO: Preset = Preset {
    background: palette::INFO_50,
    border: palette::INFO_400,
    text: palette::INFO_700,
    icon_background: palette::INFO_100,
    icon_color: palette::INFO_500,
    icon_path: icons::INFO_CIRCLE_PATH,
};

/// Returns the preset for a kind.
#[must_use]
pub fn resolve(kind: Kind) -> &'static Preset {
    match kind {
        Kind::Success => &SUCCESS,
        Kind::Warning => &WARNING,
        Kind::Error => &ERROR,
        Kind::Info => &INFO,
    }
}
