// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the crate's design tokens, following the W3C Design
Tokens standard.

## Organization

- **Palette**: Base colors, including per-kind semantic scales
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use iced_flash::ui::design_tokens::{palette, spacing};

let accent = palette::SUCCESS_500;
let padding = spacing::SM;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic scales: 50 = surface tint, 100 = icon well, 400 = border,
    // 500 = accent/icon, 700 = text on tinted surface.
    pub const SUCCESS_50: Color = Color::from_rgb(0.941, 0.992, 0.957);
    pub const SUCCESS_100: Color = Color::from_rgb(0.863, 0.988, 0.906);
    pub const SUCCESS_400: Color = Color::from_rgb(0.290, 0.871, 0.502);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const SUCCESS_700: Color = Color::from_rgb(0.082, 0.502, 0.239);

    pub const WARNING_50: Color = Color::from_rgb(0.996, 0.988, 0.910);
    pub const WARNING_100: Color = Color::from_rgb(0.996, 0.976, 0.765);
    pub const WARNING_400: Color = Color::from_rgb(0.980, 0.800, 0.082);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const WARNING_700: Color = Color::from_rgb(0.706, 0.420, 0.035);

    pub const ERROR_50: Color = Color::from_rgb(0.996, 0.949, 0.949);
    pub const ERROR_100: Color = Color::from_rgb(0.996, 0.886, 0.886);
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_700: Color = Color::from_rgb(0.725, 0.110, 0.110);

    pub const INFO_50: Color = Color::from_rgb(0.937, 0.965, 1.0);
    pub const INFO_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const INFO_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const INFO_700: Color = Color::from_rgb(0.114, 0.306, 0.847);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Fully transparent (entrance/exit endpoints).
    pub const HIDDEN: f32 = 0.0;
    /// Subtle overlay tint (hover backgrounds).
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    /// Medium overlay tint (pressed backgrounds).
    pub const OVERLAY_MEDIUM: f32 = 0.2;
    /// Fully opaque.
    pub const FULL: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    /// Diameter of the circular icon well inside a toast.
    pub const ICON_WELL: f32 = 32.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}
