// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the preview panel.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (4px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border**: Border widths
//! - **Radius**: Border radii
//! - **Shadow**: Elevation shadows
//!
//! ```
//! use flutter_preview::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let muted_overlay = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::GRAY_100
//! };
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.035, 0.035, 0.043);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.153, 0.153, 0.165);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.894, 0.894, 0.906);
    pub const GRAY_100: Color = Color::from_rgb(0.957, 0.957, 0.961);

    // Flutter brand blue, used by the badge and primary actions
    pub const FLUTTER_400: Color = Color::from_rgb(0.259, 0.647, 0.961);
    pub const FLUTTER_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const FLUTTER_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Badge background tint.
    pub const TINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Header bar and loading overlay backgrounds.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XS: f32 = 12.0;
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Maximum width of the setup panel text block.
    pub const SETUP_TEXT_WIDTH: f32 = 448.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Setup panel heading.
    pub const TITLE_SM: f32 = 16.0;

    /// Panel title, body copy.
    pub const BODY: f32 = 14.0;

    /// Subtitles, badges, links.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Scale
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Card elevation. Kept faint so it reads on both schemes.
    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.1,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT < opacity::OVERLAY_SUBTLE);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_SM > sizing::ICON_XS);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::LG > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }
}
