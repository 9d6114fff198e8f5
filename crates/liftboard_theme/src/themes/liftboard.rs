//! Default Liftboard theme
//!
//! A light slate palette for the workout dashboard. Blue is the interactive
//! accent, red marks destructive actions.

use crate::registry::TokenRegistry;
use crate::tokens::*;

/// Liftboard palette
pub mod palette {
    use crate::color::Color;

    pub const SLATE_50: Color = Color::rgb(248.0 / 255.0, 250.0 / 255.0, 252.0 / 255.0);
    pub const SLATE_200: Color = Color::rgb(226.0 / 255.0, 232.0 / 255.0, 240.0 / 255.0);
    pub const SLATE_500: Color = Color::rgb(100.0 / 255.0, 116.0 / 255.0, 139.0 / 255.0);
    pub const SLATE_700: Color = Color::rgb(51.0 / 255.0, 65.0 / 255.0, 85.0 / 255.0);
    pub const SLATE_900: Color = Color::rgb(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0);
    pub const BLUE_700: Color = Color::rgb(29.0 / 255.0, 78.0 / 255.0, 216.0 / 255.0);
    pub const BLUE_800: Color = Color::rgb(30.0 / 255.0, 64.0 / 255.0, 175.0 / 255.0);
    pub const RED_600: Color = Color::rgb(220.0 / 255.0, 38.0 / 255.0, 38.0 / 255.0);
    pub const RED_700: Color = Color::rgb(185.0 / 255.0, 28.0 / 255.0, 28.0 / 255.0);
    pub const WHITE: Color = Color::WHITE;
}

/// Aliases shipped with the default theme: `(alias, target)`
///
/// Text drawn on the accent and delete fills reuses the surface white
/// instead of redeclaring it.
pub const ALIASES: [(&str, &str); 3] = [
    ("on-accent", "surface"),
    ("on-delete", "surface"),
    ("heading", "primary"),
];

/// The built-in Liftboard theme
#[derive(Clone, Copy, Debug, Default)]
pub struct LiftboardTheme;

impl LiftboardTheme {
    pub fn colors() -> ColorTokens {
        ColorTokens {
            background: palette::SLATE_50,
            surface: palette::WHITE,
            primary: palette::SLATE_900,
            accent: palette::BLUE_700,
            accent_hover: palette::BLUE_800,
            text: palette::SLATE_700,
            text_muted: palette::SLATE_500,
            border: palette::SLATE_200,
            delete: palette::RED_600,
            delete_hover: palette::RED_700,
        }
    }

    /// Registry holding every Liftboard token and alias
    pub fn registry() -> TokenRegistry {
        let mut registry = TokenRegistry::from_token_sets(
            &Self::colors(),
            &SpacingTokens::default(),
            &RadiusTokens::default(),
            &ShadowTokens::light(),
        );
        for (alias, target) in ALIASES {
            if let Err(err) = registry.alias(alias, target) {
                tracing::error!(%err, alias, "built-in alias rejected");
            }
        }
        registry
    }
}
