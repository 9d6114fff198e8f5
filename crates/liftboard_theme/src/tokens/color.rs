//! Color tokens for theming

use crate::color::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Surfaces
    Background,
    Surface,

    // Brand colors
    Primary,
    Accent,
    AccentHover,

    // Text colors
    Text,
    TextMuted,

    // Borders
    Border,

    // Destructive actions
    Delete,
    DeleteHover,
}

impl ColorToken {
    pub const ALL: [ColorToken; 10] = [
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::Primary,
        ColorToken::Accent,
        ColorToken::AccentHover,
        ColorToken::Text,
        ColorToken::TextMuted,
        ColorToken::Border,
        ColorToken::Delete,
        ColorToken::DeleteHover,
    ];

    /// Registry name of this token
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::Primary => "primary",
            ColorToken::Accent => "accent",
            ColorToken::AccentHover => "accent-hover",
            ColorToken::Text => "text",
            ColorToken::TextMuted => "text-muted",
            ColorToken::Border => "border",
            ColorToken::Delete => "delete",
            ColorToken::DeleteHover => "delete-hover",
        }
    }
}

/// Complete set of palette tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub delete: Color,
    pub delete_hover: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::Primary => self.primary,
            ColorToken::Accent => self.accent,
            ColorToken::AccentHover => self.accent_hover,
            ColorToken::Text => self.text,
            ColorToken::TextMuted => self.text_muted,
            ColorToken::Border => self.border,
            ColorToken::Delete => self.delete,
            ColorToken::DeleteHover => self.delete_hover,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        crate::themes::LiftboardTheme::colors()
    }
}
