//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the overlay:
//! - Colors (palette)
//! - Spacing (padding, margins)
//! - Border radii
//! - Shadows

mod color;
mod radius;
mod shadow;
mod spacing;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;

use std::fmt;

use crate::color::{trim_float, Color};

/// Semantic category of a token
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TokenCategory {
    Color,
    Spacing,
    Radius,
    Shadow,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 4] = [
        TokenCategory::Color,
        TokenCategory::Spacing,
        TokenCategory::Radius,
        TokenCategory::Shadow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Radius => "radius",
            TokenCategory::Shadow => "shadow",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal token value
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Color(Color),
    /// Length in pixels (spacing and radius tokens)
    Length(f32),
    Shadow(Shadow),
}

impl TokenValue {
    /// CSS text for this value
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::Color(color) => color.to_css(),
            TokenValue::Length(px) => px_to_css(*px),
            TokenValue::Shadow(shadow) => shadow.to_css(),
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            TokenValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Whether this value may belong to `category`
    pub fn fits(&self, category: TokenCategory) -> bool {
        matches!(
            (self, category),
            (TokenValue::Color(_), TokenCategory::Color)
                | (TokenValue::Length(_), TokenCategory::Spacing)
                | (TokenValue::Length(_), TokenCategory::Radius)
                | (TokenValue::Shadow(_), TokenCategory::Shadow)
        )
    }
}

/// How a token gets its value
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Literal(TokenValue),
    /// Explicit alias of another token in the same category
    Alias(String),
}

/// A named design token
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub name: String,
    pub category: TokenCategory,
    pub kind: TokenKind,
}

impl Token {
    pub fn is_alias(&self) -> bool {
        matches!(self.kind, TokenKind::Alias(_))
    }
}

pub(crate) fn px_to_css(px: f32) -> String {
    if px == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", trim_float(px))
    }
}

/// Parse a CSS pixel length (`12px`, `12`, `0`)
pub fn parse_px(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f32>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_render_as_px() {
        assert_eq!(TokenValue::Length(12.0).to_css(), "12px");
        assert_eq!(TokenValue::Length(0.5).to_css(), "0.5px");
        assert_eq!(TokenValue::Length(0.0).to_css(), "0");
    }

    #[test]
    fn parses_px() {
        assert_eq!(parse_px("12px"), Some(12.0));
        assert_eq!(parse_px(" 4 "), Some(4.0));
        assert_eq!(parse_px("-1px"), Some(-1.0));
        assert_eq!(parse_px("1em"), None);
    }

    #[test]
    fn values_fit_their_categories() {
        assert!(TokenValue::Length(4.0).fits(TokenCategory::Radius));
        assert!(TokenValue::Length(4.0).fits(TokenCategory::Spacing));
        assert!(!TokenValue::Color(Color::WHITE).fits(TokenCategory::Shadow));
    }
}
