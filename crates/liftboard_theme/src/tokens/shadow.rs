//! Shadow tokens for theming

use crate::color::Color;
use crate::error::ThemeError;
use crate::tokens::{parse_px, px_to_css};

/// Semantic shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
}

impl ShadowToken {
    pub const ALL: [ShadowToken; 3] = [ShadowToken::Sm, ShadowToken::Md, ShadowToken::Lg];

    pub fn name(self) -> &'static str {
        match self {
            ShadowToken::Sm => "shadow-sm",
            ShadowToken::Md => "shadow-md",
            ShadowToken::Lg => "shadow-lg",
        }
    }
}

/// A box shadow definition
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    pub fn is_none(&self) -> bool {
        self.color.a == 0.0
            || (self.offset_x == 0.0
                && self.offset_y == 0.0
                && self.blur == 0.0
                && self.spread == 0.0)
    }

    /// CSS `box-shadow` text
    pub fn to_css(&self) -> String {
        if self.is_none() {
            return "none".to_string();
        }
        format!(
            "{} {} {} {} {}",
            px_to_css(self.offset_x),
            px_to_css(self.offset_y),
            px_to_css(self.blur),
            px_to_css(self.spread),
            self.color.to_css()
        )
    }

    /// Parse CSS `box-shadow` text: `x y [blur [spread]] color` or `none`
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        let value = value.trim();
        if value == "none" {
            return Ok(Self::none());
        }
        let invalid = || ThemeError::InvalidShadow(value.to_string());

        // The color is either a function (which may contain spaces) or the last word
        let (lengths, color) = match value.find("rgb") {
            Some(start) => (&value[..start], &value[start..]),
            None => value.rsplit_once(' ').ok_or_else(invalid)?,
        };
        let color = Color::parse(color).map_err(|_| invalid())?;

        let lengths = lengths
            .split_whitespace()
            .map(|part| parse_px(part).ok_or_else(invalid))
            .collect::<Result<Vec<f32>, _>>()?;
        match lengths.as_slice() {
            [x, y] => Ok(Self::new(*x, *y, 0.0, 0.0, color)),
            [x, y, blur] => Ok(Self::new(*x, *y, *blur, 0.0, color)),
            [x, y, blur, spread] => Ok(Self::new(*x, *y, *blur, *spread, color)),
            _ => Err(invalid()),
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowTokens {
    pub shadow_sm: Shadow,
    pub shadow_md: Shadow,
    pub shadow_lg: Shadow,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Sm => &self.shadow_sm,
            ShadowToken::Md => &self.shadow_md,
            ShadowToken::Lg => &self.shadow_lg,
        }
    }

    /// Soft slate-tinted shadows for a light dashboard
    pub fn light() -> Self {
        let base_color = Color::rgb(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0);
        Self {
            shadow_sm: Shadow::new(0.0, 1.0, 2.0, 0.0, base_color.with_alpha(0.06)),
            shadow_md: Shadow::new(0.0, 4.0, 6.0, -1.0, base_color.with_alpha(0.1)),
            shadow_lg: Shadow::new(0.0, 10.0, 15.0, -3.0, base_color.with_alpha(0.12)),
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::light()
    }
}
