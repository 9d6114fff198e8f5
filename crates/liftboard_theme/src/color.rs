//! RGBA color values and WCAG contrast math

use std::fmt;

use crate::error::ThemeError;

/// An RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Channels quantized to 8 bits
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (channel_u8(self.r), channel_u8(self.g), channel_u8(self.b))
    }

    /// Parse a CSS color literal
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)`.
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        let value = value.trim();
        let invalid = || ThemeError::InvalidColor(value.to_string());

        if let Some(hex) = value.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid());
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return match hex.len() {
                3 => Ok(Self::from_rgb8(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
                6 => Ok(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
                8 => Ok(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)
                    .with_alpha(byte(6)? as f32 / 255.0)),
                _ => Err(invalid()),
            };
        }

        let (args, has_alpha) = if let Some(rest) = value.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = value.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let args = args.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| invalid())?;
        }
        let alpha = if has_alpha {
            parts[3].parse::<f32>().map_err(|_| invalid())?
        } else {
            1.0
        };
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid());
        }

        Ok(Self::from_rgb8(rgb[0], rgb[1], rgb[2]).with_alpha(alpha))
    }

    fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// CSS text for this color: `#RRGGBB` when opaque, `rgba(...)` otherwise
    pub fn to_css(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.a >= 1.0 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("rgba({r}, {g}, {b}, {})", trim_float(self.a))
        }
    }

    /// WCAG 2.x relative luminance (alpha ignored)
    pub fn relative_luminance(&self) -> f64 {
        fn linear(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let (r, g, b) = self.to_rgb8();
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }

    /// WCAG contrast ratio between two colors, in `1.0..=21.0`
    pub fn contrast_ratio(&self, other: &Color) -> f64 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let lighter = l1.max(l2);
        let darker = l1.min(l2);
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn channel_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Format a float without trailing zeros (`0.5`, `12`, `0.06`)
pub(crate) fn trim_float(value: f32) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
