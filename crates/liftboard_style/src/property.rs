//! Property assignments
//!
//! A declaration assigns a [`PropertyValue`] to a [`PropertyName`]. Values
//! are sequences of literal fragments and token references, so a border can
//! mix a literal width with a themed color:
//!
//! ```
//! use liftboard_style::PropertyValue;
//! use liftboard_theme::{ColorToken, LiftboardTheme};
//!
//! let border = PropertyValue::border("2px", ColorToken::Accent);
//! let registry = LiftboardTheme::registry();
//! assert_eq!(border.resolve(&registry).unwrap(), "2px solid #1D4ED8");
//! assert_eq!(border.to_css_var(), "2px solid var(--accent)");
//! ```

use std::fmt;

use liftboard_theme::{ColorToken, RadiusToken, ShadowToken, SpacingToken, TokenRegistry};
use smallvec::SmallVec;

/// Visual properties the overlay may assign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyName {
    Color,
    Background,
    FontSize,
    FontWeight,
    Padding,
    Margin,
    Border,
    BorderBottom,
    BorderRadius,
    BoxShadow,
    Transition,
    Transform,
}

impl PropertyName {
    pub const ALL: [PropertyName; 12] = [
        PropertyName::Color,
        PropertyName::Background,
        PropertyName::FontSize,
        PropertyName::FontWeight,
        PropertyName::Padding,
        PropertyName::Margin,
        PropertyName::Border,
        PropertyName::BorderBottom,
        PropertyName::BorderRadius,
        PropertyName::BoxShadow,
        PropertyName::Transition,
        PropertyName::Transform,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            PropertyName::Color => "color",
            PropertyName::Background => "background",
            PropertyName::FontSize => "font-size",
            PropertyName::FontWeight => "font-weight",
            PropertyName::Padding => "padding",
            PropertyName::Margin => "margin",
            PropertyName::Border => "border",
            PropertyName::BorderBottom => "border-bottom",
            PropertyName::BorderRadius => "border-radius",
            PropertyName::BoxShadow => "box-shadow",
            PropertyName::Transition => "transition",
            PropertyName::Transform => "transform",
        }
    }

    /// Parse a CSS property name; `background-color` is accepted as `background`
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "background-color" {
            return Some(PropertyName::Background);
        }
        Self::ALL.into_iter().find(|p| p.css_name() == name)
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Reference to a registry token by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRef(pub String);

impl TokenRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! token_ref_from {
    ($($token:ty),+) => {
        $(
            impl From<$token> for TokenRef {
                fn from(token: $token) -> Self {
                    TokenRef(token.name().to_string())
                }
            }

            impl From<$token> for PropertyValue {
                fn from(token: $token) -> Self {
                    PropertyValue::token(token)
                }
            }
        )+
    };
}

token_ref_from!(ColorToken, SpacingToken, RadiusToken, ShadowToken);

/// Fragment of a property value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValuePart {
    Literal(String),
    Token(TokenRef),
}

impl ValuePart {
    pub fn literal(text: impl Into<String>) -> Self {
        ValuePart::Literal(text.into())
    }

    pub fn token(token: impl Into<TokenRef>) -> Self {
        ValuePart::Token(token.into())
    }
}

/// Value assigned to a property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyValue {
    pub parts: SmallVec<[ValuePart; 3]>,
}

impl PropertyValue {
    /// A value that is exactly one token
    pub fn token(token: impl Into<TokenRef>) -> Self {
        Self::parts([ValuePart::token(token)])
    }

    /// A literal value with no token references
    pub fn literal(text: impl Into<String>) -> Self {
        Self::parts([ValuePart::literal(text)])
    }

    pub fn parts(parts: impl IntoIterator<Item = ValuePart>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    /// Two tokens separated by a space, e.g. vertical and horizontal padding
    pub fn pair(first: impl Into<TokenRef>, second: impl Into<TokenRef>) -> Self {
        Self::parts([
            ValuePart::token(first),
            ValuePart::literal(" "),
            ValuePart::token(second),
        ])
    }

    /// A solid border of the given width in a themed color
    pub fn border(width: &str, color: impl Into<TokenRef>) -> Self {
        Self::parts([ValuePart::literal(format!("{width} solid ")), ValuePart::token(color)])
    }

    /// Token references in this value, in order
    pub fn tokens(&self) -> impl Iterator<Item = &TokenRef> {
        self.parts.iter().filter_map(|part| match part {
            ValuePart::Token(token) => Some(token),
            ValuePart::Literal(_) => None,
        })
    }

    /// Substitute token values into CSS text
    ///
    /// Fails with the first reference the registry cannot resolve.
    pub fn resolve(&self, registry: &TokenRegistry) -> Result<String, TokenRef> {
        let mut css = String::new();
        for part in &self.parts {
            match part {
                ValuePart::Literal(text) => css.push_str(text),
                ValuePart::Token(token) => {
                    let value = registry.resolve_css(token.name()).ok_or_else(|| token.clone())?;
                    css.push_str(&value);
                }
            }
        }
        Ok(css)
    }

    /// CSS text with token references written as custom properties
    pub fn to_css_var(&self) -> String {
        let mut css = String::new();
        for part in &self.parts {
            match part {
                ValuePart::Literal(text) => css.push_str(text),
                ValuePart::Token(token) => {
                    css.push_str("var(--");
                    css.push_str(token.name());
                    css.push(')');
                }
            }
        }
        css
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::literal(text)
    }
}

impl From<TokenRef> for PropertyValue {
    fn from(token: TokenRef) -> Self {
        PropertyValue::token(token)
    }
}

/// A single `property: value [!important]` assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: PropertyName,
    pub value: PropertyValue,
    /// Wins over normal declarations regardless of specificity
    pub important: bool,
}

impl Declaration {
    pub fn new(property: PropertyName, value: impl Into<PropertyValue>) -> Self {
        Self {
            property,
            value: value.into(),
            important: false,
        }
    }

    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    pub fn to_css(&self) -> String {
        if self.important {
            format!("{}: {} !important;", self.property, self.value.to_css_var())
        } else {
            format!("{}: {};", self.property, self.value.to_css_var())
        }
    }
}
