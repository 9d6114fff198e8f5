//! Name-indexed token registry
//!
//! The registry is the single source of literal values for the overlay.
//! Rules never carry color or length literals for themed properties; they
//! name a token and the registry resolves it, following aliases.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashSet};
use tracing::{debug, warn};

use crate::color::Color;
use crate::error::ThemeError;
use crate::tokens::*;

/// Tokens read while following one alias chain before giving up
///
/// `validate` rejects chains that `resolve` would abandon.
const MAX_ALIAS_DEPTH: usize = 16;

/// WCAG AA minimum for normal-size text
pub const WCAG_AA_TEXT: f64 = 4.5;

/// A minimum contrast ratio between two color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastRequirement {
    pub foreground: String,
    pub background: String,
    pub minimum: f64,
}

impl ContrastRequirement {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>, minimum: f64) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            minimum,
        }
    }

    /// Text-bearing pairs every overlay palette must satisfy
    pub fn defaults() -> Vec<ContrastRequirement> {
        vec![
            Self::new(ColorToken::Accent.name(), ColorToken::Background.name(), WCAG_AA_TEXT),
            Self::new(ColorToken::Accent.name(), ColorToken::Surface.name(), WCAG_AA_TEXT),
            Self::new(ColorToken::Primary.name(), ColorToken::Background.name(), WCAG_AA_TEXT),
        ]
    }
}

/// Closed, ordered set of design tokens keyed by name
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    tokens: IndexMap<String, Token, FxBuildHasher>,
}

impl TokenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from typed token sets, in declaration order
    pub fn from_token_sets(
        colors: &ColorTokens,
        spacing: &SpacingTokens,
        radii: &RadiusTokens,
        shadows: &ShadowTokens,
    ) -> Self {
        let mut registry = Self::new();
        for token in ColorToken::ALL {
            registry.push(token.name(), TokenCategory::Color, TokenValue::Color(colors.get(token)));
        }
        for token in SpacingToken::ALL {
            registry.push(token.name(), TokenCategory::Spacing, TokenValue::Length(spacing.get(token)));
        }
        for token in RadiusToken::ALL {
            registry.push(token.name(), TokenCategory::Radius, TokenValue::Length(radii.get(token)));
        }
        for token in ShadowToken::ALL {
            registry.push(
                token.name(),
                TokenCategory::Shadow,
                TokenValue::Shadow(shadows.get(token).clone()),
            );
        }
        registry
    }

    fn push(&mut self, name: &str, category: TokenCategory, value: TokenValue) {
        self.tokens.insert(
            name.to_string(),
            Token {
                name: name.to_string(),
                category,
                kind: TokenKind::Literal(value),
            },
        );
    }

    /// Define a literal token
    pub fn define(
        &mut self,
        name: impl Into<String>,
        category: TokenCategory,
        value: TokenValue,
    ) -> Result<(), ThemeError> {
        let name = name.into();
        if self.tokens.contains_key(&name) {
            return Err(ThemeError::DuplicateName(name));
        }
        if !value.fits(category) {
            return Err(ThemeError::WrongCategory { name, category });
        }
        self.push(&name, category, value);
        Ok(())
    }

    /// Define `name` as an explicit alias of an existing token
    ///
    /// The alias takes the category of its target.
    pub fn alias(
        &mut self,
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<(), ThemeError> {
        let name = name.into();
        let target = target.into();
        if self.tokens.contains_key(&name) {
            return Err(ThemeError::DuplicateName(name));
        }
        let category = self
            .category_of(&target)
            .ok_or_else(|| ThemeError::UnknownToken(target.clone()))?;
        self.tokens.insert(
            name.clone(),
            Token {
                name,
                category,
                kind: TokenKind::Alias(target),
            },
        );
        Ok(())
    }

    /// Get the raw definition of a token
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.tokens.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn category_of(&self, name: &str) -> Option<TokenCategory> {
        self.tokens.get(name).map(|token| token.category)
    }

    /// Resolve a token name to its literal value, following aliases
    ///
    /// Returns `None` for unknown names; the caller leaves the property
    /// unstyled so the host's default applies.
    pub fn resolve(&self, name: &str) -> Option<&TokenValue> {
        let mut current = name;
        for _ in 0..MAX_ALIAS_DEPTH {
            match &self.tokens.get(current)?.kind {
                TokenKind::Literal(value) => return Some(value),
                TokenKind::Alias(target) => current = target.as_str(),
            }
        }
        warn!(token = name, "alias chain too deep, leaving unresolved");
        None
    }

    /// Resolve a token name to CSS text
    pub fn resolve_css(&self, name: &str) -> Option<String> {
        self.resolve(name).map(TokenValue::to_css)
    }

    pub fn resolve_color(&self, name: &str) -> Option<Color> {
        self.resolve(name).and_then(TokenValue::as_color)
    }

    /// All tokens in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }

    /// Token names of one category, in declaration order
    pub fn names_in(&self, category: TokenCategory) -> impl Iterator<Item = &str> {
        self.tokens
            .values()
            .filter(move |token| token.category == category)
            .map(|token| token.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Measure the contrast ratio of a requirement, failing below its minimum
    pub fn check_contrast(&self, requirement: &ContrastRequirement) -> Result<f64, ThemeError> {
        let color = |name: &str| match self.resolve(name) {
            Some(TokenValue::Color(color)) => Ok(*color),
            Some(_) => Err(ThemeError::NotAColor(name.to_string())),
            None => Err(ThemeError::UnknownToken(name.to_string())),
        };
        let foreground = color(&requirement.foreground)?;
        let background = color(&requirement.background)?;
        let ratio = foreground.contrast_ratio(&background);
        if ratio < requirement.minimum {
            return Err(ThemeError::InsufficientContrast {
                foreground: requirement.foreground.clone(),
                background: requirement.background.clone(),
                ratio,
                minimum: requirement.minimum,
            });
        }
        Ok(ratio)
    }

    /// Statically validate the registry
    ///
    /// Checks alias targets, alias categories and cycles, duplicate literal
    /// values within a category, and the given contrast requirements. Every
    /// defect is reported.
    pub fn validate(&self, requirements: &[ContrastRequirement]) -> Result<(), Vec<ThemeError>> {
        let mut errors = Vec::new();

        for token in self.tokens.values() {
            if let Err(err) = self.check_alias_chain(token) {
                errors.push(err);
            }
        }

        for category in TokenCategory::ALL {
            let literals: Vec<(&str, String)> = self
                .tokens
                .values()
                .filter(|token| token.category == category)
                .filter_map(|token| match &token.kind {
                    TokenKind::Literal(value) => Some((token.name.as_str(), value.to_css())),
                    TokenKind::Alias(_) => None,
                })
                .collect();
            // Compared as CSS text: distinct values rendering the same are duplicates
            for (i, (first, css)) in literals.iter().enumerate() {
                if let Some((second, _)) = literals[i + 1..].iter().find(|(_, other)| other == css) {
                    errors.push(ThemeError::DuplicateValue {
                        category,
                        first: first.to_string(),
                        second: second.to_string(),
                        value: css.clone(),
                    });
                }
            }
        }

        for requirement in requirements {
            match self.check_contrast(requirement) {
                Ok(ratio) => debug!(
                    foreground = %requirement.foreground,
                    background = %requirement.background,
                    ratio,
                    "contrast ok"
                ),
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            for err in &errors {
                warn!(%err, "token registry defect");
            }
            Err(errors)
        }
    }

    fn check_alias_chain(&self, token: &Token) -> Result<(), ThemeError> {
        let mut seen = FxHashSet::default();
        let mut current = token;
        while let TokenKind::Alias(target) = &current.kind {
            if !seen.insert(current.name.as_str()) {
                return Err(ThemeError::AliasCycle(token.name.clone()));
            }
            if seen.len() >= MAX_ALIAS_DEPTH {
                return Err(ThemeError::AliasTooDeep {
                    alias: token.name.clone(),
                    limit: MAX_ALIAS_DEPTH,
                });
            }
            let next = self
                .tokens
                .get(target)
                .ok_or_else(|| ThemeError::UnknownToken(target.clone()))?;
            if next.category != current.category {
                return Err(ThemeError::CategoryMismatch {
                    alias: current.name.clone(),
                    alias_category: current.category,
                    target: next.name.clone(),
                    target_category: next.category,
                });
            }
            current = next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_registry() -> TokenRegistry {
        let mut registry = TokenRegistry::new();
        registry
            .define("background", TokenCategory::Color, TokenValue::Color(Color::WHITE))
            .unwrap();
        registry
            .define("text", TokenCategory::Color, TokenValue::Color(Color::BLACK))
            .unwrap();
        registry
            .define("space-md", TokenCategory::Spacing, TokenValue::Length(12.0))
            .unwrap();
        registry
    }

    #[test]
    fn resolves_literals_and_aliases() {
        let mut registry = small_registry();
        registry.alias("ink", "text").unwrap();
        registry.alias("body-ink", "ink").unwrap();

        assert_eq!(registry.resolve_css("space-md").as_deref(), Some("12px"));
        assert_eq!(registry.resolve_color("body-ink"), Some(Color::BLACK));
        assert_eq!(registry.category_of("body-ink"), Some(TokenCategory::Color));
        assert!(registry.resolve("missing").is_none());
    }

    #[test]
    fn rejects_bad_definitions() {
        let mut registry = small_registry();
        assert_eq!(
            registry.define("text", TokenCategory::Color, TokenValue::Color(Color::WHITE)),
            Err(ThemeError::DuplicateName("text".into()))
        );
        assert!(matches!(
            registry.define("gap", TokenCategory::Spacing, TokenValue::Color(Color::WHITE)),
            Err(ThemeError::WrongCategory { .. })
        ));
        assert_eq!(
            registry.alias("self", "self"),
            Err(ThemeError::UnknownToken("self".into()))
        );
    }

    #[test]
    fn duplicate_literals_fail_validation_but_aliases_do_not() {
        let mut registry = small_registry();
        registry.alias("surface", "background").unwrap();
        assert!(registry.validate(&[]).is_ok());

        registry
            .define("card", TokenCategory::Color, TokenValue::Color(Color::WHITE))
            .unwrap();
        let errors = registry.validate(&[]).unwrap_err();
        assert_eq!(
            errors,
            vec![ThemeError::DuplicateValue {
                category: TokenCategory::Color,
                first: "background".into(),
                second: "card".into(),
                value: "#FFFFFF".into(),
            }]
        );
    }

    #[test]
    fn same_length_in_different_categories_is_not_a_duplicate() {
        let mut registry = small_registry();
        registry
            .define("radius-lg", TokenCategory::Radius, TokenValue::Length(12.0))
            .unwrap();
        assert!(registry.validate(&[]).is_ok());
    }

    #[test]
    fn contrast_requirements() {
        let registry = small_registry();
        let ok = ContrastRequirement::new("text", "background", WCAG_AA_TEXT);
        assert!(registry.check_contrast(&ok).unwrap() > 20.0);

        let mut registry = registry;
        registry
            .define("faint", TokenCategory::Color, TokenValue::Color(Color::from_hex(0xEEEEEE)))
            .unwrap();
        let weak = ContrastRequirement::new("faint", "background", WCAG_AA_TEXT);
        assert!(matches!(
            registry.validate(&[weak]),
            Err(errors) if matches!(errors[0], ThemeError::InsufficientContrast { .. })
        ));

        let not_color = ContrastRequirement::new("space-md", "background", WCAG_AA_TEXT);
        assert_eq!(
            registry.check_contrast(&not_color),
            Err(ThemeError::NotAColor("space-md".into()))
        );
    }

    #[test]
    fn alias_chains_longer_than_resolve_follows_are_rejected() {
        let mut registry = small_registry();
        registry.alias("ink-0", "text").unwrap();
        for i in 1..MAX_ALIAS_DEPTH {
            registry.alias(format!("ink-{i}"), format!("ink-{}", i - 1)).unwrap();
        }
        let longest_ok = format!("ink-{}", MAX_ALIAS_DEPTH - 2);
        let too_deep = format!("ink-{}", MAX_ALIAS_DEPTH - 1);

        assert_eq!(registry.resolve_color(&longest_ok), Some(Color::BLACK));
        assert_eq!(registry.resolve(&too_deep), None);
        assert_eq!(
            registry.validate(&[]).unwrap_err(),
            vec![ThemeError::AliasTooDeep {
                alias: too_deep,
                limit: MAX_ALIAS_DEPTH,
            }]
        );
    }

    #[test]
    fn values_rendering_the_same_css_are_duplicates() {
        let mut registry = small_registry();
        let flat = |color| TokenValue::Shadow(Shadow::new(0.0, 0.0, 0.0, 0.0, color));
        registry
            .define("shadow-flat", TokenCategory::Shadow, flat(Color::BLACK))
            .unwrap();
        registry
            .define("shadow-flush", TokenCategory::Shadow, flat(Color::WHITE))
            .unwrap();
        assert_eq!(
            registry.validate(&[]).unwrap_err(),
            vec![ThemeError::DuplicateValue {
                category: TokenCategory::Shadow,
                first: "shadow-flat".into(),
                second: "shadow-flush".into(),
                value: "none".into(),
            }]
        );
    }

    #[test]
    fn names_by_category_keep_order() {
        let registry = small_registry();
        let colors: Vec<&str> = registry.names_in(TokenCategory::Color).collect();
        assert_eq!(colors, vec!["background", "text"]);
    }
}
