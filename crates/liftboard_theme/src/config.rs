//! TOML theme files
//!
//! ```toml
//! name = "Liftboard"
//!
//! [colors]
//! background = "#F8FAFC"
//! accent = "#1D4ED8"
//!
//! [spacing]
//! space-md = "12px"
//!
//! [radius]
//! radius-md = "8px"
//!
//! [shadows]
//! shadow-md = "0 4px 6px -1px rgba(15, 23, 42, 0.1)"
//!
//! [aliases]
//! on-accent = "surface"
//! ```
//!
//! Section order is preserved, so tokens keep the order they are written in.

use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use tracing::debug;

use crate::color::Color;
use crate::error::ThemeError;
use crate::registry::TokenRegistry;
use crate::tokens::{parse_px, Shadow, TokenCategory, TokenValue};

/// Deserialized theme file
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: Option<String>,
    pub colors: IndexMap<String, String>,
    pub spacing: IndexMap<String, String>,
    pub radius: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    pub aliases: IndexMap<String, String>,
}

impl ThemeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(text)?)
    }

    /// Build a registry from this configuration
    ///
    /// Aliases may point at other aliases in any order; whatever cannot be
    /// placed once no further progress is possible is reported as an unknown
    /// target or a cycle.
    pub fn into_registry(self) -> Result<TokenRegistry, ThemeError> {
        let mut registry = TokenRegistry::new();

        for (name, value) in self.colors {
            let color = Color::parse(&value)?;
            registry.define(name, TokenCategory::Color, TokenValue::Color(color))?;
        }
        for (category, section) in [
            (TokenCategory::Spacing, self.spacing),
            (TokenCategory::Radius, self.radius),
        ] {
            for (name, value) in section {
                let px = parse_px(&value).ok_or_else(|| ThemeError::InvalidLength(value.clone()))?;
                registry.define(name, category, TokenValue::Length(px))?;
            }
        }
        for (name, value) in self.shadows {
            registry.define(name, TokenCategory::Shadow, TokenValue::Shadow(Shadow::parse(&value)?))?;
        }

        let mut pending: Vec<(String, String)> = self.aliases.into_iter().collect();
        while !pending.is_empty() {
            let before = pending.len();
            let mut deferred = Vec::new();
            for (alias, target) in pending {
                if registry.contains(&target) {
                    registry.alias(alias, target)?;
                } else {
                    deferred.push((alias, target));
                }
            }
            if deferred.len() == before {
                let (alias, target) = &deferred[0];
                return Err(stuck_alias(alias, target, &deferred));
            }
            pending = deferred;
        }

        debug!(
            name = self.name.as_deref().unwrap_or("unnamed"),
            tokens = registry.len(),
            "loaded theme configuration"
        );
        Ok(registry)
    }
}

/// Explain why none of the remaining aliases can be placed
///
/// Follows `alias` through the other pending ones: revisiting a name
/// is a cycle, otherwise the chain ends at a token that does not exist.
fn stuck_alias(alias: &str, target: &str, pending: &[(String, String)]) -> ThemeError {
    let targets: FxHashMap<&str, &str> = pending
        .iter()
        .map(|(alias, target)| (alias.as_str(), target.as_str()))
        .collect();
    let mut seen = FxHashSet::default();
    seen.insert(alias);
    let mut current = target;
    while let Some(&next) = targets.get(current) {
        if !seen.insert(current) {
            return ThemeError::AliasCycle(current.to_string());
        }
        current = next;
    }
    ThemeError::UnknownToken(current.to_string())
}

impl TokenRegistry {
    /// Parse a TOML theme file into a registry
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        ThemeConfig::from_toml_str(text)?.into_registry()
    }

    /// Read and parse a TOML theme file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
