//! A validated registry and override map
//!
//! [`Overlay`] is what the host loads: construction runs every static check
//! once, after which resolution cannot fail.

use std::path::Path;

use liftboard_theme::{ContrastRequirement, LiftboardTheme, TokenRegistry};
use tracing::{debug, warn};

use crate::css_parser::{Severity, Stylesheet};
use crate::css_writer::write_stylesheet;
use crate::error::{StyleError, ValidationErrors};
use crate::markup::ElementPath;
use crate::resolve::{ResolvedStyle, Resolver};
use crate::rule::OverrideMap;
use crate::target::State;
use crate::themes::DashboardOverlay;

/// Token registry plus the rules drawing on it
#[derive(Debug, Clone)]
pub struct Overlay {
    registry: TokenRegistry,
    rules: OverrideMap,
}

impl Overlay {
    /// Validate against the default contrast requirements
    pub fn new(registry: TokenRegistry, rules: OverrideMap) -> Result<Self, ValidationErrors> {
        Self::with_requirements(registry, rules, &ContrastRequirement::defaults())
    }

    /// Validate against explicit contrast requirements
    ///
    /// Every defect is reported, not just the first.
    pub fn with_requirements(
        registry: TokenRegistry,
        rules: OverrideMap,
        requirements: &[ContrastRequirement],
    ) -> Result<Self, ValidationErrors> {
        let mut errors: Vec<StyleError> = match registry.validate(requirements) {
            Ok(()) => Vec::new(),
            Err(theme_errors) => theme_errors.into_iter().map(StyleError::from).collect(),
        };
        errors.extend(rules.validate(&registry));

        if !errors.is_empty() {
            for err in &errors {
                warn!(%err, "overlay rejected");
            }
            return Err(ValidationErrors(errors));
        }

        debug!(tokens = registry.len(), rules = rules.len(), "overlay loaded");
        Ok(Self { registry, rules })
    }

    /// The built-in dashboard overlay
    pub fn builtin() -> Self {
        Self {
            registry: LiftboardTheme::registry(),
            rules: DashboardOverlay::overrides(),
        }
    }

    /// Load an overlay from CSS
    ///
    /// Tokens come from the `:root` block, or the built-in registry when there
    /// is none. Parse warnings are logged; parse errors fail the load.
    pub fn from_css(css: &str) -> Result<Self, ValidationErrors> {
        let result = Stylesheet::parse_with_errors(css);
        result.log_diagnostics();

        let errors: Vec<StyleError> = result
            .errors
            .into_iter()
            .filter(|e| e.severity == Severity::Error)
            .map(StyleError::from)
            .collect();
        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        let stylesheet = result.stylesheet;
        let registry = stylesheet.tokens.unwrap_or_else(LiftboardTheme::registry);
        Self::new(registry, stylesheet.rules)
    }

    /// Built-in rules over a registry read from a TOML theme file
    pub fn from_theme_file(path: impl AsRef<Path>) -> Result<Self, ValidationErrors> {
        let registry = TokenRegistry::from_file(path)
            .map_err(|err| ValidationErrors(vec![StyleError::from(err)]))?;
        Self::new(registry, DashboardOverlay::overrides())
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &OverrideMap {
        &self.rules
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry, &self.rules)
    }

    /// Base layer for an element
    pub fn resolve(&self, element: &ElementPath) -> ResolvedStyle {
        self.resolver().resolve(element)
    }

    /// One state layer for an element, without the base layer
    pub fn resolve_state(&self, element: &ElementPath, state: State) -> ResolvedStyle {
        self.resolver().resolve_state(element, state)
    }

    /// Base and state rules cascaded together
    pub fn resolve_effective(&self, element: &ElementPath, state: State) -> ResolvedStyle {
        self.resolver().resolve_effective(element, state)
    }

    /// Stylesheet for the host's style-injection mechanism
    pub fn to_css(&self) -> String {
        write_stylesheet(&self.registry, &self.rules)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{PropertyName, TokenRef};
    use crate::rule::OverrideRule;
    use crate::target::Component;
    use liftboard_theme::{Color, ThemeError, TokenCategory, TokenValue};

    #[test]
    fn builtin_overlay_passes_validation() {
        let builtin = Overlay::builtin();
        let validated = Overlay::new(builtin.registry().clone(), builtin.rules().clone());
        assert!(validated.is_ok());
    }

    #[test]
    fn collects_every_defect() {
        let mut registry = LiftboardTheme::registry();
        // Same value as `border`, not declared as an alias
        registry
            .define(
                "divider",
                TokenCategory::Color,
                TokenValue::Color(Color::from_hex(0xE2E8F0)),
            )
            .unwrap();
        let rules = OverrideMap::new()
            .rule(OverrideRule::new(Component::Title).set(PropertyName::Color, TokenRef::new("brand")));

        let errors = Overlay::new(registry, rules).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors.errors()[0],
            StyleError::Theme(ThemeError::DuplicateValue { .. })
        ));
        assert_eq!(
            errors.errors()[1],
            StyleError::DanglingToken {
                target: "h1".into(),
                token: "brand".into()
            }
        );
    }

    #[test]
    fn css_without_root_uses_builtin_tokens() {
        let overlay = Overlay::from_css("h1 { color: var(--accent); }").unwrap();
        let style = overlay.resolve(&ElementPath::root(Component::Title));
        assert_eq!(style.get(PropertyName::Color), Some("#1D4ED8"));
    }

    #[test]
    fn css_parse_errors_fail_the_load() {
        let errors = Overlay::from_css("h1 { color var(--accent); }").unwrap_err();
        assert!(matches!(errors.errors()[0], StyleError::Parse(_)));
    }
}
