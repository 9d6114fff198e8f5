//! Cascade resolution
//!
//! An explicit ordered-rule evaluator: for one element and one state layer,
//! matching rules are ordered by specificity, then declaration order; normal
//! declarations are applied in that order, then `!important` ones in the same
//! order. A later application replaces an earlier value for the same
//! property.
//!
//! State layers are independent: [`Resolver::resolve_state`] evaluates only
//! the rules qualified by that state. [`Resolver::resolve_effective`] runs
//! one cascade over the base rules and that state's rules together, so a
//! more specific or `!important` base declaration still wins over a state
//! rule.

use indexmap::IndexMap;
use liftboard_theme::TokenRegistry;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::markup::ElementPath;
use crate::property::PropertyName;
use crate::rule::{OverrideMap, OverrideRule};
use crate::target::State;

/// Resolved property values for one element and state
///
/// Only properties some rule assigned are present; everything else falls
/// back to the host's own styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    properties: IndexMap<PropertyName, String>,
}

impl ResolvedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: PropertyName) -> Option<&str> {
        self.properties.get(&property).map(String::as_str)
    }

    pub fn contains(&self, property: PropertyName) -> bool {
        self.properties.contains_key(&property)
    }

    pub fn set(&mut self, property: PropertyName, value: String) {
        self.properties.insert(property, value);
    }

    /// Unset a property so the host default applies
    pub fn unset(&mut self, property: PropertyName) {
        self.properties.shift_remove(&property);
    }

    pub fn iter(&self) -> impl Iterator<Item = (PropertyName, &str)> {
        self.properties.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Merge with another style, `other` taking precedence
    pub fn merge(&self, other: &ResolvedStyle) -> ResolvedStyle {
        let mut merged = self.clone();
        for (property, value) in &other.properties {
            merged.properties.insert(*property, value.clone());
        }
        merged
    }

    /// Inline declaration block: `color: #0F172A; font-weight: 700;`
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Serialize for ResolvedStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for (property, value) in &self.properties {
            map.serialize_entry(property.css_name(), value)?;
        }
        map.end()
    }
}

/// Evaluates an override map against a token registry
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a TokenRegistry,
    map: &'a OverrideMap,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a TokenRegistry, map: &'a OverrideMap) -> Self {
        Self { registry, map }
    }

    /// Base layer: rules without a state qualifier
    pub fn resolve(&self, element: &ElementPath) -> ResolvedStyle {
        self.resolve_layer(element, None)
    }

    /// State layer alone, computed without the base layer
    pub fn resolve_state(&self, element: &ElementPath, state: State) -> ResolvedStyle {
        self.resolve_layer(element, Some(state))
    }

    /// Base rules and `state` rules cascaded together
    pub fn resolve_effective(&self, element: &ElementPath, state: State) -> ResolvedStyle {
        if !element.is_styled() {
            debug!(?element, "element outside the vocabulary, no overrides");
            return ResolvedStyle::new();
        }
        let rules = self.candidates(element, |layer| layer.is_none() || layer == Some(state));
        self.apply(&rules)
    }

    /// Rules of one layer that select `element`, in application order
    pub fn matching_rules(&self, element: &ElementPath, state: Option<State>) -> Vec<&'a OverrideRule> {
        if !element.is_styled() {
            return Vec::new();
        }
        self.candidates(element, |layer| layer == state)
    }

    fn candidates(
        &self,
        element: &ElementPath,
        in_layer: impl Fn(Option<State>) -> bool,
    ) -> Vec<&'a OverrideRule> {
        let mut candidates: Vec<(usize, usize, &'a OverrideRule)> = self
            .map
            .rules()
            .iter()
            .enumerate()
            .filter(|(_, rule)| in_layer(rule.state) && element.matches(&rule.target))
            .map(|(order, rule)| (rule.specificity(), order, rule))
            .collect();
        candidates.sort_by_key(|(specificity, order, _)| (*specificity, *order));
        candidates.into_iter().map(|(_, _, rule)| rule).collect()
    }

    fn resolve_layer(&self, element: &ElementPath, state: Option<State>) -> ResolvedStyle {
        if !element.is_styled() {
            debug!(?element, "element outside the vocabulary, no overrides");
            return ResolvedStyle::new();
        }
        self.apply(&self.candidates(element, |layer| layer == state))
    }

    /// Normal declarations in rule order, then `!important` ones
    fn apply(&self, rules: &[&OverrideRule]) -> ResolvedStyle {
        let mut style = ResolvedStyle::new();
        for important in [false, true] {
            for rule in rules {
                for decl in rule.declarations.iter().filter(|d| d.important == important) {
                    match decl.value.resolve(self.registry) {
                        Ok(value) => style.set(decl.property, value),
                        Err(token) => {
                            warn!(
                                selector = %rule.selector(),
                                property = %decl.property,
                                %token,
                                "unknown token, leaving property to host default"
                            );
                            style.unset(decl.property);
                        }
                    }
                }
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{PropertyValue, TokenRef};
    use crate::target::{Component, TargetPath};
    use liftboard_theme::{ColorToken, LiftboardTheme};

    fn registry() -> TokenRegistry {
        LiftboardTheme::registry()
    }

    #[test]
    fn later_rule_wins_at_equal_specificity() {
        let map = OverrideMap::new()
            .rule(OverrideRule::new(Component::Title).set(PropertyName::Color, ColorToken::Text))
            .rule(OverrideRule::new(Component::Title).set(PropertyName::Color, ColorToken::Accent));
        let registry = registry();
        let resolver = Resolver::new(&registry, &map);
        let style = resolver.resolve(&ElementPath::root(Component::Title));
        assert_eq!(style.get(PropertyName::Color), Some("#1D4ED8"));
    }

    #[test]
    fn more_specific_rule_wins_regardless_of_order() {
        let map = OverrideMap::new()
            .rule(
                OverrideRule::new(TargetPath::of(Component::Expander).descendant(Component::Button))
                    .set(PropertyName::Background, ColorToken::Surface),
            )
            .rule(OverrideRule::new(Component::Button).set(PropertyName::Background, ColorToken::Delete));
        let registry = registry();
        let resolver = Resolver::new(&registry, &map);

        let inside = ElementPath::root(Component::Expander).child(Component::Button);
        assert_eq!(resolver.resolve(&inside).get(PropertyName::Background), Some("#FFFFFF"));

        let outside = ElementPath::root(Component::Sidebar).child(Component::Button);
        assert_eq!(resolver.resolve(&outside).get(PropertyName::Background), Some("#DC2626"));
    }

    #[test]
    fn important_beats_specificity() {
        let map = OverrideMap::new()
            .rule(OverrideRule::new(Component::Button).set_important(PropertyName::FontWeight, "600"))
            .rule(
                OverrideRule::new(TargetPath::of(Component::Expander).descendant(Component::Button))
                    .set(PropertyName::FontWeight, "400"),
            );
        let registry = registry();
        let resolver = Resolver::new(&registry, &map);
        let button = ElementPath::root(Component::Expander).child(Component::Button);
        assert_eq!(resolver.resolve(&button).get(PropertyName::FontWeight), Some("600"));
    }

    #[test]
    fn state_layers_stay_separate() {
        let map = OverrideMap::new()
            .rule(OverrideRule::new(Component::Label).set(PropertyName::Color, ColorToken::Text))
            .rule(
                OverrideRule::new(Component::Label)
                    .state(State::Hover)
                    .set(PropertyName::Background, ColorToken::Background),
            );
        let registry = registry();
        let resolver = Resolver::new(&registry, &map);
        let label = ElementPath::root(Component::Label);

        let base = resolver.resolve(&label);
        let hover = resolver.resolve_state(&label, State::Hover);
        let effective = resolver.resolve_effective(&label, State::Hover);

        assert!(!base.contains(PropertyName::Background));
        assert!(!hover.contains(PropertyName::Color));
        assert_eq!(effective.len(), 2);
        assert!(resolver.resolve_state(&label, State::Focus).is_empty());
    }

    #[test]
    fn effective_style_cascades_base_and_state_together() {
        let map = OverrideMap::new()
            .rule(OverrideRule::new(Component::Button).set_important(PropertyName::Color, ColorToken::Accent))
            .rule(
                OverrideRule::new(TargetPath::of(Component::Expander).descendant(Component::Button))
                    .set(PropertyName::Background, ColorToken::Delete),
            )
            .rule(
                OverrideRule::new(Component::Button)
                    .state(State::Hover)
                    .set(PropertyName::Color, ColorToken::Text)
                    .set(PropertyName::Background, ColorToken::AccentHover)
                    .set(PropertyName::Transform, "translateY(-1px)"),
            );
        let registry = registry();
        let resolver = Resolver::new(&registry, &map);
        let button = ElementPath::root(Component::Expander).child(Component::Button);

        let hover = resolver.resolve_effective(&button, State::Hover);
        assert_eq!(hover.get(PropertyName::Color), Some("#1D4ED8"));
        assert_eq!(hover.get(PropertyName::Background), Some("#DC2626"));
        assert_eq!(hover.get(PropertyName::Transform), Some("translateY(-1px)"));

        // The state layer alone still reports its own values
        let layer = resolver.resolve_state(&button, State::Hover);
        assert_eq!(layer.get(PropertyName::Color), Some("#334155"));
    }

    #[test]
    fn dangling_reference_unsets_the_property() {
        let map = OverrideMap::new()
            .rule(OverrideRule::new(Component::Title).set(PropertyName::Color, ColorToken::Primary))
            .rule(OverrideRule::new(Component::Title).set(PropertyName::Color, TokenRef::new("missing")))
            .rule(OverrideRule::new(Component::Title).set(PropertyName::FontWeight, PropertyValue::literal("700")));
        let registry = registry();
        let resolver = Resolver::new(&registry, &map);
        let style = resolver.resolve(&ElementPath::root(Component::Title));
        assert_eq!(style.get(PropertyName::Color), None);
        assert_eq!(style.get(PropertyName::FontWeight), Some("700"));
    }

    #[test]
    fn serializes_with_css_names() {
        let mut style = ResolvedStyle::new();
        style.set(PropertyName::BorderRadius, "8px".into());
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"border-radius":"8px"}"#);
        assert_eq!(style.to_css(), "border-radius: 8px;");
    }
}
