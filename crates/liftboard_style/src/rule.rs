//! Override rules and the ordered override map

use liftboard_theme::TokenRegistry;

use crate::error::StyleError;
use crate::property::{Declaration, PropertyName, PropertyValue, TokenRef};
use crate::target::{State, TargetPath};

/// Declarations applied to one target, optionally in one state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideRule {
    pub target: TargetPath,
    pub state: Option<State>,
    pub declarations: Vec<Declaration>,
}

impl OverrideRule {
    pub fn new(target: impl Into<TargetPath>) -> Self {
        Self {
            target: target.into(),
            state: None,
            declarations: Vec::new(),
        }
    }

    /// Qualify the rule with an interaction state
    pub fn state(mut self, state: State) -> Self {
        self.state = Some(state);
        self
    }

    /// Append a declaration
    pub fn set(mut self, property: PropertyName, value: impl Into<PropertyValue>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    /// Append an `!important` declaration
    pub fn set_important(mut self, property: PropertyName, value: impl Into<PropertyValue>) -> Self {
        self.declarations.push(Declaration::new(property, value).important());
        self
    }

    pub fn specificity(&self) -> usize {
        self.target.specificity()
    }

    /// Selector text including the state suffix
    pub fn selector(&self) -> String {
        match self.state {
            Some(state) => format!("{}{}", self.target.to_css(), state.css_suffix()),
            None => self.target.to_css(),
        }
    }

    /// Token references made by this rule
    pub fn tokens(&self) -> impl Iterator<Item = &TokenRef> {
        self.declarations.iter().flat_map(|decl| decl.value.tokens())
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("{} {{\n", self.selector());
        for decl in &self.declarations {
            css.push_str("    ");
            css.push_str(&decl.to_css());
            css.push('\n');
        }
        css.push('}');
        css
    }
}

/// Ordered sequence of override rules
///
/// Declaration order is the tie-break between rules of equal specificity, so
/// rules are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OverrideMap {
    rules: Vec<OverrideRule>,
}

impl OverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule
    pub fn push(&mut self, rule: OverrideRule) {
        self.rules.push(rule);
    }

    /// Builder-style [`push`](Self::push)
    pub fn rule(mut self, rule: OverrideRule) -> Self {
        self.push(rule);
        self
    }

    /// Append every rule of `other` after this map's rules
    pub fn merge(&mut self, other: OverrideMap) {
        self.rules.extend(other.rules);
    }

    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverrideRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Report every token reference the registry cannot resolve
    pub fn validate(&self, registry: &TokenRegistry) -> Vec<StyleError> {
        self.rules
            .iter()
            .flat_map(|rule| {
                rule.tokens()
                    .filter(|token| registry.resolve(token.name()).is_none())
                    .map(move |token| StyleError::DanglingToken {
                        target: rule.selector(),
                        token: token.name().to_string(),
                    })
            })
            .collect()
    }

    /// Render the rules as CSS, token references as `var(--name)`
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(OverrideRule::to_css)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl FromIterator<OverrideRule> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = OverrideRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Component;
    use liftboard_theme::{ColorToken, LiftboardTheme};

    #[test]
    fn renders_state_rules() {
        let rule = OverrideRule::new(Component::Tab)
            .state(State::Selected)
            .set(PropertyName::Color, ColorToken::Accent)
            .set(PropertyName::BorderBottom, PropertyValue::border("2px", ColorToken::Accent));
        assert_eq!(
            rule.to_css(),
            "[data-baseweb=\"tab\"][aria-selected=\"true\"] {\n    color: var(--accent);\n    border-bottom: 2px solid var(--accent);\n}"
        );
    }

    #[test]
    fn validation_lists_dangling_tokens() {
        let map = OverrideMap::new()
            .rule(OverrideRule::new(Component::Title).set(PropertyName::Color, ColorToken::Primary))
            .rule(
                OverrideRule::new(Component::Header)
                    .set(PropertyName::Color, TokenRef::new("brand"))
                    .set(PropertyName::Background, TokenRef::new("paper")),
            );
        let errors = map.validate(&LiftboardTheme::registry());
        assert_eq!(
            errors,
            vec![
                StyleError::DanglingToken {
                    target: "h2".into(),
                    token: "brand".into()
                },
                StyleError::DanglingToken {
                    target: "h2".into(),
                    token: "paper".into()
                },
            ]
        );
    }
}
