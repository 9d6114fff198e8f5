//! Dashboard overlay
//!
//! Rules for the workout dashboard's markup. Two buttons sit side by side in
//! each expander (edit, then delete) and the host gives them no distinct
//! identifiers, so they are told apart by sibling position.

use liftboard_theme::{ColorToken, RadiusToken, ShadowToken, SpacingToken};

use crate::property::{PropertyName as P, PropertyValue, TokenRef, ValuePart};
use crate::rule::{OverrideMap, OverrideRule};
use crate::target::{Component, State, TargetPath};

const TRANSITION: &str = "all 0.2s ease";

fn on_accent() -> TokenRef {
    TokenRef::new("on-accent")
}

fn on_delete() -> TokenRef {
    TokenRef::new("on-delete")
}

fn heading() -> TokenRef {
    TokenRef::new("heading")
}

/// `0 0 <space>`: spacing under a block only
fn below(space: SpacingToken) -> PropertyValue {
    PropertyValue::parts([ValuePart::literal("0 0 "), ValuePart::token(space)])
}

fn expander_button() -> TargetPath {
    TargetPath::of(Component::Expander).descendant(Component::Button)
}

/// The built-in dashboard overlay
#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardOverlay;

impl DashboardOverlay {
    /// Every built-in rule, in declaration order
    pub fn overrides() -> OverrideMap {
        let mut map = OverrideMap::new();
        map.merge(Self::page());
        map.merge(Self::tabs());
        map.merge(Self::expanders());
        map.merge(Self::buttons());
        map.merge(Self::data());
        map.merge(Self::sidebar());
        map.merge(Self::inputs());
        map
    }

    fn page() -> OverrideMap {
        OverrideMap::new()
            .rule(
                OverrideRule::new(Component::App)
                    .set(P::Background, ColorToken::Background)
                    .set(P::Color, ColorToken::Text),
            )
            .rule(
                OverrideRule::new(Component::Title)
                    .set(P::Color, heading())
                    .set(P::FontSize, "2.25rem")
                    .set(P::FontWeight, "700")
                    .set(P::Margin, below(SpacingToken::Lg)),
            )
            .rule(
                OverrideRule::new(Component::Header)
                    .set(P::Color, heading())
                    .set(P::FontSize, "1.5rem")
                    .set(P::FontWeight, "600")
                    .set(P::BorderBottom, PropertyValue::border("1px", ColorToken::Border))
                    .set(P::Padding, below(SpacingToken::Sm)),
            )
    }

    fn tabs() -> OverrideMap {
        OverrideMap::new()
            .rule(
                OverrideRule::new(Component::TabList)
                    .set(P::BorderBottom, PropertyValue::border("1px", ColorToken::Border))
                    .set(P::Margin, below(SpacingToken::Md)),
            )
            .rule(
                OverrideRule::new(Component::Tab)
                    .set(P::Padding, PropertyValue::pair(SpacingToken::Sm, SpacingToken::Lg))
                    .set(P::FontWeight, "500")
                    .set(P::Transition, TRANSITION),
            )
            .rule(
                OverrideRule::new(Component::Tab)
                    .state(State::Hover)
                    .set(P::Color, ColorToken::AccentHover),
            )
            .rule(
                OverrideRule::new(Component::Tab)
                    .state(State::Selected)
                    .set(P::Color, ColorToken::Accent)
                    .set(P::BorderBottom, PropertyValue::border("2px", ColorToken::Accent)),
            )
    }

    fn expanders() -> OverrideMap {
        OverrideMap::new()
            .rule(
                OverrideRule::new(Component::Expander)
                    .set(P::Background, ColorToken::Surface)
                    .set(P::Border, PropertyValue::border("1px", ColorToken::Border))
                    .set(P::BorderRadius, RadiusToken::Md)
                    .set(P::BoxShadow, ShadowToken::Sm)
                    .set(P::Margin, below(SpacingToken::Md)),
            )
            .rule(
                OverrideRule::new(TargetPath::of(Component::Expander).descendant(Component::ExpanderHeader))
                    .set(P::Color, ColorToken::Primary)
                    .set(P::FontWeight, "600")
                    .set(P::Padding, PropertyValue::pair(SpacingToken::Md, SpacingToken::Lg))
                    .set(P::Transition, TRANSITION),
            )
            .rule(
                OverrideRule::new(TargetPath::of(Component::Expander).descendant(Component::ExpanderHeader))
                    .state(State::Hover)
                    .set(P::Color, ColorToken::Accent)
                    .set(P::Background, ColorToken::Background),
            )
            .rule(
                OverrideRule::new(
                    TargetPath::of(Component::Expander)
                        .descendant(Component::ExpanderBody)
                        .descendant(Component::Paragraph),
                )
                .set(P::Color, ColorToken::TextMuted)
                .set(P::Margin, below(SpacingToken::Xs)),
            )
    }

    fn buttons() -> OverrideMap {
        OverrideMap::new()
            .rule(
                OverrideRule::new(Component::Button)
                    .set(P::Background, ColorToken::Accent)
                    .set(P::Color, on_accent())
                    .set(P::Border, "none")
                    .set(P::BorderRadius, RadiusToken::Md)
                    .set(P::Padding, PropertyValue::pair(SpacingToken::Sm, SpacingToken::Lg))
                    .set(P::FontWeight, "600")
                    .set(P::Transition, TRANSITION),
            )
            .rule(
                OverrideRule::new(Component::Button)
                    .state(State::Hover)
                    .set(P::Background, ColorToken::AccentHover)
                    .set(P::Transform, "translateY(-1px)"),
            )
            .rule(
                OverrideRule::new(Component::Button)
                    .state(State::Disabled)
                    .set(P::Background, ColorToken::Border)
                    .set(P::Color, ColorToken::TextMuted)
                    .set(P::Transform, "none"),
            )
            // Edit: first button in the expander
            .rule(
                OverrideRule::new(expander_button().first_child())
                    .set(P::Background, ColorToken::Surface)
                    .set(P::Color, ColorToken::Text)
                    .set(P::Border, PropertyValue::border("1px", ColorToken::Border)),
            )
            .rule(
                OverrideRule::new(expander_button().first_child())
                    .state(State::Hover)
                    .set(P::Background, ColorToken::Background)
                    .set(P::Border, PropertyValue::border("1px", ColorToken::Accent)),
            )
            // Delete: second button in the expander
            .rule(
                OverrideRule::new(expander_button().nth_child(2))
                    .set(P::Background, ColorToken::Delete)
                    .set(P::Color, on_delete())
                    .set(P::Border, PropertyValue::border("1px", ColorToken::Delete)),
            )
            .rule(
                OverrideRule::new(expander_button().nth_child(2))
                    .state(State::Hover)
                    .set(P::Background, ColorToken::DeleteHover)
                    .set(P::Border, PropertyValue::border("1px", ColorToken::DeleteHover)),
            )
    }

    fn data() -> OverrideMap {
        OverrideMap::new()
            .rule(
                OverrideRule::new(Component::MetricValue)
                    .set(P::Color, ColorToken::Accent)
                    .set(P::FontWeight, "700"),
            )
            .rule(
                OverrideRule::new(Component::Chart)
                    .set(P::Background, ColorToken::Surface)
                    .set(P::BorderRadius, RadiusToken::Lg)
                    .set(P::BoxShadow, ShadowToken::Md)
                    .set(P::Padding, SpacingToken::Md),
            )
    }

    fn sidebar() -> OverrideMap {
        let label = TargetPath::of(Component::Sidebar)
            .descendant(Component::Radio)
            .descendant(Component::Label);
        OverrideMap::new()
            .rule(
                OverrideRule::new(Component::Sidebar)
                    .set(P::Background, ColorToken::Surface)
                    .set(P::BoxShadow, ShadowToken::Sm),
            )
            .rule(
                OverrideRule::new(label.clone())
                    .set(P::Color, ColorToken::Text)
                    .set(P::Padding, PropertyValue::pair(SpacingToken::Xs, SpacingToken::Sm))
                    .set(P::BorderRadius, RadiusToken::Sm)
                    .set(P::Transition, TRANSITION),
            )
            .rule(
                OverrideRule::new(label)
                    .state(State::Hover)
                    .set(P::Color, ColorToken::Accent)
                    .set(P::Background, ColorToken::Background),
            )
    }

    fn inputs() -> OverrideMap {
        let input = TargetPath::of(Component::TextInput).descendant(Component::Input);
        OverrideMap::new()
            .rule(
                OverrideRule::new(input.clone())
                    .set(P::Border, PropertyValue::border("1px", ColorToken::Border))
                    .set(P::BorderRadius, RadiusToken::Md)
                    .set(P::Padding, PropertyValue::pair(SpacingToken::Sm, SpacingToken::Md))
                    .set(P::Transition, TRANSITION),
            )
            .rule(
                OverrideRule::new(input)
                    .state(State::Focus)
                    .set(P::Border, PropertyValue::border("1px", ColorToken::Accent))
                    .set(P::BoxShadow, ShadowToken::Sm),
            )
    }
}
