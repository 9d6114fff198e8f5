use liftboard_style::{
    liftboard_theme::LiftboardTheme, Component, ElementPath, Overlay, OverrideMap, PropertyName,
    Resolver, State, StyleError,
};

fn resolver_for(css: &str) -> (liftboard_style::liftboard_theme::TokenRegistry, OverrideMap) {
    (LiftboardTheme::registry(), OverrideMap::parse_css(css).unwrap())
}

fn sidebar_label() -> ElementPath {
    ElementPath::root(Component::Sidebar)
        .child(Component::Radio)
        .child(Component::Label)
}

#[test]
fn later_rule_wins_at_equal_specificity() {
    let (registry, map) = resolver_for(
        r#"
        label { color: var(--text); font-weight: 500; }
        label { color: var(--accent); }
        "#,
    );
    let style = Resolver::new(&registry, &map).resolve(&sidebar_label());
    assert_eq!(style.get(PropertyName::Color), Some("#1D4ED8"));
    assert_eq!(style.get(PropertyName::FontWeight), Some("500"));
}

#[test]
fn specificity_beats_declaration_order() {
    let (registry, map) = resolver_for(
        r#"
        [data-testid="stSidebar"] label { color: var(--primary); }
        label { color: var(--accent); }
        "#,
    );
    let style = Resolver::new(&registry, &map).resolve(&sidebar_label());
    assert_eq!(style.get(PropertyName::Color), Some("#0F172A"));
}

#[test]
fn important_beats_specificity() {
    let (registry, map) = resolver_for(
        r#"
        label { color: var(--accent) !important; }
        [data-testid="stSidebar"] [data-testid="stRadio"] label { color: var(--primary); }
        "#,
    );
    let resolver = Resolver::new(&registry, &map);
    assert_eq!(
        resolver.resolve(&sidebar_label()).get(PropertyName::Color),
        Some("#1D4ED8")
    );
}

#[test]
fn later_important_wins_among_important() {
    let (registry, map) = resolver_for(
        r#"
        [data-testid="stSidebar"] label { color: var(--primary) !important; }
        label { color: var(--accent) !important; }
        "#,
    );
    let resolver = Resolver::new(&registry, &map);
    // Important declarations keep specificity order among themselves
    assert_eq!(
        resolver.resolve(&sidebar_label()).get(PropertyName::Color),
        Some("#0F172A")
    );
}

#[test]
fn child_combinator_needs_the_direct_parent() {
    let (registry, map) = resolver_for(
        r#"[data-testid="stSidebar"] > label { color: var(--accent); }"#,
    );
    let resolver = Resolver::new(&registry, &map);

    let direct = ElementPath::root(Component::Sidebar).child(Component::Label);
    assert_eq!(resolver.resolve(&direct).get(PropertyName::Color), Some("#1D4ED8"));
    assert!(resolver.resolve(&sidebar_label()).is_empty());
}

#[test]
fn state_layers_resolve_independently() {
    let (registry, map) = resolver_for(
        r#"
        input { border: 1px solid var(--border); }
        input:focus { border: 1px solid var(--accent); }
        input:disabled { color: var(--text-muted); }
        "#,
    );
    let resolver = Resolver::new(&registry, &map);
    let input = ElementPath::root(Component::TextInput).child(Component::Input);

    assert_eq!(
        resolver.resolve(&input).get(PropertyName::Border),
        Some("1px solid #E2E8F0")
    );
    let focus = resolver.resolve_state(&input, State::Focus);
    assert_eq!(focus.len(), 1);
    assert_eq!(focus.get(PropertyName::Border), Some("1px solid #1D4ED8"));

    let disabled = resolver.resolve_effective(&input, State::Disabled);
    assert_eq!(disabled.get(PropertyName::Border), Some("1px solid #E2E8F0"));
    assert_eq!(disabled.get(PropertyName::Color), Some("#64748B"));
    assert!(resolver.resolve_state(&input, State::Active).is_empty());
}

#[test]
fn base_important_survives_a_state_rule() {
    let (registry, map) = resolver_for(
        r#"
        button { color: var(--accent) !important; }
        button:hover { color: var(--text); background: var(--accent-hover); }
        "#,
    );
    let resolver = Resolver::new(&registry, &map);
    let button = ElementPath::root(Component::Button);

    let hover = resolver.resolve_effective(&button, State::Hover);
    assert_eq!(hover.get(PropertyName::Color), Some("#1D4ED8"));
    assert_eq!(hover.get(PropertyName::Background), Some("#1E40AF"));
}

#[test]
fn specific_base_rule_beats_a_generic_state_rule() {
    let (registry, map) = resolver_for(
        r#"
        button:disabled { background: var(--border); }
        [data-testid="stExpander"] button { background: var(--delete); }
        button:disabled { color: var(--text-muted); }
        "#,
    );
    let resolver = Resolver::new(&registry, &map);
    let button = ElementPath::root(Component::Expander).child(Component::Button);

    let disabled = resolver.resolve_effective(&button, State::Disabled);
    assert_eq!(disabled.get(PropertyName::Background), Some("#DC2626"));
    assert_eq!(disabled.get(PropertyName::Color), Some("#64748B"));
    assert_eq!(
        resolver.resolve_state(&button, State::Disabled).get(PropertyName::Background),
        Some("#E2E8F0")
    );
}

#[test]
fn unresolved_token_falls_back_to_host_default() {
    let (registry, map) = resolver_for(
        r#"
        h1 { color: var(--primary); }
        h1 { color: var(--brand); font-size: 2rem; }
        "#,
    );
    let style = Resolver::new(&registry, &map).resolve(&ElementPath::root(Component::Title));
    assert!(!style.contains(PropertyName::Color));
    assert_eq!(style.get(PropertyName::FontSize), Some("2rem"));

    let errors = Overlay::new(registry, map).unwrap_err();
    assert_eq!(
        errors.errors(),
        [StyleError::DanglingToken {
            target: "h1".to_string(),
            token: "brand".to_string()
        }]
    );
}

#[test]
fn matching_rules_are_ordered_for_application() {
    let (registry, map) = resolver_for(
        r#"
        [data-testid="stSidebar"] label { color: var(--primary); }
        label { color: var(--accent); }
        label:hover { color: var(--accent-hover); }
        [data-testid="stRadio"] label { font-weight: 600; }
        "#,
    );
    let resolver = Resolver::new(&registry, &map);
    let selectors: Vec<String> = resolver
        .matching_rules(&sidebar_label(), None)
        .into_iter()
        .map(|rule| rule.selector())
        .collect();
    assert_eq!(
        selectors,
        [
            "label",
            r#"[data-testid="stSidebar"] label"#,
            r#"[data-testid="stRadio"] label"#,
        ]
    );
}
