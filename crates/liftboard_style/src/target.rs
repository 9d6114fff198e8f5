//! Selector targets
//!
//! The host dashboard tags its generated markup with fixed selector
//! fragments (`h1`, `[data-testid="stExpander"]`, ...). [`Component`] is the
//! closed vocabulary of fragments this overlay styles; anything else is
//! unmatched and left to the host's defaults.
//!
//! A [`TargetPath`] chains components from ancestor to target, e.g.
//! "button inside expander":
//!
//! ```
//! use liftboard_style::{Component, TargetPath};
//!
//! let target = TargetPath::of(Component::Expander).descendant(Component::Button);
//! assert_eq!(target.specificity(), 2);
//! assert_eq!(target.to_css(), r#"[data-testid="stExpander"] button"#);
//! ```

use std::fmt;

/// Host component identifiers styled by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// App root container
    App,
    /// Page title text
    Title,
    /// Primary section header
    Header,
    /// Tab bar
    TabList,
    /// Single tab
    Tab,
    /// Expander container
    Expander,
    /// Expander header button (the clickable summary)
    ExpanderHeader,
    /// Expander body
    ExpanderBody,
    /// Text paragraph
    Paragraph,
    /// Button element
    Button,
    /// Metric value text
    MetricValue,
    /// Chart container
    Chart,
    /// Sidebar container
    Sidebar,
    /// Radio group
    Radio,
    /// Form label
    Label,
    /// Text input widget container
    TextInput,
    /// Input element
    Input,
}

impl Component {
    pub const ALL: [Component; 17] = [
        Component::App,
        Component::Title,
        Component::Header,
        Component::TabList,
        Component::Tab,
        Component::Expander,
        Component::ExpanderHeader,
        Component::ExpanderBody,
        Component::Paragraph,
        Component::Button,
        Component::MetricValue,
        Component::Chart,
        Component::Sidebar,
        Component::Radio,
        Component::Label,
        Component::TextInput,
        Component::Input,
    ];

    /// The host's selector fragment for this component, verbatim
    pub fn selector(self) -> &'static str {
        match self {
            Component::App => r#"[data-testid="stApp"]"#,
            Component::Title => "h1",
            Component::Header => "h2",
            Component::TabList => r#"[data-baseweb="tab-list"]"#,
            Component::Tab => r#"[data-baseweb="tab"]"#,
            Component::Expander => r#"[data-testid="stExpander"]"#,
            Component::ExpanderHeader => "summary",
            Component::ExpanderBody => r#"[data-testid="stExpanderDetails"]"#,
            Component::Paragraph => "p",
            Component::Button => "button",
            Component::MetricValue => r#"[data-testid="stMetricValue"]"#,
            Component::Chart => r#"[data-testid="stPlotlyChart"]"#,
            Component::Sidebar => r#"[data-testid="stSidebar"]"#,
            Component::Radio => r#"[data-testid="stRadio"]"#,
            Component::Label => "label",
            Component::TextInput => r#"[data-testid="stTextInput"]"#,
            Component::Input => "input",
        }
    }

    /// Look up a host selector fragment
    ///
    /// Returns `None` for anything outside the vocabulary; callers treat that
    /// as "unmatched", never as an error.
    pub fn from_selector(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        Self::ALL.into_iter().find(|c| c.selector() == selector)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Interaction state qualifying a rule's target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// :hover
    Hover,
    /// :focus
    Focus,
    /// :active (pressed)
    Active,
    /// `[aria-selected="true"]`
    Selected,
    /// :disabled
    Disabled,
}

impl State {
    pub const ALL: [State; 5] = [
        State::Hover,
        State::Focus,
        State::Active,
        State::Selected,
        State::Disabled,
    ];

    /// Parse a state from a pseudo-class name
    pub fn parse_state(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hover" => Some(State::Hover),
            "focus" => Some(State::Focus),
            "active" => Some(State::Active),
            "selected" => Some(State::Selected),
            "disabled" => Some(State::Disabled),
            _ => None,
        }
    }

    /// CSS suffix selecting this state on the host markup
    pub fn css_suffix(self) -> &'static str {
        match self {
            State::Hover => ":hover",
            State::Focus => ":focus",
            State::Active => ":active",
            State::Selected => r#"[aria-selected="true"]"#,
            State::Disabled => ":disabled",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Hover => write!(f, "hover"),
            State::Focus => write!(f, "focus"),
            State::Active => write!(f, "active"),
            State::Selected => write!(f, "selected"),
            State::Disabled => write!(f, "disabled"),
        }
    }
}

/// Structural position among siblings
///
/// Distinguishing components by position couples the overlay to the host's
/// rendering order; prefer a distinct [`Component`] when the host offers one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// :first-child
    FirstChild,
    /// :nth-child(n), 1-based
    NthChild(usize),
}

impl Position {
    /// 1-based sibling index this position selects
    pub fn index(self) -> usize {
        match self {
            Position::FirstChild => 1,
            Position::NthChild(n) => n,
        }
    }

    pub fn css_suffix(self) -> String {
        match self {
            Position::FirstChild => ":first-child".to_string(),
            Position::NthChild(n) => format!(":nth-child({n})"),
        }
    }
}

/// Combinator between two segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (space): `A B`
    Descendant,
    /// Child combinator: `A > B`
    Child,
}

/// One component in a target chain, optionally pinned to a sibling position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub component: Component,
    pub position: Option<Position>,
}

impl Segment {
    pub fn new(component: Component) -> Self {
        Self {
            component,
            position: None,
        }
    }

    pub fn to_css(&self) -> String {
        match self.position {
            Some(position) => format!("{}{}", self.component.selector(), position.css_suffix()),
            None => self.component.selector().to_string(),
        }
    }
}

/// A chain of segments from ancestor to target
///
/// `segments` pairs each segment with the combinator joining it to the next
/// one; the last (target) segment always has `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath {
    pub segments: Vec<(Segment, Option<Combinator>)>,
}

impl TargetPath {
    /// Target a single component anywhere in the markup
    pub fn of(component: Component) -> Self {
        Self {
            segments: vec![(Segment::new(component), None)],
        }
    }

    /// Narrow to `component` somewhere inside the current target
    pub fn descendant(self, component: Component) -> Self {
        self.join(Combinator::Descendant, component)
    }

    /// Narrow to `component` directly inside the current target
    pub fn child(self, component: Component) -> Self {
        self.join(Combinator::Child, component)
    }

    fn join(mut self, combinator: Combinator, component: Component) -> Self {
        if let Some(last) = self.segments.last_mut() {
            last.1 = Some(combinator);
        }
        self.segments.push((Segment::new(component), None));
        self
    }

    /// Pin the target segment to the first sibling position
    pub fn first_child(self) -> Self {
        self.at(Position::FirstChild)
    }

    /// Pin the target segment to the n-th sibling position (1-based)
    pub fn nth_child(self, n: usize) -> Self {
        self.at(Position::NthChild(n))
    }

    fn at(mut self, position: Position) -> Self {
        if let Some((segment, _)) = self.segments.last_mut() {
            segment.position = Some(position);
        }
        self
    }

    /// The rightmost (target) segment
    pub fn target(&self) -> Option<&Segment> {
        self.segments.last().map(|(segment, _)| segment)
    }

    /// Number of qualifying segments
    pub fn specificity(&self) -> usize {
        self.segments.len()
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (segment, combinator) in &self.segments {
            css.push_str(&segment.to_css());
            match combinator {
                Some(Combinator::Descendant) => css.push(' '),
                Some(Combinator::Child) => css.push_str(" > "),
                None => {}
            }
        }
        css
    }
}

impl From<Component> for TargetPath {
    fn from(component: Component) -> Self {
        TargetPath::of(component)
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_round_trips_through_selectors() {
        for component in Component::ALL {
            assert_eq!(Component::from_selector(component.selector()), Some(component));
        }
        assert_eq!(Component::from_selector(r#"[data-testid="stDataFrame"]"#), None);
        assert_eq!(Component::from_selector(" h1 "), Some(Component::Title));
    }

    #[test]
    fn builds_chains() {
        let target = TargetPath::of(Component::Sidebar)
            .child(Component::Radio)
            .descendant(Component::Label);
        assert_eq!(target.specificity(), 3);
        assert_eq!(
            target.to_css(),
            r#"[data-testid="stSidebar"] > [data-testid="stRadio"] label"#
        );
        assert_eq!(target.target().map(|s| s.component), Some(Component::Label));
    }

    #[test]
    fn positions_pin_the_target_segment() {
        let second = TargetPath::of(Component::Expander)
            .descendant(Component::Button)
            .nth_child(2);
        assert_eq!(second.to_css(), r#"[data-testid="stExpander"] button:nth-child(2)"#);
        assert_eq!(second.target().and_then(|s| s.position), Some(Position::NthChild(2)));
        assert_eq!(Position::FirstChild.index(), 1);
    }

    #[test]
    fn parses_states() {
        assert_eq!(State::parse_state("HOVER"), Some(State::Hover));
        assert_eq!(State::parse_state("visited"), None);
        assert_eq!(State::Selected.css_suffix(), r#"[aria-selected="true"]"#);
    }
}
