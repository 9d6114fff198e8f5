//! Rendered markup as seen by the resolver
//!
//! The resolver does not walk a DOM. The host describes one element by its
//! chain of ancestors, root first:
//!
//! ```
//! use liftboard_style::{Component, ElementPath};
//!
//! // second button inside an expander
//! let delete = ElementPath::root(Component::Expander).child_at(Component::Button, 2);
//! assert_eq!(delete.len(), 2);
//! ```

use crate::target::{Combinator, Component, Segment, TargetPath};

/// Identity of a markup node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A component from the overlay's vocabulary
    Known(Component),
    /// Any other host identifier; never styled, but may sit between
    /// styled ancestors and descendants
    Unknown(String),
}

impl NodeKind {
    /// Classify a host selector fragment
    pub fn from_selector(selector: &str) -> Self {
        match Component::from_selector(selector) {
            Some(component) => NodeKind::Known(component),
            None => NodeKind::Unknown(selector.to_string()),
        }
    }
}

/// One node in an element's ancestor chain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub kind: NodeKind,
    /// 1-based position among siblings, when the host reports it
    pub index: Option<usize>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, index: None }
    }

    pub fn component(&self) -> Option<Component> {
        match self.kind {
            NodeKind::Known(component) => Some(component),
            NodeKind::Unknown(_) => None,
        }
    }

    fn matches(&self, segment: &Segment) -> bool {
        if self.component() != Some(segment.component) {
            return false;
        }
        match segment.position {
            Some(position) => self.index == Some(position.index()),
            None => true,
        }
    }
}

/// An element and its ancestors, root first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ElementPath {
    nodes: Vec<Node>,
}

impl ElementPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a path at a known component
    pub fn root(component: Component) -> Self {
        Self::new().child(component)
    }

    /// Build a path from host selector fragments, root first
    ///
    /// Fragments outside the vocabulary become [`NodeKind::Unknown`] nodes.
    pub fn from_selectors<'a>(selectors: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            nodes: selectors
                .into_iter()
                .map(|s| Node::new(NodeKind::from_selector(s)))
                .collect(),
        }
    }

    /// Append a child node
    pub fn child(mut self, component: Component) -> Self {
        self.nodes.push(Node::new(NodeKind::Known(component)));
        self
    }

    /// Append a child node at a 1-based sibling position
    pub fn child_at(mut self, component: Component, index: usize) -> Self {
        self.nodes.push(Node {
            kind: NodeKind::Known(component),
            index: Some(index),
        });
        self
    }

    /// Append a node the overlay does not know
    pub fn unknown(mut self, host_id: impl Into<String>) -> Self {
        self.nodes.push(Node::new(NodeKind::Unknown(host_id.into())));
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The element itself (last node)
    pub fn element(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the element is in the vocabulary and can receive overrides
    pub fn is_styled(&self) -> bool {
        self.element().and_then(Node::component).is_some()
    }

    /// Whether `target` selects this element
    ///
    /// Matches right to left: the target segment must match the element,
    /// each child combinator the direct parent, and each descendant
    /// combinator some ancestor further up.
    pub fn matches(&self, target: &TargetPath) -> bool {
        match (target.segments.len(), self.nodes.len()) {
            (0, _) | (_, 0) => false,
            (segments, nodes) => self.match_from(target, segments - 1, nodes - 1),
        }
    }

    fn match_from(&self, target: &TargetPath, segment: usize, node: usize) -> bool {
        if !self.nodes[node].matches(&target.segments[segment].0) {
            return false;
        }
        if segment == 0 {
            return true;
        }
        match target.segments[segment - 1].1 {
            Some(Combinator::Child) => node > 0 && self.match_from(target, segment - 1, node - 1),
            // Descendant; a missing combinator on a non-final segment is read the same way
            _ => (0..node)
                .rev()
                .any(|ancestor| self.match_from(target, segment - 1, ancestor)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descendant_skips_intermediate_nodes() {
        let label = ElementPath::root(Component::App)
            .child(Component::Sidebar)
            .unknown("div")
            .child(Component::Radio)
            .child(Component::Label);
        let target = TargetPath::of(Component::Sidebar)
            .descendant(Component::Radio)
            .descendant(Component::Label);
        assert!(label.matches(&target));
    }

    #[test]
    fn child_requires_direct_parent() {
        let target = TargetPath::of(Component::Sidebar).child(Component::Label);
        let direct = ElementPath::root(Component::Sidebar).child(Component::Label);
        let nested = ElementPath::root(Component::Sidebar)
            .child(Component::Radio)
            .child(Component::Label);
        assert!(direct.matches(&target));
        assert!(!nested.matches(&target));
    }

    #[test]
    fn target_segment_must_be_the_element() {
        let target = TargetPath::of(Component::Expander);
        let inside = ElementPath::root(Component::Expander).child(Component::Paragraph);
        assert!(!inside.matches(&target));
    }

    #[test]
    fn positions_compare_sibling_index() {
        let first = TargetPath::of(Component::Expander)
            .descendant(Component::Button)
            .first_child();
        let second = TargetPath::of(Component::Expander)
            .descendant(Component::Button)
            .nth_child(2);
        let button = ElementPath::root(Component::Expander).child_at(Component::Button, 2);
        assert!(!button.matches(&first));
        assert!(button.matches(&second));
        // Position-less button carries no index and only matches unpinned rules
        let bare = ElementPath::root(Component::Expander).child(Component::Button);
        assert!(!bare.matches(&second));
        assert!(bare.matches(&TargetPath::of(Component::Button)));
    }

    #[test]
    fn unknown_selectors_become_unknown_nodes() {
        let path = ElementPath::from_selectors(["h1", r#"[data-testid="stDataFrame"]"#]);
        assert_eq!(path.nodes()[0].component(), Some(Component::Title));
        assert!(!path.is_styled());
    }
}
