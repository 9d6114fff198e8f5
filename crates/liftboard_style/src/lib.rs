//! Liftboard Style Overlay
//!
//! Maps the Liftboard design tokens onto the component selectors of the host
//! dashboard's generated markup, and resolves which values win for a given
//! element and interaction state.
//!
//! # Overview
//!
//! - **Targets**: a closed vocabulary of host components, chained from
//!   ancestor to descendant and optionally pinned to a sibling position
//! - **Override map**: ordered rules assigning token-derived values to
//!   properties, optionally per interaction state
//! - **Resolver**: an explicit cascade (specificity, then declaration order,
//!   with `!important` applied last)
//! - **CSS**: the overlay is emitted as a stylesheet and can be read back
//!
//! # Quick Start
//!
//! ```rust
//! use liftboard_style::{Component, ElementPath, OverlayState, PropertyName, State};
//!
//! let overlay = OverlayState::get();
//! let tab = ElementPath::root(Component::TabList).child(Component::Tab);
//!
//! let selected = overlay.resolve_state(&tab, State::Selected);
//! assert_eq!(selected.get(PropertyName::Color), Some("#1D4ED8"));
//! assert_eq!(selected.get(PropertyName::BorderBottom), Some("2px solid #1D4ED8"));
//!
//! // Unselected tabs keep the host's colors
//! assert_eq!(overlay.resolve(&tab).get(PropertyName::Color), None);
//! ```
//!
//! Anything outside the vocabulary is left alone:
//!
//! ```rust
//! use liftboard_style::{ElementPath, Overlay};
//!
//! let table = ElementPath::from_selectors([r#"[data-testid="stDataFrame"]"#]);
//! assert!(Overlay::builtin().resolve(&table).is_empty());
//! ```

pub mod css_parser;
pub mod css_writer;
pub mod error;
pub mod markup;
pub mod overlay;
pub mod property;
pub mod resolve;
pub mod rule;
pub mod state;
pub mod target;
pub mod themes;

pub use css_parser::{CssParseResult, ParseError, Severity, Stylesheet};
pub use css_writer::write_stylesheet;
pub use error::{StyleError, ValidationErrors};
pub use markup::{ElementPath, Node, NodeKind};
pub use overlay::Overlay;
pub use property::{Declaration, PropertyName, PropertyValue, TokenRef, ValuePart};
pub use resolve::{ResolvedStyle, Resolver};
pub use rule::{OverrideMap, OverrideRule};
pub use state::OverlayState;
pub use target::{Combinator, Component, Position, Segment, State, TargetPath};
pub use themes::DashboardOverlay;

// Token registry crate
pub use liftboard_theme;
