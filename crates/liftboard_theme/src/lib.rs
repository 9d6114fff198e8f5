//! Liftboard Theme Tokens
//!
//! The token registry behind the Liftboard dashboard overlay: a closed set of
//! named design values that style rules refer to by name.
//!
//! # Overview
//!
//! - **Design tokens**: palette colors, a spacing scale, border radii, shadows
//! - **Aliases**: a token may explicitly alias another token of its category
//! - **Static validation**: dangling aliases, cycles, duplicated literals and
//!   WCAG contrast between text-bearing colors are checked at load time
//! - **Theme files**: registries can be loaded from TOML
//!
//! # Quick Start
//!
//! ```rust
//! use liftboard_theme::{ColorToken, ContrastRequirement, LiftboardTheme};
//!
//! let registry = LiftboardTheme::registry();
//! registry.validate(&ContrastRequirement::defaults()).unwrap();
//!
//! let accent = registry.resolve_css(ColorToken::Accent.name());
//! assert_eq!(accent.as_deref(), Some("#1D4ED8"));
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: background, surface, primary, accent, text, border, delete
//! - [`SpacingTokens`]: 4px-based spacing scale
//! - [`RadiusTokens`]: border radii
//! - [`ShadowTokens`]: box shadows

pub mod color;
pub mod config;
pub mod error;
pub mod registry;
pub mod themes;
pub mod tokens;

pub use color::Color;
pub use config::ThemeConfig;
pub use error::ThemeError;
pub use registry::{ContrastRequirement, TokenRegistry, WCAG_AA_TEXT};
pub use themes::LiftboardTheme;
pub use tokens::*;
