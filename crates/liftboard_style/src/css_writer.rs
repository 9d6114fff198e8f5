//! Stylesheet output
//!
//! Tokens become custom properties on `:root`; rules keep their token
//! references as `var(--name)`, so the emitted sheet re-themes by swapping
//! the `:root` block alone.

use liftboard_theme::{TokenKind, TokenRegistry};

use crate::rule::OverrideMap;

/// `:root` block declaring every token, aliases as `var(--target)`
pub fn root_block(registry: &TokenRegistry) -> String {
    let mut css = String::from(":root {\n");
    for token in registry.iter() {
        let value = match &token.kind {
            TokenKind::Literal(value) => value.to_css(),
            TokenKind::Alias(target) => format!("var(--{target})"),
        };
        css.push_str(&format!("    --{}: {};\n", token.name, value));
    }
    css.push('}');
    css
}

/// Complete stylesheet: the `:root` block followed by every rule in order
pub fn write_stylesheet(registry: &TokenRegistry, map: &OverrideMap) -> String {
    let mut css = root_block(registry);
    if !map.is_empty() {
        css.push_str("\n\n");
        css.push_str(&map.to_css());
    }
    css.push('\n');
    css
}
