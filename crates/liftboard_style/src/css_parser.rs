//! CSS dialect parser
//!
//! Reads overlays written in the same CSS the writer emits:
//!
//! ```css
//! :root {
//!     --accent: #1D4ED8;
//!     --on-accent: var(--surface);
//! }
//!
//! [data-testid="stExpander"] button:nth-child(2):hover {
//!     background: var(--delete-hover);
//! }
//! ```
//!
//! Supported selectors are the overlay's component fragments joined by
//! descendant or `>` combinators, with `:first-child`, `:nth-child(n)`, one
//! interaction state (`:hover`, `:focus`, `:active`, `:disabled`,
//! `[aria-selected="true"]`) on the target. Values reference tokens with
//! `var(--name)` or `theme(name)`.
//!
//! Rules for components outside the vocabulary and unknown properties are
//! skipped with a warning; malformed input is reported as an error and the
//! parser resumes after the next closing brace.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_until, take_while1},
    character::complete::{char, digit1, multispace1},
    combinator::{consumed, map_res, opt, value},
    error::{context, ParseError as NomParseError, VerboseError, VerboseErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded, tuple},
    Finish, IResult,
};
use smallvec::SmallVec;
use tracing::debug;

use liftboard_theme::{parse_px, Color, ThemeConfig, TokenRegistry};

use crate::property::{Declaration, PropertyName, PropertyValue, TokenRef, ValuePart};
use crate::rule::{OverrideMap, OverrideRule};
use crate::target::{Combinator, Component, Position, Segment, State, TargetPath};

/// Parser result carrying nom's verbose error for diagnostics
type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Severity level for parse diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Input could not be parsed
    Error,
    /// Parsed, but something was ignored
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A parse diagnostic with its location
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub severity: Severity,
    pub message: String,
    /// 1-indexed
    pub line: usize,
    /// 1-indexed
    pub column: usize,
    /// Input near the problem
    pub fragment: String,
    /// Context stack from nom's VerboseError
    pub contexts: Vec<String>,
    /// Property or selector involved, if any
    pub property: Option<String>,
    pub value: Option<String>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CSS {}: line {}, column {}: {}",
            self.severity, self.line, self.column, self.message
        )?;
        if let Some(ref prop) = self.property {
            if let Some(ref val) = self.value {
                write!(f, " ({}:{})", prop, val)?;
            } else {
                write!(f, " ({})", prop)?;
            }
        }
        if !self.contexts.is_empty() {
            write!(f, "\n  Context: {}", self.contexts.join(" > "))?;
        }
        if !self.fragment.is_empty() && self.fragment.len() < 50 {
            write!(f, "\n  Near: \"{}\"", self.fragment)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    pub fn new(severity: Severity, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            severity,
            message: message.into(),
            line,
            column,
            fragment: String::new(),
            contexts: Vec::new(),
            property: None,
            value: None,
        }
    }

    /// Warning for a property outside the overlay's vocabulary
    pub fn unknown_property(property: &str, line: usize, column: usize) -> Self {
        Self {
            contexts: vec!["property".to_string()],
            property: Some(property.to_string()),
            ..Self::new(
                Severity::Warning,
                format!("Unknown property '{}' (ignored)", property),
                line,
                column,
            )
        }
    }

    /// Warning for a value that cannot be used
    pub fn invalid_value(property: &str, value: &str, line: usize, column: usize) -> Self {
        Self {
            contexts: vec!["property value".to_string()],
            property: Some(property.to_string()),
            value: Some(value.to_string()),
            ..Self::new(
                Severity::Warning,
                format!("Invalid value for '{}': '{}'", property, value),
                line,
                column,
            )
        }
    }

    /// Warning for a rule whose selector the overlay cannot target
    pub fn unsupported_selector(selector: &str, reason: &str, line: usize, column: usize) -> Self {
        Self {
            contexts: vec!["selector".to_string()],
            property: Some(selector.to_string()),
            ..Self::new(
                Severity::Warning,
                format!("{} (rule ignored)", reason),
                line,
                column,
            )
        }
    }

    fn from_verbose(input: &str, err: VerboseError<&str>) -> Self {
        let (line, column, fragment) = match err.errors.first() {
            Some((frag, _)) => calculate_position(input, frag),
            None => (1, 1, String::new()),
        };

        let contexts: Vec<String> = err
            .errors
            .iter()
            .filter_map(|(_, kind)| match kind {
                VerboseErrorKind::Context(ctx) => Some((*ctx).to_string()),
                _ => None,
            })
            .collect();

        Self {
            fragment,
            contexts,
            ..Self::new(Severity::Error, format_verbose_error(&err), line, column)
        }
    }
}

/// Tokens and rules read from CSS
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// Tokens declared in `:root`, if the input had any
    pub tokens: Option<TokenRegistry>,
    pub rules: OverrideMap,
}

/// Result of parsing CSS with error collection
#[derive(Debug, Clone)]
pub struct CssParseResult {
    /// Whatever parsed; may be partial
    pub stylesheet: Stylesheet,
    pub errors: Vec<ParseError>,
}

impl CssParseResult {
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|e| e.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.errors.iter().any(|e| e.severity == Severity::Warning)
    }

    pub fn errors_only(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(|e| e.severity == Severity::Error)
    }

    pub fn warnings_only(&self) -> impl Iterator<Item = &ParseError> {
        self.errors
            .iter()
            .filter(|e| e.severity == Severity::Warning)
    }

    /// Log all diagnostics via tracing
    pub fn log_diagnostics(&self) {
        for err in &self.errors {
            debug!(
                severity = %err.severity,
                line = err.line,
                column = err.column,
                message = %err.message,
                property = ?err.property,
                value = ?err.value,
                "CSS parse diagnostic"
            );
        }
    }
}

impl Stylesheet {
    /// Parse CSS, collecting every error and warning
    pub fn parse_with_errors(css: &str) -> CssParseResult {
        let mut errors = Vec::new();
        let stylesheet = parse_stylesheet_with_errors(css, &mut errors);
        CssParseResult { stylesheet, errors }
    }

    /// Parse CSS, failing on the first error
    ///
    /// Warnings are logged and otherwise ignored.
    #[allow(clippy::result_large_err)]
    pub fn parse(css: &str) -> Result<Self, ParseError> {
        let result = Self::parse_with_errors(css);
        result.log_diagnostics();
        match result.errors.into_iter().find(|e| e.severity == Severity::Error) {
            Some(err) => Err(err),
            None => Ok(result.stylesheet),
        }
    }
}

impl OverrideMap {
    /// Parse the rules of a CSS overlay; `:root` tokens are ignored
    #[allow(clippy::result_large_err)]
    pub fn parse_css(css: &str) -> Result<Self, ParseError> {
        Stylesheet::parse(css).map(|stylesheet| stylesheet.rules)
    }
}

fn format_verbose_error(err: &VerboseError<&str>) -> String {
    let mut parts = Vec::new();

    for (input, kind) in &err.errors {
        match kind {
            VerboseErrorKind::Context(ctx) => {
                parts.push(format!("in {}", ctx));
            }
            VerboseErrorKind::Char(c) => {
                let preview: String = input.chars().take(20).collect();
                parts.push(format!("expected '{}' near \"{}\"", c, preview));
            }
            VerboseErrorKind::Nom(ek) => {
                parts.push(format!("{:?}", ek));
            }
        }
    }

    if parts.is_empty() {
        "unknown parse error".to_string()
    } else {
        parts.join(", ")
    }
}

/// Line, column and preview of `fragment`, a slice of `original`
fn calculate_position(original: &str, fragment: &str) -> (usize, usize, String) {
    let start = original.as_ptr() as usize;
    let offset = (fragment.as_ptr() as usize)
        .checked_sub(start)
        .filter(|offset| *offset <= original.len())
        .unwrap_or(0);
    let consumed = &original[..offset];

    let line = consumed.matches('\n').count() + 1;
    let column = consumed
        .rfind('\n')
        .map(|pos| offset - pos)
        .unwrap_or(offset + 1);

    let preview: String = fragment.chars().take(30).collect();
    (line, column, preview)
}

/// Whitespace and comments
fn ws(input: &str) -> ParseResult<()> {
    value(
        (),
        many0(alt((value((), multispace1), value((), parse_comment)))),
    )(input)
}

fn parse_comment<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

fn identifier(input: &str) -> ParseResult<&str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// One piece of a compound selector
#[derive(Debug, Clone, PartialEq)]
enum SelectorPart {
    Component(Component),
    /// A fragment outside the vocabulary
    Unknown(String),
    State(State),
    Position(Position),
}

impl SelectorPart {
    fn fragment(text: &str) -> Self {
        Component::from_selector(text)
            .map(SelectorPart::Component)
            .unwrap_or_else(|| SelectorPart::Unknown(text.to_string()))
    }
}

type ComplexSelector = Vec<(Vec<SelectorPart>, Option<Combinator>)>;

/// `[name="value"]`, `[name='value']` or `[name=value]`
fn attribute(input: &str) -> ParseResult<(&str, &str)> {
    context(
        "attribute selector",
        delimited(
            char('['),
            tuple((
                identifier,
                preceded(
                    char('='),
                    alt((
                        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
                        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
                        identifier,
                    )),
                ),
            )),
            char(']'),
        ),
    )(input)
}

/// `(n)` after `:nth-child`
fn nth_argument(input: &str) -> ParseResult<usize> {
    delimited(
        pair(char('('), ws),
        map_res(digit1, |n: &str| n.parse::<usize>()),
        pair(ws, char(')')),
    )(input)
}

/// A compound selector: one component plus position and state suffixes,
/// e.g. `button:nth-child(2):hover`
fn compound_selector(input: &str) -> ParseResult<Vec<SelectorPart>> {
    let mut parts = Vec::new();
    let mut remaining = input;

    loop {
        if remaining.starts_with('[') {
            let (rest, (name, value)) = attribute(remaining)?;
            if name.eq_ignore_ascii_case("aria-selected") && value == "true" {
                parts.push(SelectorPart::State(State::Selected));
            } else {
                parts.push(SelectorPart::fragment(&format!("[{name}=\"{value}\"]")));
            }
            remaining = rest;
        } else if remaining.starts_with(':') {
            let (rest, _) = char(':')(remaining)?;
            let (rest, name) = identifier(rest)?;
            match name.to_ascii_lowercase().as_str() {
                "first-child" => {
                    parts.push(SelectorPart::Position(Position::FirstChild));
                    remaining = rest;
                }
                "nth-child" => {
                    let (rest, n) = context("nth-child argument", nth_argument)(rest)?;
                    parts.push(SelectorPart::Position(Position::NthChild(n)));
                    remaining = rest;
                }
                other => {
                    parts.push(match State::parse_state(other) {
                        Some(state) => SelectorPart::State(state),
                        None => SelectorPart::Unknown(format!(":{name}")),
                    });
                    remaining = rest;
                }
            }
        } else if parts.is_empty() && remaining.starts_with(|c: char| c.is_ascii_alphabetic()) {
            let (rest, name) = identifier(remaining)?;
            parts.push(SelectorPart::fragment(name));
            remaining = rest;
        } else {
            break;
        }
    }

    if parts.is_empty() {
        return Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            nom::error::ErrorKind::Many1,
        )));
    }

    Ok((remaining, parts))
}

/// Compound selectors joined by combinators
fn complex_selector(input: &str) -> ParseResult<ComplexSelector> {
    let mut segments = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, compound) = compound_selector(remaining)?;
        remaining = rest;

        let trimmed = remaining.trim_start();
        if let Some(after_gt) = trimmed.strip_prefix('>') {
            remaining = after_gt.trim_start();
            segments.push((compound, Some(Combinator::Child)));
        } else if trimmed.len() < remaining.len()
            && trimmed.starts_with(|c: char| c == '[' || c == ':' || c.is_ascii_alphabetic())
        {
            remaining = trimmed;
            segments.push((compound, Some(Combinator::Descendant)));
        } else {
            segments.push((compound, None));
            break;
        }
    }

    Ok((remaining, segments))
}

/// Convert parsed selector parts into a target and state
///
/// Fails with a reason when the selector names something the overlay cannot
/// target.
fn selector_target(selector: &ComplexSelector) -> Result<(TargetPath, Option<State>), String> {
    let last = selector.len().saturating_sub(1);
    let mut segments = Vec::with_capacity(selector.len());
    let mut state = None;

    for (i, (parts, combinator)) in selector.iter().enumerate() {
        let mut component = None;
        let mut position = None;
        for part in parts {
            match part {
                SelectorPart::Component(c) if component.is_none() => component = Some(*c),
                SelectorPart::Component(c) => {
                    return Err(format!("'{c}' cannot be combined with another component"))
                }
                SelectorPart::Unknown(fragment) => {
                    return Err(format!("Unknown selector '{fragment}'"))
                }
                SelectorPart::Position(p) => position = Some(*p),
                SelectorPart::State(s) if i == last => state = Some(*s),
                SelectorPart::State(s) => {
                    return Err(format!("State '{s}' is only supported on the target element"))
                }
            }
        }
        let component = component.ok_or_else(|| "Selector segment without a component".to_string())?;
        segments.push((Segment { component, position }, *combinator));
    }

    Ok((TargetPath { segments }, state))
}

fn property_name(input: &str) -> ParseResult<&str> {
    context(
        "property name",
        take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_'),
    )(input)
}

/// Everything until `;` or `}`
fn property_value(input: &str) -> ParseResult<&str> {
    let (input, value) = context(
        "property value",
        take_while1(|c: char| c != ';' && c != '}'),
    )(input)?;
    Ok((input, value.trim()))
}

fn property_declaration(input: &str) -> ParseResult<(&str, &str)> {
    let (input, _) = ws(input)?;
    let (input, name) = property_name(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = context("colon after property name", char(':'))(input)?;
    let (input, _) = ws(input)?;
    let (input, value) = property_value(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = opt(char(';'))(input)?;
    Ok((input, (name, value)))
}

/// `{ property: value; ... }`
fn rule_block(input: &str) -> ParseResult<Vec<(&str, &str)>> {
    let (input, _) = ws(input)?;
    let (input, _) = context("opening brace", char('{'))(input)?;
    let (input, _) = ws(input)?;
    let (input, properties) = many0(property_declaration)(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = context("closing brace", char('}'))(input)?;
    Ok((input, properties))
}

/// `:root { --name: value; ... }`
fn root_block(input: &str) -> ParseResult<Vec<(&str, &str)>> {
    let (input, _) = tag(":root")(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = context("opening brace", char('{'))(input)?;

    let (input, declarations) = many0(|i| {
        let (i, _) = ws(i)?;
        let (i, _) = tag("--")(i)?;
        let (i, name) = identifier(i)?;
        let (i, _) = ws(i)?;
        let (i, _) = char(':')(i)?;
        let (i, _) = ws(i)?;
        let (i, value) = property_value(i)?;
        let (i, _) = ws(i)?;
        let (i, _) = opt(char(';'))(i)?;
        Ok((i, (name, value)))
    })(input)?;

    let (input, _) = ws(input)?;
    let (input, _) = context("closing brace", char('}'))(input)?;
    Ok((input, declarations))
}

/// A selector, its source text and its declarations
fn css_rule(input: &str) -> ParseResult<(&str, ComplexSelector, Vec<(&str, &str)>)> {
    let (input, (text, selector)) = context("rule selector", consumed(complex_selector))(input)?;
    let (input, declarations) = context("rule block", rule_block)(input)?;
    Ok((input, (text.trim(), selector, declarations)))
}

/// `var(--name)` or `theme(name)`
fn token_reference(input: &str) -> ParseResult<&str> {
    alt((
        delimited(tuple((tag("var("), ws, tag("--"))), identifier, pair(ws, char(')'))),
        delimited(pair(tag("theme("), ws), identifier, pair(ws, char(')'))),
    ))(input)
}

/// Split a value into literal text and token references
fn parse_value(raw: &str) -> PropertyValue {
    let mut parts: SmallVec<[ValuePart; 3]> = SmallVec::new();
    let mut literal = String::new();
    let mut remaining = raw;

    while !remaining.is_empty() {
        if let Ok((rest, name)) = token_reference(remaining) {
            if !literal.is_empty() {
                parts.push(ValuePart::Literal(std::mem::take(&mut literal)));
            }
            parts.push(ValuePart::Token(TokenRef::new(name)));
            remaining = rest;
            continue;
        }
        let mut chars = remaining.chars();
        if let Some(c) = chars.next() {
            literal.push(c);
        }
        remaining = chars.as_str();
    }
    if !literal.is_empty() {
        parts.push(ValuePart::Literal(literal));
    }
    PropertyValue { parts }
}

/// Strip a trailing `!important`
fn split_important(value: &str) -> (&str, bool) {
    match value.rfind('!') {
        Some(bang) if value[bang + 1..].trim().eq_ignore_ascii_case("important") => {
            (value[..bang].trim_end(), true)
        }
        _ => (value, false),
    }
}

/// `var(--target)` as an alias target
fn alias_target(value: &str) -> Option<&str> {
    match token_reference(value.trim()) {
        Ok((rest, name)) if rest.trim().is_empty() => Some(name),
        _ => None,
    }
}

fn parse_declaration(
    css: &str,
    name: &str,
    raw: &str,
    errors: &mut Vec<ParseError>,
) -> Option<Declaration> {
    let (line, column, _) = calculate_position(css, name);
    let Some(property) = PropertyName::parse(name) else {
        errors.push(ParseError::unknown_property(name, line, column));
        return None;
    };
    let (value, important) = split_important(raw);
    if value.is_empty() {
        errors.push(ParseError::invalid_value(name, raw, line, column));
        return None;
    }
    let declaration = Declaration::new(property, parse_value(value));
    Some(if important {
        declaration.important()
    } else {
        declaration
    })
}

/// Sort `:root` variables into a theme configuration by name and value
///
/// `var(--x)` values are aliases, `radius-*` and `shadow-*` names are radii
/// and shadows, colors are colors and remaining lengths are spacing.
fn tokens_from_variables(
    css: &str,
    variables: Vec<(&str, &str)>,
    errors: &mut Vec<ParseError>,
) -> Option<TokenRegistry> {
    let (line, column, _) = match variables.first() {
        Some((name, _)) => calculate_position(css, name),
        None => return None,
    };

    let mut config = ThemeConfig::default();
    for (name, value) in variables {
        let section = if let Some(target) = alias_target(value) {
            config.aliases.insert(name.to_string(), target.to_string());
            continue;
        } else if name.starts_with("radius") {
            &mut config.radius
        } else if name.starts_with("shadow") {
            &mut config.shadows
        } else if Color::parse(value).is_ok() {
            &mut config.colors
        } else if parse_px(value).is_some() {
            &mut config.spacing
        } else {
            let (line, column, _) = calculate_position(css, name);
            errors.push(ParseError::invalid_value(&format!("--{name}"), value, line, column));
            continue;
        };
        section.insert(name.to_string(), value.to_string());
    }

    match config.into_registry() {
        Ok(registry) => Some(registry),
        Err(err) => {
            errors.push(ParseError::new(
                Severity::Error,
                format!("Invalid :root tokens: {err}"),
                line,
                column,
            ));
            None
        }
    }
}

/// Skip past the next closing brace
fn skip_block(input: &str) -> &str {
    match input.find('}') {
        Some(end) => &input[end + 1..],
        None => "",
    }
}

fn parse_stylesheet_with_errors(css: &str, errors: &mut Vec<ParseError>) -> Stylesheet {
    let mut rules = OverrideMap::new();
    let mut variables = Vec::new();
    let mut remaining = css;

    loop {
        remaining = match ws(remaining) {
            Ok((rest, _)) => rest,
            Err(_) => remaining,
        };
        if remaining.is_empty() {
            break;
        }
        if remaining.starts_with("/*") {
            let (line, column, fragment) = calculate_position(css, remaining);
            errors.push(ParseError {
                fragment,
                ..ParseError::new(Severity::Error, "Unterminated comment", line, column)
            });
            break;
        }

        if remaining.starts_with(":root") {
            match root_block(remaining).finish() {
                Ok((rest, vars)) => {
                    variables.extend(vars);
                    remaining = rest;
                }
                Err(err) => {
                    errors.push(ParseError::from_verbose(css, err));
                    remaining = skip_block(remaining);
                }
            }
            continue;
        }

        match css_rule(remaining).finish() {
            Ok((rest, (text, selector, declarations))) => {
                remaining = rest;
                let (target, state) = match selector_target(&selector) {
                    Ok(target) => target,
                    Err(reason) => {
                        let (line, column, _) = calculate_position(css, text);
                        errors.push(ParseError::unsupported_selector(text, &reason, line, column));
                        continue;
                    }
                };
                let mut rule = OverrideRule::new(target);
                rule.state = state;
                rule.declarations = declarations
                    .into_iter()
                    .filter_map(|(name, value)| parse_declaration(css, name, value, errors))
                    .collect();
                rules.push(rule);
            }
            Err(err) => {
                errors.push(ParseError::from_verbose(css, err));
                remaining = skip_block(remaining);
            }
        }
    }

    let tokens = tokens_from_variables(css, variables, errors);
    debug!(
        rules = rules.len(),
        tokens = tokens.as_ref().map_or(0, TokenRegistry::len),
        diagnostics = errors.len(),
        "parsed overlay CSS"
    );
    Stylesheet { tokens, rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftboard_theme::{ColorToken, TokenCategory};

    #[test]
    fn parses_compound_and_complex_selectors() {
        let css = r#"[data-testid="stExpander"] > button:nth-child(2):hover { background: var(--delete-hover); }"#;
        let stylesheet = Stylesheet::parse(css).unwrap();
        let rule = &stylesheet.rules.rules()[0];
        assert_eq!(
            rule.target,
            TargetPath::of(Component::Expander)
                .child(Component::Button)
                .nth_child(2)
        );
        assert_eq!(rule.state, Some(State::Hover));
        assert_eq!(rule.declarations[0].property, PropertyName::Background);
        assert_eq!(
            rule.declarations[0].value,
            PropertyValue::token(TokenRef::new("delete-hover"))
        );
    }

    #[test]
    fn aria_selected_is_the_selected_state() {
        let css = r#"[data-baseweb="tab"][aria-selected="true"] { color: theme(accent) }"#;
        let map = OverrideMap::parse_css(css).unwrap();
        let rule = &map.rules()[0];
        assert_eq!(rule.state, Some(State::Selected));
        assert_eq!(rule.declarations[0].value, PropertyValue::token(ColorToken::Accent));
    }

    #[test]
    fn values_mix_literals_and_tokens() {
        let value = parse_value("2px solid var(--accent)");
        assert_eq!(value, PropertyValue::border("2px", ColorToken::Accent));

        let value = parse_value("var( --space-sm ) var(--space-md)");
        assert_eq!(value.tokens().count(), 2);
        assert_eq!(value.to_css_var(), "var(--space-sm) var(--space-md)");
    }

    #[test]
    fn important_flag_is_stripped() {
        let css = "button { font-weight: 600 ! IMPORTANT; }";
        let map = OverrideMap::parse_css(css).unwrap();
        let decl = &map.rules()[0].declarations[0];
        assert!(decl.important);
        assert_eq!(decl.value, PropertyValue::literal("600"));
    }

    #[test]
    fn unknown_properties_and_selectors_are_warnings() {
        let css = r#"
            h1 { color: var(--primary); z-index: 3; }
            [data-testid="stDataFrame"] { color: var(--text); }
            h2:visited { color: var(--text); }
        "#;
        let result = Stylesheet::parse_with_errors(css);
        assert!(!result.has_errors());
        assert_eq!(result.warnings_only().count(), 3);
        assert_eq!(result.stylesheet.rules.len(), 1);
        assert_eq!(result.stylesheet.rules.rules()[0].declarations.len(), 1);

        let z_index = &result.errors[0];
        assert_eq!(z_index.property.as_deref(), Some("z-index"));
        assert_eq!((z_index.line, z_index.column), (2, 41));
    }

    #[test]
    fn recovers_after_malformed_rules() {
        let css = "h1 { color var(--primary); }\nh2 { color: var(--primary); }";
        let result = Stylesheet::parse_with_errors(css);
        assert!(result.has_errors());
        assert_eq!(result.stylesheet.rules.len(), 1);
        assert_eq!(result.stylesheet.rules.rules()[0].target, TargetPath::of(Component::Header));
        assert!(OverrideMap::parse_css(css).is_err());
    }

    #[test]
    fn root_block_becomes_a_registry() {
        let css = r#"
            :root {
                --surface: #FFFFFF;
                --accent: #1D4ED8;
                /* aliases may come first */
                --on-accent: var(--surface);
                --space-sm: 8px;
                --radius-md: 8px;
                --shadow-sm: 0 1px 2px 0 rgba(15, 23, 42, 0.06);
            }
        "#;
        let stylesheet = Stylesheet::parse(css).unwrap();
        let tokens = stylesheet.tokens.unwrap();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens.resolve_css("on-accent").as_deref(), Some("#FFFFFF"));
        assert_eq!(tokens.category_of("space-sm"), Some(TokenCategory::Spacing));
        assert_eq!(tokens.category_of("radius-md"), Some(TokenCategory::Radius));
        assert_eq!(tokens.category_of("shadow-sm"), Some(TokenCategory::Shadow));
        assert!(stylesheet.rules.is_empty());
    }

    #[test]
    fn dangling_root_alias_is_an_error() {
        let result = Stylesheet::parse_with_errors(":root { --on-accent: var(--paper); }");
        assert!(result.has_errors());
        assert!(result.stylesheet.tokens.is_none());
    }

    #[test]
    fn no_root_block_means_no_tokens() {
        let stylesheet = Stylesheet::parse("/* empty */").unwrap();
        assert!(stylesheet.tokens.is_none());
        assert!(stylesheet.rules.is_empty());
    }
}
