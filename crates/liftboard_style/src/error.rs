//! Load-time overlay errors

use std::fmt;

use liftboard_theme::ThemeError;

use crate::css_parser::ParseError;

/// A defect found while loading or validating an overlay
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// A rule references a token the registry does not define
    #[error("rule `{target}` references unknown token `{token}`")]
    DanglingToken { target: String, token: String },

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Every defect found by static validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(pub Vec<StyleError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[StyleError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} overlay defect(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  - {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<StyleError>> for ValidationErrors {
    fn from(errors: Vec<StyleError>) -> Self {
        ValidationErrors(errors)
    }
}
