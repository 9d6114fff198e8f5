//! Load-time theme errors

use crate::tokens::TokenCategory;

/// A defect in a token registry or theme file
///
/// None of these can occur while resolving styles; they are raised while a
/// registry is being built or validated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown token `{0}`")]
    UnknownToken(String),

    #[error("token `{0}` is defined more than once")]
    DuplicateName(String),

    #[error("value of `{name}` is not a {category} value")]
    WrongCategory {
        name: String,
        category: TokenCategory,
    },

    #[error("alias cycle through `{0}`")]
    AliasCycle(String),

    #[error("alias chain from `{alias}` is longer than {limit} hops")]
    AliasTooDeep { alias: String, limit: usize },

    #[error("alias `{alias}` ({alias_category}) points at `{target}` ({target_category})")]
    CategoryMismatch {
        alias: String,
        alias_category: TokenCategory,
        target: String,
        target_category: TokenCategory,
    },

    #[error("{category} tokens `{first}` and `{second}` share the value {value}; declare one as an alias")]
    DuplicateValue {
        category: TokenCategory,
        first: String,
        second: String,
        value: String,
    },

    #[error("contrast between `{foreground}` and `{background}` is {ratio:.2}:1, below {minimum}:1")]
    InsufficientContrast {
        foreground: String,
        background: String,
        ratio: f64,
        minimum: f64,
    },

    #[error("token `{0}` is not a color")]
    NotAColor(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("invalid length `{0}`")]
    InvalidLength(String),

    #[error("invalid shadow `{0}`")]
    InvalidShadow(String),

    #[error("theme file: {0}")]
    Toml(String),

    #[error("reading theme file: {0}")]
    Io(String),
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        ThemeError::Toml(err.to_string())
    }
}

impl From<std::io::Error> for ThemeError {
    fn from(err: std::io::Error) -> Self {
        ThemeError::Io(err.to_string())
    }
}
