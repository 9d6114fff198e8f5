//! Spacing tokens for theming

/// Spacing scale keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 5] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SpacingToken::Xs => "space-xs",
            SpacingToken::Sm => "space-sm",
            SpacingToken::Md => "space-md",
            SpacingToken::Lg => "space-lg",
            SpacingToken::Xl => "space-xl",
        }
    }
}

/// 4px-based spacing scale, in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
        }
    }
}
