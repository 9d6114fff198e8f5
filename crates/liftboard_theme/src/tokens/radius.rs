//! Border radius tokens for theming

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 4] = [
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Full,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RadiusToken::Sm => "radius-sm",
            RadiusToken::Md => "radius-md",
            RadiusToken::Lg => "radius-lg",
            RadiusToken::Full => "radius-full",
        }
    }
}

/// Corner radii in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
    pub radius_full: f32,
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Full => self.radius_full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 4.0,
            radius_md: 8.0,
            radius_lg: 12.0,
            radius_full: 9999.0,
        }
    }
}
