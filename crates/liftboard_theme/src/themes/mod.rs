//! Built-in themes

mod liftboard;

pub use liftboard::{palette, LiftboardTheme, ALIASES};
