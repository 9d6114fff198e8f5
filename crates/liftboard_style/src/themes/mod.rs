//! Built-in overlays

mod dashboard;

pub use dashboard::DashboardOverlay;
