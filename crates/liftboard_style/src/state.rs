//! Process-wide overlay
//!
//! The host loads one overlay at startup and reads it from every render pass.
//! It is set once and never replaced.

use std::sync::OnceLock;

use tracing::debug;

use crate::overlay::Overlay;

/// Global overlay instance
static OVERLAY_STATE: OnceLock<Overlay> = OnceLock::new();

/// Access to the process-wide [`Overlay`]
pub struct OverlayState;

impl OverlayState {
    /// Install the process-wide overlay (call once at startup)
    ///
    /// Returns `false`, leaving the installed overlay in place, when one is
    /// already set.
    pub fn init(overlay: Overlay) -> bool {
        let installed = OVERLAY_STATE.set(overlay).is_ok();
        if !installed {
            debug!("overlay already initialized, keeping the existing one");
        }
        installed
    }

    /// The process-wide overlay, installing the built-in one if none was set
    pub fn get() -> &'static Overlay {
        OVERLAY_STATE.get_or_init(Overlay::builtin)
    }

    /// The process-wide overlay, if one was installed
    pub fn try_get() -> Option<&'static Overlay> {
        OVERLAY_STATE.get()
    }
}
