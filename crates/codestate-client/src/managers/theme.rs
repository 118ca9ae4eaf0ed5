//! Host-initiated theme push.

use crate::protocol::{Envelope, ThemeChangedPayload};
use crate::store::UiStore;
use codestate_core::config::Theme;

/// Handles the `theme-changed` notification the IDE pushes when its own
/// theme switches. Not a response; there is no pending entry to resolve.
pub struct ThemeManager;

impl ThemeManager {
    pub fn handle_theme_changed(ui: &mut UiStore, envelope: &Envelope) {
        let payload: ThemeChangedPayload = envelope.decode_payload();
        let theme = Theme::from_wire(&payload.theme);
        tracing::debug!(theme = theme.as_str(), "host theme changed");
        ui.set_theme(theme);
    }
}
