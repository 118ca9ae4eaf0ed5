//! Configuration response handlers.

use super::response_error;
use crate::protocol::{ConfigInitPayload, ConfigUpdatePayload, Envelope};
use crate::store::{ConfigStore, UiStore};
use codestate_core::config::Theme;

/// Handles config init and update responses.
pub struct ConfigManager;

impl ConfigManager {
    /// Applies `codestate.config.init.response`.
    ///
    /// The response carries the config document and the one-shot OS
    /// snapshot together. The persisted theme, when present under the
    /// `theme` extension key, becomes the active UI theme.
    pub fn handle_config_init(config: &mut ConfigStore, ui: &mut UiStore, envelope: &Envelope) {
        let payload: ConfigInitPayload = envelope.decode_payload();
        if let Some(message) = response_error(envelope, payload.error) {
            tracing::warn!(%message, "config init failed");
            config.fail_load(message);
            return;
        }

        if let Some(theme) = persisted_theme(payload.config.as_ref()) {
            ui.set_theme(theme);
        }
        config.finish_load(payload.config, payload.os_info);
    }

    /// Applies `codestate.config.update.response`. Success closes the
    /// config editor; an error keeps it open showing the message.
    pub fn handle_config_update(config: &mut ConfigStore, ui: &mut UiStore, envelope: &Envelope) {
        let payload: ConfigUpdatePayload = envelope.decode_payload();
        if let Some(message) = response_error(envelope, payload.error) {
            tracing::warn!(%message, "config update failed");
            config.set_config_error(Some(message));
            return;
        }
        match payload.config {
            Some(updated) => config.apply_update(updated),
            None => config.set_config_error(None),
        }
        ui.close_all();
    }
}

fn persisted_theme(config: Option<&codestate_core::config::Config>) -> Option<Theme> {
    config?
        .extensions
        .get("theme")
        .and_then(|value| value.as_str())
        .map(Theme::from_wire)
}
