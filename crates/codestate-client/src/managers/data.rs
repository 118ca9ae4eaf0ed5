//! Initial data-load handlers for the three entity collections.

use super::response_error;
use crate::protocol::{
    Envelope, ScriptsInitPayload, SessionsInitPayload, TerminalCollectionsInitPayload,
};
use crate::store::{ConfigStore, ScriptStore, SessionStore, TerminalCollectionStore};

/// Handles the `*.init` responses that hydrate the collections.
pub struct DataManager;

impl DataManager {
    /// Applies `codestate.sessions.init.response`.
    ///
    /// Besides the session list, this is where the active project root is
    /// learned: the host sends it explicitly when it can, otherwise the
    /// first session's root stands in. The root feeds every creation form.
    pub fn handle_sessions_init(
        sessions: &mut SessionStore,
        config: &mut ConfigStore,
        envelope: &Envelope,
    ) {
        let payload: SessionsInitPayload = envelope.decode_payload();
        if let Some(message) = response_error(envelope, payload.error) {
            tracing::warn!(%message, "sessions init failed");
            sessions.collection.fail_load(message);
            sessions.notifier.notify();
            return;
        }

        let derived_root = payload.current_project_root.or_else(|| {
            payload
                .sessions
                .first()
                .map(|with_data| with_data.session.project_root.clone())
        });

        tracing::debug!(count = payload.sessions.len(), "sessions loaded");
        sessions.collection.finish_load(payload.sessions);
        sessions.notifier.notify();

        if derived_root.is_some() {
            config.set_current_project_root(derived_root);
        }
    }

    /// Applies `codestate.scripts.init.response`.
    pub fn handle_scripts_init(scripts: &mut ScriptStore, envelope: &Envelope) {
        let payload: ScriptsInitPayload = envelope.decode_payload();
        if let Some(message) = response_error(envelope, payload.error) {
            tracing::warn!(%message, "scripts init failed");
            scripts.collection.fail_load(message);
        } else {
            tracing::debug!(count = payload.scripts.len(), "scripts loaded");
            scripts.collection.finish_load(payload.scripts);
        }
        scripts.notifier.notify();
    }

    /// Applies `codestate.tc.init.response`.
    pub fn handle_terminal_collections_init(
        terminal_collections: &mut TerminalCollectionStore,
        envelope: &Envelope,
    ) {
        let payload: TerminalCollectionsInitPayload = envelope.decode_payload();
        if let Some(message) = response_error(envelope, payload.error) {
            tracing::warn!(%message, "terminal collections init failed");
            terminal_collections.collection.fail_load(message);
        } else {
            tracing::debug!(
                count = payload.terminal_collections.len(),
                "terminal collections loaded"
            );
            terminal_collections
                .collection
                .finish_load(payload.terminal_collections);
        }
        terminal_collections.notifier.notify();
    }
}
