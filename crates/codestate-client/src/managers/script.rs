//! Script mutation-response handlers.

use super::mutation_error;
use crate::protocol::{Envelope, MutationResponsePayload, PendingRequest};
use crate::store::{ScriptStore, UiStore};

/// Handles responses to script create, update, delete, and resume.
pub struct ScriptManager;

impl ScriptManager {
    /// Applies `codestate.script.create.response`. Success closes the
    /// creation dialog; an error keeps it open for the user to retry.
    pub fn handle_create(
        scripts: &mut ScriptStore,
        ui: &mut UiStore,
        pending: &PendingRequest,
        envelope: &Envelope,
    ) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        if let Some(message) = mutation_error(envelope, &payload) {
            tracing::warn!(%message, "script create failed");
            scripts.collection.abandon(&pending.id);
            scripts.notifier.notify();
            return;
        }

        match payload.id {
            Some(id) => {
                if scripts.collection.commit_create(&pending.id, &id) {
                    scripts.collection.display_created_feedback(&id);
                }
            }
            None => {
                tracing::warn!("script create succeeded without an id, discarding staged entry");
                scripts.collection.abandon(&pending.id);
            }
        }
        scripts.notifier.notify();
        ui.close_all();
    }

    /// Applies `codestate.script.update.response`.
    pub fn handle_update(
        scripts: &mut ScriptStore,
        ui: &mut UiStore,
        pending: &PendingRequest,
        envelope: &Envelope,
    ) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        if let Some(message) = mutation_error(envelope, &payload) {
            tracing::warn!(%message, "script update failed");
            scripts.collection.abandon(&pending.id);
            scripts.notifier.notify();
            return;
        }
        scripts.collection.commit_update(&pending.id);
        scripts.notifier.notify();
        ui.close_all();
    }

    /// Applies `codestate.script.delete.response`.
    pub fn handle_delete(scripts: &mut ScriptStore, pending: &PendingRequest, envelope: &Envelope) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        if let Some(message) = mutation_error(envelope, &payload) {
            tracing::warn!(%message, "script delete failed");
            return;
        }
        if let Some(id) = payload.id.as_deref().or(pending.target.as_deref()) {
            scripts.collection.remove(id);
            scripts.notifier.notify();
        }
    }

    /// Applies `codestate.script.resume.response`. Execution is host work.
    pub fn handle_resume(pending: &PendingRequest, envelope: &Envelope) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        match mutation_error(envelope, &payload) {
            Some(message) => tracing::warn!(%message, "script resume failed"),
            None => tracing::info!(id = pending.target.as_deref(), "script executed"),
        }
    }
}
