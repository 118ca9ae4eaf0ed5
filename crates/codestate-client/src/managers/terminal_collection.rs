//! Terminal-collection mutation-response handlers.

use super::mutation_error;
use crate::protocol::{Envelope, MutationResponsePayload, PendingRequest};
use crate::store::{TerminalCollectionStore, UiStore};

/// Handles responses to terminal-collection create, update, delete, and
/// resume.
pub struct TerminalCollectionManager;

impl TerminalCollectionManager {
    /// Applies `codestate.terminal-collection.create.response`. Success
    /// closes the creation dialog; an error keeps it open.
    pub fn handle_create(
        terminal_collections: &mut TerminalCollectionStore,
        ui: &mut UiStore,
        pending: &PendingRequest,
        envelope: &Envelope,
    ) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        if let Some(message) = mutation_error(envelope, &payload) {
            tracing::warn!(%message, "terminal collection create failed");
            terminal_collections.collection.abandon(&pending.id);
            terminal_collections.notifier.notify();
            return;
        }

        match payload.id {
            Some(id) => {
                if terminal_collections.collection.commit_create(&pending.id, &id) {
                    terminal_collections.collection.display_created_feedback(&id);
                }
            }
            None => {
                tracing::warn!(
                    "terminal collection create succeeded without an id, discarding staged entry"
                );
                terminal_collections.collection.abandon(&pending.id);
            }
        }
        terminal_collections.notifier.notify();
        ui.close_all();
    }

    /// Applies `codestate.terminal-collection.update.response`.
    pub fn handle_update(
        terminal_collections: &mut TerminalCollectionStore,
        ui: &mut UiStore,
        pending: &PendingRequest,
        envelope: &Envelope,
    ) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        if let Some(message) = mutation_error(envelope, &payload) {
            tracing::warn!(%message, "terminal collection update failed");
            terminal_collections.collection.abandon(&pending.id);
            terminal_collections.notifier.notify();
            return;
        }
        terminal_collections.collection.commit_update(&pending.id);
        terminal_collections.notifier.notify();
        ui.close_all();
    }

    /// Applies `codestate.terminal-collection.delete.response`.
    pub fn handle_delete(
        terminal_collections: &mut TerminalCollectionStore,
        pending: &PendingRequest,
        envelope: &Envelope,
    ) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        if let Some(message) = mutation_error(envelope, &payload) {
            tracing::warn!(%message, "terminal collection delete failed");
            return;
        }
        if let Some(id) = payload.id.as_deref().or(pending.target.as_deref()) {
            terminal_collections.collection.remove(id);
            terminal_collections.notifier.notify();
        }
    }

    /// Applies `codestate.terminal-collection.resume.response`.
    pub fn handle_resume(pending: &PendingRequest, envelope: &Envelope) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        match mutation_error(envelope, &payload) {
            Some(message) => tracing::warn!(%message, "terminal collection resume failed"),
            None => tracing::info!(id = pending.target.as_deref(), "terminal collection executed"),
        }
    }
}
