//! Session mutation-response handlers.

use super::{mutation_error, response_error};
use crate::protocol::{
    Envelope, ExportResponsePayload, MutationResponsePayload, PendingRequest,
    SessionCreateInitPayload, SessionUpdateResponsePayload,
};
use crate::store::{Domain, SessionStore, UiStore};

/// Handles responses to session create, update, delete, resume, and export.
pub struct SessionManager;

impl SessionManager {
    /// Applies `codestate.sessions.create.init.response`: stores the
    /// workspace snapshot the wizard seeds itself from and makes sure the
    /// wizard dialog is open.
    pub fn handle_create_init(sessions: &mut SessionStore, ui: &mut UiStore, envelope: &Envelope) {
        let payload: SessionCreateInitPayload = envelope.decode_payload();
        if let Some(message) = response_error(envelope, payload.error) {
            tracing::warn!(%message, "session create init failed");
            sessions.set_create_error(Some(message));
            return;
        }
        sessions.set_create_error(None);
        sessions.set_create_prefill(payload.session_data);
        ui.open_create(Domain::Sessions);
    }

    /// Applies `codestate.session.create.response`: promotes the staged
    /// session under the host-assigned id and closes the wizard. On error
    /// the staged entry is discarded and the wizard stays open showing the
    /// message.
    pub fn handle_create(
        sessions: &mut SessionStore,
        ui: &mut UiStore,
        pending: &PendingRequest,
        envelope: &Envelope,
    ) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        if let Some(message) = mutation_error(envelope, &payload) {
            tracing::warn!(%message, "session create failed");
            sessions.collection.abandon(&pending.id);
            sessions.set_create_error(Some(message));
            return;
        }

        let Some(id) = payload.id else {
            tracing::warn!("session create succeeded without an id, discarding staged entry");
            sessions.collection.abandon(&pending.id);
            sessions.notifier.notify();
            return;
        };
        if sessions.collection.commit_create(&pending.id, &id) {
            sessions.collection.display_created_feedback(&id);
        }
        sessions.set_create_error(None);
        ui.close_all();
    }

    /// Applies `codestate.session.update.response`. The host may return the
    /// full updated session, which overrides whatever was staged; otherwise
    /// the staged entity is committed as-is.
    pub fn handle_update(
        sessions: &mut SessionStore,
        ui: &mut UiStore,
        pending: &PendingRequest,
        envelope: &Envelope,
    ) {
        let payload: SessionUpdateResponsePayload = envelope.decode_payload();
        if let Some(message) = response_error(envelope, payload.error) {
            tracing::warn!(%message, "session update failed");
            sessions.collection.abandon(&pending.id);
            sessions.notifier.notify();
            return;
        }

        match payload.session {
            Some(session) => {
                sessions.collection.abandon(&pending.id);
                sessions.collection.update(session);
            }
            None => {
                sessions.collection.commit_update(&pending.id);
            }
        }
        sessions.notifier.notify();
        ui.close_all();
    }

    /// Applies `codestate.session.delete.response`: removes the session on
    /// success. Nothing was staged, so an error only logs.
    pub fn handle_delete(
        sessions: &mut SessionStore,
        pending: &PendingRequest,
        envelope: &Envelope,
    ) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        if let Some(message) = mutation_error(envelope, &payload) {
            tracing::warn!(%message, "session delete failed");
            return;
        }
        if let Some(id) = payload.id.as_deref().or(pending.target.as_deref()) {
            sessions.collection.remove(id);
            sessions.notifier.notify();
        }
    }

    /// Applies `codestate.session.resume.response`. Restoration happens
    /// host-side; the client only records the outcome.
    pub fn handle_resume(pending: &PendingRequest, envelope: &Envelope) {
        let payload: MutationResponsePayload = envelope.decode_payload();
        match mutation_error(envelope, &payload) {
            Some(message) => tracing::warn!(%message, "session resume failed"),
            None => tracing::info!(id = pending.target.as_deref(), "session resumed"),
        }
    }

    /// Applies `codestate.session.export.response`.
    pub fn handle_export(pending: &PendingRequest, envelope: &Envelope) {
        let payload: ExportResponsePayload = envelope.decode_payload();
        match response_error(envelope, payload.error) {
            Some(message) => tracing::warn!(%message, "session export failed"),
            None => tracing::info!(
                id = pending.target.as_deref(),
                path = payload.export_path.as_deref(),
                "session exported"
            ),
        }
    }
}
