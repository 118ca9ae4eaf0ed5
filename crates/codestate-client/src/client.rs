//! The composition root.
//!
//! One [`CodeStateClient`] owns the transport, the stores, and the pending
//! request map. The embedding shell drives it from two directions: UI code
//! calls the intent methods (initialize, create, update, ...) and forwards
//! [`UiEvent`]s, the message pump feeds every inbound envelope through
//! [`CodeStateClient::handle_message`].

use crate::managers::{
    ConfigManager, DataManager, ScriptManager, SessionManager, TerminalCollectionManager,
    ThemeManager,
};
use crate::protocol::{Envelope, PendingRequests, RequestId, RequestKind, THEME_CHANGED};
use crate::store::{Domain, Stores};
use crate::transport::HostTransport;
use crate::ui::UiEvent;
use chrono::Utc;
use codestate_core::config::{Config, Theme};
use codestate_core::error::{CodeStateError, Result};
use codestate_core::script::Script;
use codestate_core::session::{Session, SessionUpdates, SessionWithFullData};
use codestate_core::terminal_collection::TerminalCollectionWithScripts;
use serde_json::json;

/// The webview-side client: stores, correlation, and the host transport.
pub struct CodeStateClient<T: HostTransport> {
    transport: T,
    stores: Stores,
    pending: PendingRequests,
}

impl<T: HostTransport> CodeStateClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            stores: Stores::new(),
            pending: PendingRequests::new(),
        }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn stores_mut(&mut self) -> &mut Stores {
        &mut self.stores
    }

    pub fn pending(&self) -> &PendingRequests {
        &self.pending
    }

    /// Announces that the webview finished mounting. The host answers by
    /// pushing the current theme; nothing is registered as pending.
    pub fn ready(&mut self) {
        self.send(RequestKind::UiReady, json!({}), RequestId::new(), None);
    }

    // ---- initial data loads ------------------------------------------------

    /// Requests the session list. Skipped while loading or already loaded;
    /// a previous failure makes it eligible again.
    pub fn initialize_sessions(&mut self) {
        if !self.stores.sessions.collection.begin_loading() {
            return;
        }
        self.stores.sessions.notifier.notify();
        self.send(RequestKind::SessionsInit, json!({}), RequestId::new(), None);
    }

    /// Requests the script list, guarded like sessions.
    pub fn initialize_scripts(&mut self) {
        if !self.stores.scripts.collection.begin_loading() {
            return;
        }
        self.stores.scripts.notifier.notify();
        self.send(RequestKind::ScriptsInit, json!({}), RequestId::new(), None);
    }

    /// Requests the terminal-collection list, guarded like sessions.
    pub fn initialize_terminal_collections(&mut self) {
        if !self.stores.terminal_collections.collection.begin_loading() {
            return;
        }
        self.stores.terminal_collections.notifier.notify();
        self.send(
            RequestKind::TerminalCollectionsInit,
            json!({}),
            RequestId::new(),
            None,
        );
    }

    /// Requests the config document and OS snapshot, guarded like sessions.
    pub fn initialize_config(&mut self) {
        if !self.stores.config.begin_loading() {
            return;
        }
        self.send(RequestKind::ConfigInit, json!({}), RequestId::new(), None);
    }

    // ---- sessions ----------------------------------------------------------

    /// Opens the session-creation wizard and asks the host for the workspace
    /// prefill. The request is skipped when one is already in flight.
    pub fn begin_session_creation(&mut self) {
        self.stores.ui.open_create(Domain::Sessions);
        if self.pending.in_flight(RequestKind::SessionCreateInit) > 0 {
            return;
        }
        self.send(
            RequestKind::SessionCreateInit,
            json!({}),
            RequestId::new(),
            None,
        );
    }

    /// Submits a new session: validates, stages it optimistically, and
    /// sends the create request. The wizard closes when the host confirms.
    pub fn create_session(&mut self, session: Session) -> Result<()> {
        session.validate()?;
        let request_id = RequestId::new();
        let payload = json!({ "sessionData": session });
        self.stores
            .sessions
            .collection
            .stage_create(request_id.clone(), SessionWithFullData::from(session));
        self.stores.sessions.notifier.notify();
        self.send(RequestKind::SessionCreate, payload, request_id, None);
        Ok(())
    }

    /// Submits a session edit as a changed-fields document. The edited copy
    /// is staged and only shown once the host confirms.
    pub fn update_session(&mut self, id: &str, updates: SessionUpdates) -> Result<()> {
        let Some(existing) = self.stores.sessions.collection.get(id) else {
            return Err(CodeStateError::not_found("session", id));
        };
        let mut edited = existing.clone();
        apply_session_updates(&mut edited.session, &updates);
        edited.session.validate()?;

        let request_id = RequestId::new();
        let payload = json!({ "id": id, "updates": updates });
        self.stores
            .sessions
            .collection
            .stage_update(request_id.clone(), edited);
        self.send(
            RequestKind::SessionUpdate,
            payload,
            request_id,
            Some(id.to_string()),
        );
        Ok(())
    }

    /// Requests deletion; the list entry is removed when the host confirms.
    pub fn delete_session(&mut self, id: &str) {
        self.stores.ui.close_all();
        self.send(
            RequestKind::SessionDelete,
            json!({ "id": id }),
            RequestId::new(),
            Some(id.to_string()),
        );
    }

    /// Asks the host to restore the workspace captured in a session.
    pub fn resume_session(&mut self, id: &str) {
        self.send(
            RequestKind::SessionResume,
            json!({ "id": id }),
            RequestId::new(),
            Some(id.to_string()),
        );
    }

    /// Asks the host to export a session to a file of its choosing.
    pub fn export_session(&mut self, id: &str) {
        self.send(
            RequestKind::SessionExport,
            json!({ "id": id }),
            RequestId::new(),
            Some(id.to_string()),
        );
    }

    // ---- scripts -----------------------------------------------------------

    /// Submits a new script, staged optimistically until confirmed.
    pub fn create_script(&mut self, script: Script) -> Result<()> {
        script.validate()?;
        let request_id = RequestId::new();
        let payload = json!({ "scriptData": script });
        self.stores
            .scripts
            .collection
            .stage_create(request_id.clone(), script);
        self.stores.scripts.notifier.notify();
        self.send(RequestKind::ScriptCreate, payload, request_id, None);
        Ok(())
    }

    /// Submits a full-replacement script edit.
    pub fn update_script(&mut self, script: Script) -> Result<()> {
        script.validate()?;
        if script.is_provisional() {
            return Err(CodeStateError::validation(
                "cannot update a script the host has not confirmed",
            ));
        }
        let request_id = RequestId::new();
        let id = script.id.clone();
        let payload = json!({ "id": id, "scriptData": script });
        self.stores
            .scripts
            .collection
            .stage_update(request_id.clone(), script);
        self.send(RequestKind::ScriptUpdate, payload, request_id, Some(id));
        Ok(())
    }

    pub fn delete_script(&mut self, id: &str) {
        self.stores.ui.close_all();
        self.send(
            RequestKind::ScriptDelete,
            json!({ "id": id }),
            RequestId::new(),
            Some(id.to_string()),
        );
    }

    /// Asks the host to execute a script's commands in the IDE terminal.
    pub fn resume_script(&mut self, id: &str) {
        self.send(
            RequestKind::ScriptResume,
            json!({ "id": id }),
            RequestId::new(),
            Some(id.to_string()),
        );
    }

    // ---- terminal collections ----------------------------------------------

    /// Submits a new terminal collection, staged optimistically.
    pub fn create_terminal_collection(
        &mut self,
        collection: TerminalCollectionWithScripts,
    ) -> Result<()> {
        collection.validate()?;
        let request_id = RequestId::new();
        let payload = json!({ "terminalCollectionData": collection });
        self.stores
            .terminal_collections
            .collection
            .stage_create(request_id.clone(), collection);
        self.stores.terminal_collections.notifier.notify();
        self.send(
            RequestKind::TerminalCollectionCreate,
            payload,
            request_id,
            None,
        );
        Ok(())
    }

    /// Submits a full-replacement terminal-collection edit.
    pub fn update_terminal_collection(
        &mut self,
        collection: TerminalCollectionWithScripts,
    ) -> Result<()> {
        collection.validate()?;
        if collection.is_provisional() {
            return Err(CodeStateError::validation(
                "cannot update a terminal collection the host has not confirmed",
            ));
        }
        let request_id = RequestId::new();
        let id = collection.id.clone();
        let payload = json!({ "id": id, "terminalCollectionData": collection });
        self.stores
            .terminal_collections
            .collection
            .stage_update(request_id.clone(), collection);
        self.send(
            RequestKind::TerminalCollectionUpdate,
            payload,
            request_id,
            Some(id),
        );
        Ok(())
    }

    pub fn delete_terminal_collection(&mut self, id: &str) {
        self.stores.ui.close_all();
        self.send(
            RequestKind::TerminalCollectionDelete,
            json!({ "id": id }),
            RequestId::new(),
            Some(id.to_string()),
        );
    }

    /// Asks the host to execute every script in a collection.
    pub fn resume_terminal_collection(&mut self, id: &str) {
        self.send(
            RequestKind::TerminalCollectionResume,
            json!({ "id": id }),
            RequestId::new(),
            Some(id.to_string()),
        );
    }

    // ---- config and theme --------------------------------------------------

    /// Sends the edited config document; the store only changes when the
    /// host confirms with the persisted copy.
    pub fn update_config(&mut self, config: Config) {
        self.send(
            RequestKind::ConfigUpdate,
            json!({ "config": config }),
            RequestId::new(),
            None,
        );
    }

    /// Switches the theme locally and notifies the host so it can persist
    /// the choice. Fire-and-forget; a later `theme-changed` push may still
    /// override it.
    pub fn set_theme(&mut self, theme: Theme) {
        self.stores.ui.set_theme(theme);
        self.send(
            RequestKind::SetTheme,
            json!({ "theme": theme.as_str() }),
            RequestId::new(),
            None,
        );
    }

    // ---- inbound -----------------------------------------------------------

    /// Routes a view intent to the stores, firing host requests where the
    /// intent needs data.
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::OpenSessionCreate => self.begin_session_creation(),
            UiEvent::OpenScriptCreate => {
                let root = self
                    .stores
                    .config
                    .current_project_root()
                    .map(str::to_string);
                self.stores.scripts.set_create_root_path(root);
                self.stores.ui.open_create(Domain::Scripts);
            }
            UiEvent::OpenTerminalCollectionCreate => {
                let root = self
                    .stores
                    .config
                    .current_project_root()
                    .map(str::to_string);
                self.stores.terminal_collections.set_create_root_path(root);
                self.stores.ui.open_create(Domain::TerminalCollections);
            }
            // Edit and delete only open for entities actually in the store;
            // a stale id from the view is a silent no-op.
            UiEvent::OpenEdit { domain, id } => {
                if self.entity_exists(domain, &id) {
                    self.stores.ui.open_edit(domain, id);
                }
            }
            UiEvent::OpenDelete { domain, id } => {
                if self.entity_exists(domain, &id) {
                    self.stores.ui.open_delete(domain, id);
                }
            }
            UiEvent::Resume { domain, id } => match domain {
                Domain::Sessions => self.resume_session(&id),
                Domain::Scripts => self.resume_script(&id),
                Domain::TerminalCollections => self.resume_terminal_collection(&id),
            },
            UiEvent::ExportSession { id } => self.export_session(&id),
            UiEvent::OpenConfig => {
                self.initialize_config();
                self.stores.ui.open_config();
            }
            UiEvent::CloseDialogs => self.stores.ui.close_all(),
            UiEvent::DismissCreatedFeedback(domain) => {
                match domain {
                    Domain::Sessions => self.stores.sessions.collection.hide_created_feedback(),
                    Domain::Scripts => self.stores.scripts.collection.hide_created_feedback(),
                    Domain::TerminalCollections => self
                        .stores
                        .terminal_collections
                        .collection
                        .hide_created_feedback(),
                }
                self.notify_domain(domain);
            }
        }
    }

    /// Feeds one inbound envelope through correlation and into the manager
    /// that owns its kind. Unknown kinds and responses with no in-flight
    /// request are logged and dropped.
    pub fn handle_message(&mut self, envelope: Envelope) {
        if envelope.kind == THEME_CHANGED {
            ThemeManager::handle_theme_changed(&mut self.stores.ui, &envelope);
            return;
        }

        let Some(kind) = RequestKind::from_response_kind(&envelope.kind) else {
            tracing::warn!(kind = %envelope.kind, "unknown message kind, dropping");
            return;
        };
        let Some(pending) = self.pending.resolve(envelope.id.as_deref(), kind) else {
            tracing::warn!(kind = %envelope.kind, "response without in-flight request, dropping");
            return;
        };

        match kind {
            RequestKind::SessionsInit => DataManager::handle_sessions_init(
                &mut self.stores.sessions,
                &mut self.stores.config,
                &envelope,
            ),
            RequestKind::ScriptsInit => {
                DataManager::handle_scripts_init(&mut self.stores.scripts, &envelope)
            }
            RequestKind::TerminalCollectionsInit => DataManager::handle_terminal_collections_init(
                &mut self.stores.terminal_collections,
                &envelope,
            ),
            RequestKind::ConfigInit => ConfigManager::handle_config_init(
                &mut self.stores.config,
                &mut self.stores.ui,
                &envelope,
            ),
            RequestKind::ConfigUpdate => ConfigManager::handle_config_update(
                &mut self.stores.config,
                &mut self.stores.ui,
                &envelope,
            ),
            RequestKind::SessionCreateInit => SessionManager::handle_create_init(
                &mut self.stores.sessions,
                &mut self.stores.ui,
                &envelope,
            ),
            RequestKind::SessionCreate => SessionManager::handle_create(
                &mut self.stores.sessions,
                &mut self.stores.ui,
                &pending,
                &envelope,
            ),
            RequestKind::SessionUpdate => SessionManager::handle_update(
                &mut self.stores.sessions,
                &mut self.stores.ui,
                &pending,
                &envelope,
            ),
            RequestKind::SessionDelete => {
                SessionManager::handle_delete(&mut self.stores.sessions, &pending, &envelope)
            }
            RequestKind::SessionResume => SessionManager::handle_resume(&pending, &envelope),
            RequestKind::SessionExport => SessionManager::handle_export(&pending, &envelope),
            RequestKind::ScriptCreate => ScriptManager::handle_create(
                &mut self.stores.scripts,
                &mut self.stores.ui,
                &pending,
                &envelope,
            ),
            RequestKind::ScriptUpdate => ScriptManager::handle_update(
                &mut self.stores.scripts,
                &mut self.stores.ui,
                &pending,
                &envelope,
            ),
            RequestKind::ScriptDelete => {
                ScriptManager::handle_delete(&mut self.stores.scripts, &pending, &envelope)
            }
            RequestKind::ScriptResume => ScriptManager::handle_resume(&pending, &envelope),
            RequestKind::TerminalCollectionCreate => TerminalCollectionManager::handle_create(
                &mut self.stores.terminal_collections,
                &mut self.stores.ui,
                &pending,
                &envelope,
            ),
            RequestKind::TerminalCollectionUpdate => TerminalCollectionManager::handle_update(
                &mut self.stores.terminal_collections,
                &mut self.stores.ui,
                &pending,
                &envelope,
            ),
            RequestKind::TerminalCollectionDelete => TerminalCollectionManager::handle_delete(
                &mut self.stores.terminal_collections,
                &pending,
                &envelope,
            ),
            RequestKind::TerminalCollectionResume => {
                TerminalCollectionManager::handle_resume(&pending, &envelope)
            }
            // Notifications never register as pending, so their "responses"
            // cannot reach this point.
            RequestKind::UiReady | RequestKind::SetTheme => {}
        }
    }

    fn entity_exists(&self, domain: Domain, id: &str) -> bool {
        match domain {
            Domain::Sessions => self.stores.sessions.collection.get(id).is_some(),
            Domain::Scripts => self.stores.scripts.collection.get(id).is_some(),
            Domain::TerminalCollections => self
                .stores
                .terminal_collections
                .collection
                .get(id)
                .is_some(),
        }
    }

    fn notify_domain(&self, domain: Domain) {
        match domain {
            Domain::Sessions => self.stores.sessions.notifier.notify(),
            Domain::Scripts => self.stores.scripts.notifier.notify(),
            Domain::TerminalCollections => self.stores.terminal_collections.notifier.notify(),
        }
    }

    fn send(
        &mut self,
        kind: RequestKind,
        payload: serde_json::Value,
        request_id: RequestId,
        target: Option<String>,
    ) {
        if kind.expects_response() {
            self.pending.register(request_id.clone(), kind, target);
        }
        tracing::debug!(%kind, id = %request_id, "sending request");
        self.transport.post(Envelope::request(kind, payload, &request_id));
    }
}

fn apply_session_updates(session: &mut Session, updates: &SessionUpdates) {
    if let Some(name) = &updates.name {
        session.name = name.clone();
    }
    if let Some(tags) = &updates.tags {
        session.tags = tags.clone();
    }
    if let Some(notes) = &updates.notes {
        session.notes = Some(notes.clone());
    }
    if let Some(scripts) = &updates.scripts {
        session.scripts = scripts.clone();
    }
    if let Some(terminal_collections) = &updates.terminal_collections {
        session.terminal_collections = terminal_collections.clone();
    }
    session.updated_at = Utc::now();
}
