//! End-to-end client tests over a recording transport.

use crate::client::CodeStateClient;
use crate::protocol::{Envelope, RequestKind, ResponseStatus};
use crate::store::Domain;
use crate::transport::HostTransport;
use crate::ui::UiEvent;
use chrono::Utc;
use codestate_core::config::Theme;
use codestate_core::script::{ExecutionMode, Script};
use codestate_core::session::{GitState, Session, SessionUpdates};
use codestate_core::terminal_collection::TerminalCollectionWithScripts;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Records every posted envelope for later assertions.
#[derive(Clone, Default)]
struct MockTransport {
    sent: Arc<Mutex<Vec<Envelope>>>,
}

impl MockTransport {
    fn sent(&self) -> Vec<Envelope> {
        self.sent.lock().unwrap().clone()
    }

    fn last(&self) -> Envelope {
        self.sent.lock().unwrap().last().cloned().unwrap()
    }
}

impl HostTransport for MockTransport {
    fn post(&self, envelope: Envelope) {
        self.sent.lock().unwrap().push(envelope);
    }
}

fn client() -> (CodeStateClient<MockTransport>, MockTransport) {
    let transport = MockTransport::default();
    (CodeStateClient::new(transport.clone()), transport)
}

fn response(
    kind: RequestKind,
    payload: serde_json::Value,
    status: ResponseStatus,
    id: Option<String>,
) -> Envelope {
    Envelope {
        kind: kind.response_kind(),
        payload,
        status: Some(status),
        id,
    }
}

fn session(id: &str, name: &str, root: &str) -> Session {
    Session {
        id: id.to_string(),
        name: name.to_string(),
        project_root: root.to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        tags: Vec::new(),
        notes: None,
        files: Vec::new(),
        git: GitState::default(),
        extensions: HashMap::new(),
        terminal_commands: Vec::new(),
        terminal_collections: Vec::new(),
        scripts: Vec::new(),
    }
}

fn script(name: &str) -> Script {
    Script {
        id: String::new(),
        name: name.to_string(),
        root_path: "/proj".to_string(),
        script: None,
        commands: Vec::new(),
        lifecycle: Vec::new(),
        execution_mode: ExecutionMode::NewTerminals,
        close_terminal_after_execution: false,
    }
}

fn sessions_init_payload(sessions: &[Session]) -> serde_json::Value {
    json!({ "sessions": sessions })
}

#[test]
fn test_initial_session_load() {
    let (mut client, transport) = client();

    client.initialize_sessions();
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(transport.last().kind, "codestate.sessions.init");
    assert!(client.stores().sessions.collection.load().is_loading());

    // Loading guard: a second call sends nothing.
    client.initialize_sessions();
    assert_eq!(transport.sent().len(), 1);

    let sessions = vec![session("s-1", "one", "/proj"), session("s-2", "two", "/proj")];
    client.handle_message(response(
        RequestKind::SessionsInit,
        sessions_init_payload(&sessions),
        ResponseStatus::Success,
        transport.last().id,
    ));

    assert!(client.stores().sessions.collection.load().is_loaded());
    assert_eq!(client.stores().sessions.collection.items().len(), 2);
    // The active root is derived from the first session.
    assert_eq!(client.stores().config.current_project_root(), Some("/proj"));
    assert!(client.pending().is_empty());
}

#[test]
fn test_failed_load_surfaces_error_and_allows_retry() {
    let (mut client, transport) = client();

    client.initialize_sessions();
    client.handle_message(response(
        RequestKind::SessionsInit,
        json!({ "error": "storage unreadable" }),
        ResponseStatus::Error,
        transport.last().id,
    ));

    assert_eq!(
        client.stores().sessions.collection.load().error(),
        Some("storage unreadable")
    );

    client.initialize_sessions();
    assert_eq!(transport.sent().len(), 2);
    assert!(client.stores().sessions.collection.load().is_loading());
}

#[test]
fn test_create_session_optimistic_flow() {
    let (mut client, transport) = client();

    client.handle_event(UiEvent::OpenSessionCreate);
    client
        .create_session(session("", "Feature work", "/proj"))
        .unwrap();

    let request = transport.last();
    assert_eq!(request.kind, "codestate.session.create");
    assert_eq!(request.payload["sessionData"]["name"], "Feature work");
    assert_eq!(client.stores().sessions.collection.staged_count(), 1);
    assert!(client.stores().sessions.collection.items().is_empty());

    client.handle_message(response(
        RequestKind::SessionCreate,
        json!({ "success": true, "id": "host-1" }),
        ResponseStatus::Success,
        request.id,
    ));

    let collection = &client.stores().sessions.collection;
    assert_eq!(collection.staged_count(), 0);
    assert_eq!(collection.get("host-1").unwrap().session.name, "Feature work");
    assert!(collection.shows_created_feedback());
    assert_eq!(collection.newly_created_id(), Some("host-1"));
    // Confirmation closes the wizard.
    assert!(!client.stores().ui.modal().is_open());
}

#[test]
fn test_create_session_error_discards_staged_entity() {
    let (mut client, transport) = client();

    client.handle_event(UiEvent::OpenSessionCreate);
    client
        .create_session(session("", "Feature work", "/proj"))
        .unwrap();
    client.handle_message(response(
        RequestKind::SessionCreate,
        json!({ "success": false, "error": "disk full" }),
        ResponseStatus::Error,
        transport.last().id,
    ));

    let collection = &client.stores().sessions.collection;
    assert_eq!(collection.staged_count(), 0);
    assert!(collection.items().is_empty());
    assert_eq!(client.stores().sessions.create_error(), Some("disk full"));
    // The wizard stays open so the user can fix and resubmit.
    assert!(client.stores().ui.modal().is_creating(Domain::Sessions));
}

#[test]
fn test_create_rejected_via_success_flag_alone() {
    let (mut client, transport) = client();

    client.handle_event(UiEvent::OpenSessionCreate);
    client
        .create_session(session("", "Feature work", "/proj"))
        .unwrap();

    // The host flips the flag but reports an ok status and no error string.
    client.handle_message(response(
        RequestKind::SessionCreate,
        json!({ "success": false, "id": "host-1" }),
        ResponseStatus::Success,
        transport.last().id,
    ));

    let collection = &client.stores().sessions.collection;
    assert_eq!(collection.staged_count(), 0);
    assert!(collection.get("host-1").is_none());
    assert!(client.stores().sessions.create_error().is_some());
    assert!(client.stores().ui.modal().is_creating(Domain::Sessions));
}

#[test]
fn test_invalid_session_is_rejected_before_sending() {
    let (mut client, transport) = client();

    let err = client.create_session(session("", "  ", "/proj")).unwrap_err();
    assert!(err.is_validation());
    assert!(transport.sent().is_empty());
    assert!(client.pending().is_empty());
}

#[test]
fn test_duplicate_create_response_is_idempotent() {
    let (mut client, transport) = client();

    client
        .create_session(session("", "Feature work", "/proj"))
        .unwrap();
    let echo = response(
        RequestKind::SessionCreate,
        json!({ "success": true, "id": "host-1" }),
        ResponseStatus::Success,
        transport.last().id,
    );

    client.handle_message(echo.clone());
    client.handle_message(echo);

    assert_eq!(client.stores().sessions.collection.items().len(), 1);
    assert!(client.pending().is_empty());
}

#[test]
fn test_delete_applies_only_on_confirmation() {
    let (mut client, transport) = client();
    client.initialize_sessions();
    client.handle_message(response(
        RequestKind::SessionsInit,
        sessions_init_payload(&[session("s-1", "one", "/proj")]),
        ResponseStatus::Success,
        transport.last().id,
    ));

    client.delete_session("s-1");
    assert_eq!(client.stores().sessions.collection.items().len(), 1);

    // The host omits the id; the remembered target stands in.
    client.handle_message(response(
        RequestKind::SessionDelete,
        json!({ "success": true }),
        ResponseStatus::Success,
        transport.last().id,
    ));
    assert!(client.stores().sessions.collection.items().is_empty());
}

#[test]
fn test_update_session_commits_on_confirmation() {
    let (mut client, transport) = client();
    client.initialize_sessions();
    client.handle_message(response(
        RequestKind::SessionsInit,
        sessions_init_payload(&[session("s-1", "old name", "/proj")]),
        ResponseStatus::Success,
        transport.last().id,
    ));

    let updates = SessionUpdates {
        name: Some("new name".to_string()),
        ..SessionUpdates::default()
    };
    client.update_session("s-1", updates).unwrap();

    let request = transport.last();
    assert_eq!(request.kind, "codestate.session.update");
    assert_eq!(request.payload["updates"]["name"], "new name");
    // Not yet confirmed: the list still shows the old name.
    assert_eq!(
        client.stores().sessions.collection.get("s-1").unwrap().session.name,
        "old name"
    );

    client.handle_message(response(
        RequestKind::SessionUpdate,
        json!({ "success": true }),
        ResponseStatus::Success,
        request.id,
    ));
    assert_eq!(
        client.stores().sessions.collection.get("s-1").unwrap().session.name,
        "new name"
    );
}

#[test]
fn test_update_of_unknown_session_fails_locally() {
    let (mut client, transport) = client();
    let err = client
        .update_session("ghost", SessionUpdates::default())
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(transport.sent().is_empty());
}

#[test]
fn test_concurrent_creates_resolve_by_echoed_id() {
    let (mut client, transport) = client();

    client.create_script(script("first")).unwrap();
    client.create_script(script("second")).unwrap();
    let sent = transport.sent();
    let first_id = sent[0].id.clone();
    let second_id = sent[1].id.clone();

    // Out-of-order responses: the echoed id keeps them straight.
    client.handle_message(response(
        RequestKind::ScriptCreate,
        json!({ "success": true, "id": "host-2" }),
        ResponseStatus::Success,
        second_id,
    ));
    client.handle_message(response(
        RequestKind::ScriptCreate,
        json!({ "success": true, "id": "host-1" }),
        ResponseStatus::Success,
        first_id,
    ));

    let collection = &client.stores().scripts.collection;
    assert_eq!(collection.get("host-1").unwrap().name, "first");
    assert_eq!(collection.get("host-2").unwrap().name, "second");
}

#[test]
fn test_responses_without_ids_fall_back_to_arrival_order() {
    let (mut client, _transport) = client();

    client.create_script(script("first")).unwrap();
    client.create_script(script("second")).unwrap();

    client.handle_message(response(
        RequestKind::ScriptCreate,
        json!({ "success": true, "id": "host-1" }),
        ResponseStatus::Success,
        None,
    ));
    client.handle_message(response(
        RequestKind::ScriptCreate,
        json!({ "success": true, "id": "host-2" }),
        ResponseStatus::Success,
        None,
    ));

    let collection = &client.stores().scripts.collection;
    assert_eq!(collection.get("host-1").unwrap().name, "first");
    assert_eq!(collection.get("host-2").unwrap().name, "second");
}

#[test]
fn test_unknown_kind_is_dropped() {
    let (mut client, _transport) = client();
    client.handle_message(Envelope {
        kind: "codestate.bogus.response".to_string(),
        payload: json!({}),
        status: Some(ResponseStatus::Success),
        id: None,
    });
    assert!(client.pending().is_empty());
    assert!(client.stores().sessions.collection.items().is_empty());
}

#[test]
fn test_unsolicited_response_is_dropped() {
    let (mut client, _transport) = client();
    client.handle_message(response(
        RequestKind::SessionsInit,
        sessions_init_payload(&[session("s-1", "one", "/proj")]),
        ResponseStatus::Success,
        None,
    ));
    assert!(client.stores().sessions.collection.items().is_empty());
}

#[test]
fn test_theme_push_from_host() {
    let (mut client, _transport) = client();
    client.handle_message(Envelope {
        kind: "theme-changed".to_string(),
        payload: json!({ "theme": "light" }),
        status: None,
        id: None,
    });
    assert_eq!(client.stores().ui.theme(), Theme::Light);
}

#[test]
fn test_set_theme_is_optimistic_and_fire_and_forget() {
    let (mut client, transport) = client();

    client.set_theme(Theme::MatchIde);

    assert_eq!(client.stores().ui.theme(), Theme::MatchIde);
    let request = transport.last();
    assert_eq!(request.kind, "set-theme");
    assert_eq!(request.payload["theme"], "match-ide");
    assert!(client.pending().is_empty());
}

#[test]
fn test_ready_registers_nothing() {
    let (mut client, transport) = client();
    client.ready();
    assert_eq!(transport.last().kind, "codestate.ui.ready");
    assert!(client.pending().is_empty());
}

#[test]
fn test_open_session_create_requests_prefill_once() {
    let (mut client, transport) = client();

    client.handle_event(UiEvent::OpenSessionCreate);
    client.handle_event(UiEvent::OpenSessionCreate);

    let creates: Vec<_> = transport
        .sent()
        .into_iter()
        .filter(|e| e.kind == "codestate.sessions.create.init")
        .collect();
    assert_eq!(creates.len(), 1);
    assert!(client.stores().ui.modal().is_creating(Domain::Sessions));
}

#[test]
fn test_dialogs_are_mutually_exclusive() {
    let (mut client, transport) = client();
    client.initialize_scripts();
    client.handle_message(response(
        RequestKind::ScriptsInit,
        json!({ "scripts": [{ "id": "sc-1", "name": "build", "rootPath": "/proj" }] }),
        ResponseStatus::Success,
        transport.last().id,
    ));

    client.handle_event(UiEvent::OpenSessionCreate);
    client.handle_event(UiEvent::OpenDelete {
        domain: Domain::Scripts,
        id: "sc-1".to_string(),
    });

    let modal = client.stores().ui.modal();
    assert!(!modal.is_creating(Domain::Sessions));
    assert_eq!(modal.deleting_id(Domain::Scripts), Some("sc-1"));

    client.handle_event(UiEvent::CloseDialogs);
    assert!(!client.stores().ui.modal().is_open());
}

#[test]
fn test_edit_and_delete_ignore_stale_ids() {
    let (mut client, _transport) = client();

    client.handle_event(UiEvent::OpenEdit {
        domain: Domain::Scripts,
        id: "ghost".to_string(),
    });
    client.handle_event(UiEvent::OpenDelete {
        domain: Domain::Sessions,
        id: "ghost".to_string(),
    });

    assert!(!client.stores().ui.modal().is_open());
}

#[test]
fn test_terminal_collection_without_scripts_is_rejected() {
    let (mut client, transport) = client();

    let collection = TerminalCollectionWithScripts {
        id: String::new(),
        name: "dev stack".to_string(),
        root_path: "/proj".to_string(),
        lifecycle: Vec::new(),
        scripts: Vec::new(),
        script_references: Vec::new(),
        close_terminal_after_execution: false,
        execution_mode: ExecutionMode::NewTerminals,
    };
    let err = client.create_terminal_collection(collection).unwrap_err();

    assert!(err.is_validation());
    assert!(transport.sent().is_empty());
    assert_eq!(
        client.stores().terminal_collections.collection.staged_count(),
        0
    );
}

#[test]
fn test_resume_event_sends_directly() {
    let (mut client, transport) = client();

    client.handle_event(UiEvent::Resume {
        domain: Domain::TerminalCollections,
        id: "tc-1".to_string(),
    });

    let request = transport.last();
    assert_eq!(request.kind, "codestate.terminal-collection.resume");
    assert_eq!(request.payload["id"], "tc-1");
    assert!(!client.stores().ui.modal().is_open());
}

#[test]
fn test_script_create_form_seeds_active_root() {
    let (mut client, transport) = client();
    client.initialize_sessions();
    client.handle_message(response(
        RequestKind::SessionsInit,
        sessions_init_payload(&[session("s-1", "one", "/proj")]),
        ResponseStatus::Success,
        transport.last().id,
    ));

    client.handle_event(UiEvent::OpenScriptCreate);
    assert_eq!(client.stores().scripts.create_root_path(), Some("/proj"));
    assert!(client.stores().ui.modal().is_creating(Domain::Scripts));
}

#[test]
fn test_config_init_applies_theme_and_os_info() {
    let (mut client, transport) = client();

    client.initialize_config();
    client.handle_message(response(
        RequestKind::ConfigInit,
        json!({
            "config": { "version": "1.2.0", "extensions": { "theme": "light" } },
            "osInfo": {
                "platform": "darwin",
                "isLinux": false,
                "isMacOS": true,
                "isWindows": false,
                "supportsTerminalTabs": false
            }
        }),
        ResponseStatus::Success,
        transport.last().id,
    ));

    assert!(client.stores().config.load().is_loaded());
    assert_eq!(client.stores().ui.theme(), Theme::Light);
    assert!(client.stores().config.os_info().is_some_and(|os| os.is_mac_os));
}

#[test]
fn test_created_feedback_can_be_dismissed() {
    let (mut client, transport) = client();

    client.create_script(script("build")).unwrap();
    client.handle_message(response(
        RequestKind::ScriptCreate,
        json!({ "success": true, "id": "host-1" }),
        ResponseStatus::Success,
        transport.last().id,
    ));
    assert!(client.stores().scripts.collection.shows_created_feedback());

    client.handle_event(UiEvent::DismissCreatedFeedback(Domain::Scripts));
    assert!(!client.stores().scripts.collection.shows_created_feedback());
}
