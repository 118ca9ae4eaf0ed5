//! Typed response payloads, one per kind family.
//!
//! Every field is defaulted: hosts populate only what a given kind carries
//! and consumers check presence instead of trusting the shape.

use codestate_core::config::{Config, OsInfo};
use codestate_core::script::Script;
use codestate_core::session::{SessionPrefill, SessionWithFullData};
use codestate_core::terminal_collection::TerminalCollectionWithScripts;
use serde::Deserialize;

/// Payload of `codestate.sessions.init.response`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionsInitPayload {
    pub sessions: Vec<SessionWithFullData>,
    pub current_project_root: Option<String>,
    pub error: Option<String>,
}

/// Payload of `codestate.scripts.init.response`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptsInitPayload {
    pub scripts: Vec<Script>,
    pub error: Option<String>,
}

/// Payload of `codestate.tc.init.response`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminalCollectionsInitPayload {
    pub terminal_collections: Vec<TerminalCollectionWithScripts>,
    pub error: Option<String>,
}

/// Payload of `codestate.config.init.response`. Carries the one-shot OS
/// snapshot alongside the config document.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigInitPayload {
    pub config: Option<Config>,
    pub os_info: Option<OsInfo>,
    pub error: Option<String>,
}

/// Payload of `codestate.config.update.response`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigUpdatePayload {
    pub config: Option<Config>,
    pub error: Option<String>,
}

/// Payload of `codestate.sessions.create.init.response`: the host-captured
/// seed for the creation wizard.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionCreateInitPayload {
    pub session_data: Option<SessionPrefill>,
    pub error: Option<String>,
}

/// Payload of create/delete/resume responses across all three domains.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MutationResponsePayload {
    pub success: bool,
    pub id: Option<String>,
    pub error: Option<String>,
}

/// Payload of `codestate.session.update.response`; the host may return the
/// full updated session or just its id.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionUpdateResponsePayload {
    pub session: Option<SessionWithFullData>,
    pub id: Option<String>,
    pub error: Option<String>,
}

/// Payload of `codestate.session.export.response`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportResponsePayload {
    pub session_id: Option<String>,
    pub export_path: Option<String>,
    pub error: Option<String>,
}

/// Payload of the host-initiated `theme-changed` push.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeChangedPayload {
    pub theme: String,
}
