//! Session domain model.
//!
//! Wire shapes match the host's `@codestate/core` session types; all field
//! names serialize camelCase.

use crate::error::{CodeStateError, Result};
use crate::script::Script;
use crate::terminal_collection::TerminalCollectionWithScripts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A saved snapshot of a workspace.
///
/// Invariant: `id` is the empty string only while the session is a
/// provisional (host-unconfirmed) entity; the host assigns the real id on
/// confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Host-assigned identifier; empty while provisional
    #[serde(default)]
    pub id: String,
    /// Human-readable session name
    pub name: String,
    /// Root directory of the captured project
    pub project_root: String,
    /// Timestamp when the session was captured
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update
    pub updated_at: DateTime<Utc>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional user notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Open editor files, in display order
    #[serde(default)]
    pub files: Vec<FileState>,
    /// Git state at capture time
    pub git: GitState,
    /// Extension-owned payloads keyed by extension name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extensions: HashMap<String, serde_json::Value>,
    /// Captured terminal commands per terminal
    #[serde(default)]
    pub terminal_commands: Vec<TerminalCommandState>,
    /// Ids of associated terminal collections (string linkage, not ownership)
    #[serde(default)]
    pub terminal_collections: Vec<String>,
    /// Ids of associated scripts (string linkage, not ownership)
    #[serde(default)]
    pub scripts: Vec<String>,
}

impl Session {
    /// Validates the fields the client must check before sending a create or
    /// update message: name and project root are mandatory.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CodeStateError::validation("session name is required"));
        }
        if self.project_root.trim().is_empty() {
            return Err(CodeStateError::validation(
                "session project root is required",
            ));
        }
        Ok(())
    }

    /// True while the session has not been confirmed by the host.
    pub fn is_provisional(&self) -> bool {
        self.id.is_empty()
    }

    /// Returns the session with the host-assigned id filled in.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// A session together with its resolved script and terminal-collection data.
///
/// The host resolves the id linkage server-side for list views; the plain id
/// lists on [`Session`] stay authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionWithFullData {
    #[serde(flatten)]
    pub session: Session,
    /// Resolved terminal collections, when the host supplied them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_collections_data: Option<Vec<TerminalCollectionWithScripts>>,
    /// Resolved scripts, when the host supplied them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts_data: Option<Vec<Script>>,
}

impl From<Session> for SessionWithFullData {
    fn from(session: Session) -> Self {
        Self {
            session,
            terminal_collections_data: None,
            scripts_data: None,
        }
    }
}

/// State of one open editor file within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileState {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollPosition>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Cursor location within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

/// Scroll offsets within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub top: u32,
    pub left: u32,
}

/// Git state captured with the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitState {
    pub branch: String,
    pub commit: String,
    pub is_dirty: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stash_id: Option<String>,
}

/// Commands captured from one terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalCommandState {
    pub terminal_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_name: Option<String>,
    #[serde(default)]
    pub commands: Vec<SessionTerminalCommand>,
}

/// One captured terminal command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTerminalCommand {
    pub command: String,
    pub name: String,
    pub priority: u32,
}

/// Host-captured seed data for the session-creation dialog.
///
/// Delivered on the `codestate.sessions.create.init` response: the host
/// inspects the live workspace (open files, git, terminals) and the user
/// fills in the rest through the wizard. Every field is optional; the client
/// checks presence defensively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionPrefill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<String>,
    #[serde(default)]
    pub files: Vec<FileState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<GitState>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extensions: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub terminal_commands: Vec<TerminalCommandState>,
}

/// The changed fields sent with a `codestate.session.update` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_collections: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            id: "s-1".to_string(),
            name: "Feature work".to_string(),
            project_root: "/proj".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            tags: vec!["wip".to_string()],
            notes: None,
            files: vec![FileState {
                path: "src/main.rs".to_string(),
                cursor: Some(CursorPosition { line: 3, column: 7 }),
                scroll: None,
                is_active: true,
                position: Some(0),
            }],
            git: GitState {
                branch: "main".to_string(),
                commit: "abc".to_string(),
                is_dirty: false,
                stash_id: None,
            },
            extensions: HashMap::new(),
            terminal_commands: Vec::new(),
            terminal_collections: Vec::new(),
            scripts: Vec::new(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_session().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut session = sample_session();
        session.name = "   ".to_string();
        let err = session.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_rejects_blank_project_root() {
        let mut session = sample_session();
        session.project_root = String::new();
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_provisional_until_id_assigned() {
        let mut session = sample_session();
        session.id = String::new();
        assert!(session.is_provisional());
        let session = session.with_id("abc123");
        assert!(!session.is_provisional());
        assert_eq!(session.id, "abc123");
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample_session()).unwrap();
        assert!(json.get("projectRoot").is_some());
        assert!(json.get("createdAt").is_some());
        let file = &json["files"][0];
        assert!(file.get("isActive").is_some());
    }
}
