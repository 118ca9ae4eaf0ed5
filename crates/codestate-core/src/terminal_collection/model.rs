//! Terminal collection domain models.

use crate::error::{CodeStateError, Result};
use crate::script::{ExecutionMode, LifecycleEvent, Script};
use serde::{Deserialize, Serialize};

/// Weak reference to a script in another store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptReference {
    pub id: String,
    pub root_path: String,
}

/// A named group of script references executed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalCollectionWithScripts {
    /// Host-assigned identifier; empty while provisional
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub root_path: String,
    #[serde(default)]
    pub lifecycle: Vec<LifecycleEvent>,
    /// Resolved script copies, when the host supplied them
    #[serde(default)]
    pub scripts: Vec<Script>,
    /// Weak references resolved against the script store at read time
    #[serde(default)]
    pub script_references: Vec<ScriptReference>,
    #[serde(default)]
    pub close_terminal_after_execution: bool,
    #[serde(default)]
    pub execution_mode: ExecutionMode,
}

impl TerminalCollectionWithScripts {
    /// Validates the fields the client must check before sending a create or
    /// update message: name and root path are mandatory, and at least one
    /// script reference is required.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CodeStateError::validation(
                "terminal collection name is required",
            ));
        }
        if self.root_path.trim().is_empty() {
            return Err(CodeStateError::validation(
                "terminal collection root path is required",
            ));
        }
        if self.script_references.is_empty() {
            return Err(CodeStateError::validation(
                "terminal collection needs at least one script",
            ));
        }
        Ok(())
    }

    /// True while the collection has not been confirmed by the host.
    pub fn is_provisional(&self) -> bool {
        self.id.is_empty()
    }

    /// Returns the collection with the host-assigned id filled in.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Resolves the weak script references against a script list.
    ///
    /// Dangling references (no script with a matching id) are skipped; the
    /// reference list itself is left untouched.
    pub fn resolve_scripts<'a>(&self, scripts: &'a [Script]) -> Vec<&'a Script> {
        self.script_references
            .iter()
            .filter_map(|reference| scripts.iter().find(|script| script.id == reference.id))
            .collect()
    }
}
