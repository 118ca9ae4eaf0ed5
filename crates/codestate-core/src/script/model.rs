//! Script domain models.

use crate::error::{CodeStateError, Result};
use serde::{Deserialize, Serialize};

/// When a script or terminal collection auto-executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleEvent {
    /// Runs when the project is opened
    Open,
    /// Runs when a session is resumed
    Resume,
    /// Never auto-executes
    None,
}

/// Terminal strategy used when the host executes commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    /// All commands run sequentially in one terminal
    SameTerminal,
    /// Each command gets its own terminal
    #[default]
    NewTerminals,
}

/// A named, ordered bundle of shell commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    /// Host-assigned identifier; empty while provisional
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub root_path: String,
    /// Legacy single-command form, kept for hosts that still send it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Ordered command list; lower priority runs first
    #[serde(default)]
    pub commands: Vec<ScriptCommand>,
    /// Lifecycle events that trigger auto-execution
    #[serde(default)]
    pub lifecycle: Vec<LifecycleEvent>,
    #[serde(default)]
    pub execution_mode: ExecutionMode,
    #[serde(default)]
    pub close_terminal_after_execution: bool,
}

/// One command within a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptCommand {
    pub command: String,
    pub name: String,
    pub priority: u32,
}

impl Script {
    /// Validates the fields the client must check before sending a create or
    /// update message: name and root path are mandatory.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CodeStateError::validation("script name is required"));
        }
        if self.root_path.trim().is_empty() {
            return Err(CodeStateError::validation("script root path is required"));
        }
        Ok(())
    }

    /// True while the script has not been confirmed by the host.
    pub fn is_provisional(&self) -> bool {
        self.id.is_empty()
    }

    /// Returns the script with the host-assigned id filled in.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_script() -> Script {
        Script {
            id: String::new(),
            name: "build".to_string(),
            root_path: "/proj".to_string(),
            script: None,
            commands: vec![ScriptCommand {
                command: "cargo build".to_string(),
                name: "build".to_string(),
                priority: 1,
            }],
            lifecycle: vec![LifecycleEvent::Open],
            execution_mode: ExecutionMode::NewTerminals,
            close_terminal_after_execution: false,
        }
    }

    #[test]
    fn test_validate_requires_name_and_root_path() {
        assert!(sample_script().validate().is_ok());

        let mut script = sample_script();
        script.name = String::new();
        assert!(script.validate().is_err());

        let mut script = sample_script();
        script.root_path = " ".to_string();
        assert!(script.validate().is_err());
    }

    #[test]
    fn test_execution_mode_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ExecutionMode::SameTerminal).unwrap(),
            "\"same-terminal\""
        );
        assert_eq!(
            serde_json::to_string(&ExecutionMode::NewTerminals).unwrap(),
            "\"new-terminals\""
        );
    }

    #[test]
    fn test_lifecycle_wire_strings() {
        assert_eq!(
            serde_json::to_string(&LifecycleEvent::Open).unwrap(),
            "\"open\""
        );
        let parsed: LifecycleEvent = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, LifecycleEvent::None);
    }
}
