//! OS snapshot and execution-target derivation.

use serde::{Deserialize, Serialize};

/// Platform flags reported by the host.
///
/// Fetched once during initialization and immutable afterwards; only used to
/// gate which execution targets the UI offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsInfo {
    pub platform: String,
    pub is_linux: bool,
    // camelCase would give "isMacOs"; the host sends "isMacOS"
    #[serde(rename = "isMacOS")]
    pub is_mac_os: bool,
    pub is_windows: bool,
    pub supports_terminal_tabs: bool,
}

/// Where a terminal collection runs when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionTarget {
    /// Inside the IDE's integrated terminal
    Ide,
    /// One external terminal, commands share it (needs tab support outside macOS)
    SameTerminal,
    /// One external terminal per script
    MultiTerminal,
}

impl ExecutionTarget {
    /// Returns the targets the UI may offer on the given platform.
    ///
    /// IDE and multi-terminal are always available. Same-terminal is offered
    /// on macOS unconditionally and on Linux/Windows only when the platform
    /// terminal supports tabs.
    pub fn available_for(os: &OsInfo) -> Vec<ExecutionTarget> {
        let mut targets = vec![ExecutionTarget::Ide];
        if os.is_mac_os || os.supports_terminal_tabs {
            targets.push(ExecutionTarget::SameTerminal);
        }
        targets.push(ExecutionTarget::MultiTerminal);
        targets
    }
}
