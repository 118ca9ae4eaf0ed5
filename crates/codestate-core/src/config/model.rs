//! Host configuration document.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The extension configuration as persisted by the host.
///
/// The client edits and displays it; reading and writing the backing file is
/// host work. `extensions` is an open map; the UI theme travels under its
/// `theme` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub ide: String,
    #[serde(default)]
    pub storage_path: String,
    #[serde(default)]
    pub logger: LoggerConfig,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extensions: HashMap<String, serde_json::Value>,
}

/// Host-side logger settings carried inside the config document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub sinks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
