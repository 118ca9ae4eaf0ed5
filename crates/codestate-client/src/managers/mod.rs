//! Response handlers, one manager per domain.
//!
//! Managers are stateless: each handler takes the stores it mutates plus
//! the resolved pending entry and the inbound envelope. All host errors
//! are terminal for the request: state staged for it is discarded, the
//! message is surfaced or logged, and nothing retries.

mod config;
mod data;
mod script;
mod session;
mod terminal_collection;
mod theme;

// Re-export public API
pub use config::ConfigManager;
pub use data::DataManager;
pub use script::ScriptManager;
pub use session::SessionManager;
pub use terminal_collection::TerminalCollectionManager;
pub use theme::ThemeManager;

use crate::protocol::{Envelope, MutationResponsePayload};

/// Extracts the error of a response, combining the envelope status with the
/// per-kind `error` payload field. `None` means the response succeeded.
fn response_error(envelope: &Envelope, payload_error: Option<String>) -> Option<String> {
    if let Some(message) = payload_error {
        return Some(message);
    }
    if envelope.status.is_some() && !envelope.is_success() {
        return Some("host reported an unspecified error".to_string());
    }
    None
}

/// Failure check for mutation responses. The host signals rejection with
/// `success: false` even when it omits the error string and the envelope
/// status, so the flag is authoritative alongside the error channels.
fn mutation_error(envelope: &Envelope, payload: &MutationResponsePayload) -> Option<String> {
    if let Some(message) = response_error(envelope, payload.error.clone()) {
        return Some(message);
    }
    if !payload.success {
        return Some("request rejected by the host".to_string());
    }
    None
}
