//! Domain models shared across the CodeState webview client.
//!
//! Everything here mirrors the wire shapes the IDE extension host speaks:
//! sessions, scripts, terminal collections, and the configuration document,
//! plus the client-side validation rules applied before a mutation is sent.

pub mod config;
pub mod error;
pub mod script;
pub mod session;
pub mod terminal_collection;

// Re-export common error type
pub use error::CodeStateError;
