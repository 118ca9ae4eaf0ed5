//! CodeState webview client.
//!
//! The message-passing state layer between the CodeState UI and the IDE
//! extension host. The host performs all real work (file I/O, git, terminal
//! execution, persistence); this crate sends typed request envelopes over a
//! pluggable transport, correlates the host's responses back to in-flight
//! requests, and keeps reactive per-domain stores that the rendering layer
//! subscribes to.
//!
//! # Module Structure
//!
//! - `protocol`: wire envelope, message kinds, pending-request correlation
//! - `transport`: the outbound seam to the host, plus a channel-backed impl
//! - `store`: injectable reactive state containers and the modal union
//! - `managers`: response handlers, one per owned message kind
//! - `ui`: UI intents and the session-creation wizard
//! - `client`: the composition root tying everything together

pub mod client;
pub mod managers;
pub mod protocol;
pub mod store;
pub mod transport;
pub mod ui;

pub use client::CodeStateClient;

#[cfg(test)]
mod client_test;
