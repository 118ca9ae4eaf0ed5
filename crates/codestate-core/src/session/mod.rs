//! Session domain module.
//!
//! A session is a saved snapshot of a workspace: open files, git state, and
//! the scripts and terminal collections associated with it. The host owns
//! capture and restore; this crate only models the wire shapes and the
//! client-side invariants.

mod model;

// Re-export public API
pub use model::{
    CursorPosition, FileState, GitState, ScrollPosition, Session, SessionPrefill,
    SessionTerminalCommand, SessionUpdates, SessionWithFullData, TerminalCommandState,
};
