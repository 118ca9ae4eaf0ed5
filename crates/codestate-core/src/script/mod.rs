//! Script domain module.
//!
//! A script is a named, ordered list of shell commands with lifecycle and
//! execution-mode metadata. Execution itself is owned by the host.

mod model;

// Re-export public API
pub use model::{ExecutionMode, LifecycleEvent, Script, ScriptCommand};
