//! Terminal collection domain module.
//!
//! A terminal collection is a named group of script references executed
//! together under one terminal strategy. References are weak: they are
//! resolved against the script store at read time, never owned.

mod model;

// Re-export public API
pub use model::{ScriptReference, TerminalCollectionWithScripts};
