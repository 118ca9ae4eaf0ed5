//! Reactive state stores.
//!
//! One injectable container per domain, constructed by the composition root
//! and passed by reference; no module-level singletons. Mutation is
//! single-writer (the owning manager or the UI thread); every mutation
//! synchronously publishes on the store's [`ChangeNotifier`] so subscribed
//! views re-render.
//!
//! # Module Structure
//!
//! - `notify`: broadcast-based change notification
//! - `load_state`: the NotLoaded/Loading/Loaded/Errored machine
//! - `collection`: id-keyed entity list with provisional-key staging
//! - `modal`: the single tagged-union dialog state
//! - one store module per domain, plus [`Stores`] bundling them

mod collection;
mod config_store;
mod load_state;
mod modal;
mod notify;
mod script_store;
mod session_store;
mod terminal_collection_store;
mod ui_store;

// Re-export public API
pub use collection::{EntityCollection, Identified};
pub use config_store::ConfigStore;
pub use load_state::LoadState;
pub use modal::{Domain, Modal};
pub use notify::ChangeNotifier;
pub use script_store::ScriptStore;
pub use session_store::SessionStore;
pub use terminal_collection_store::TerminalCollectionStore;
pub use ui_store::UiStore;

/// All domain stores, owned together by the composition root.
#[derive(Debug, Default)]
pub struct Stores {
    pub sessions: SessionStore,
    pub scripts: ScriptStore,
    pub terminal_collections: TerminalCollectionStore,
    pub config: ConfigStore,
    pub ui: UiStore,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}
