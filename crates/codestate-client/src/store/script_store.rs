//! Script domain store.

use super::collection::EntityCollection;
use super::notify::ChangeNotifier;
use codestate_core::script::Script;

/// Scripts plus the root path new scripts default to.
#[derive(Debug, Default)]
pub struct ScriptStore {
    pub collection: EntityCollection<Script>,
    /// Project root pre-filled into the script creation form.
    create_root_path: Option<String>,
    pub notifier: ChangeNotifier,
}

impl ScriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_root_path(&self) -> Option<&str> {
        self.create_root_path.as_deref()
    }

    pub fn set_create_root_path(&mut self, root_path: Option<String>) {
        self.create_root_path = root_path;
        self.notifier.notify();
    }
}
