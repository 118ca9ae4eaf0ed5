//! Terminal-collection domain store.

use super::collection::EntityCollection;
use super::notify::ChangeNotifier;
use codestate_core::terminal_collection::TerminalCollectionWithScripts;

/// Terminal collections plus the root path new ones default to.
#[derive(Debug, Default)]
pub struct TerminalCollectionStore {
    pub collection: EntityCollection<TerminalCollectionWithScripts>,
    /// Project root pre-filled into the collection creation form.
    create_root_path: Option<String>,
    pub notifier: ChangeNotifier,
}

impl TerminalCollectionStore {
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
