//! Id-keyed entity collection with optimistic staging.

use super::load_state::LoadState;
use crate::protocol::RequestId;
use codestate_core::script::Script;
use codestate_core::session::SessionWithFullData;
use codestate_core::terminal_collection::TerminalCollectionWithScripts;
use std::collections::HashMap;

/// Entities addressable by their host-assigned id.
pub trait Identified {
    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
}

impl Identified for SessionWithFullData {
    fn id(&self) -> &str {
        &self.session.id
    }

    fn assign_id(&mut self, id: String) {
        self.session.id = id;
    }
}

impl Identified for Script {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Identified for TerminalCollectionWithScripts {
    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Ordered entity list plus load state, staging, and creation feedback.
///
/// Staging generalizes the single "temp entity" slot to a map keyed by the
/// originating request id, so concurrent creations cannot clobber each
/// other's placeholder. A staged entity has an empty id until
/// [`EntityCollection::commit_create`] promotes it with the host-assigned
/// one.
#[derive(Debug)]
pub struct EntityCollection<T> {
    items: Vec<T>,
    load: LoadState,
    staged_creates: HashMap<RequestId, T>,
    staged_updates: HashMap<RequestId, T>,
    newly_created_id: Option<String>,
    show_created_feedback: bool,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            load: LoadState::default(),
            staged_creates: HashMap::new(),
            staged_updates: HashMap::new(),
            newly_created_id: None,
            show_created_feedback: false,
        }
    }
}

impl<T: Identified> EntityCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    /// Guarded transition into Loading; see [`LoadState::begin`].
    pub fn begin_loading(&mut self) -> bool {
        self.load.begin()
    }

    /// Replaces the collection with host data and marks it Loaded.
    pub fn finish_load(&mut self, items: Vec<T>) {
        self.items = items;
        self.load.succeed();
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.load.fail(message);
    }

    /// Appends an entity unless one with the same id already exists.
    ///
    /// Deduping here is what makes a duplicated create response harmless:
    /// the second delivery finds the id present and no-ops.
    pub fn add(&mut self, item: T) -> bool {
        if self.get(item.id()).is_some() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes by id; silent no-op when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Replaces the first entity with a matching id; silent no-op when
    /// absent.
    pub fn update(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Stages a provisional entity for an in-flight create.
    pub fn stage_create(&mut self, key: RequestId, item: T) {
        self.staged_creates.insert(key, item);
    }

    /// Promotes a staged create into the collection under the host id.
    ///
    /// No-ops (returning false) when the key is unknown, which is exactly
    /// what a duplicate success delivery looks like.
    pub fn commit_create(&mut self, key: &RequestId, id: &str) -> bool {
        let Some(mut item) = self.staged_creates.remove(key) else {
            return false;
        };
        item.assign_id(id.to_string());
        self.add(item)
    }

    /// Stages the edited entity for an in-flight update.
    pub fn stage_update(&mut self, key: RequestId, item: T) {
        self.staged_updates.insert(key, item);
    }

    /// Applies a staged update to the collection entry with the same id.
    pub fn commit_update(&mut self, key: &RequestId) -> bool {
        match self.staged_updates.remove(key) {
            Some(item) => self.update(item),
            None => false,
        }
    }

    /// Drops a staged create or update after an error response. The error
    /// itself is surfaced separately; nothing is retried.
    pub fn abandon(&mut self, key: &RequestId) -> bool {
        self.staged_creates.remove(key).is_some() || self.staged_updates.remove(key).is_some()
    }

    pub fn staged_create(&self, key: &RequestId) -> Option<&T> {
        self.staged_creates.get(key)
    }

    pub fn staged_count(&self) -> usize {
        self.staged_creates.len() + self.staged_updates.len()
    }

    /// Shows the transient "just created" highlight for an entity.
    pub fn display_created_feedback(&mut self, id: impl Into<String>) {
        self.newly_created_id = Some(id.into());
        self.show_created_feedback = true;
    }

    pub fn hide_created_feedback(&mut self) {
        self.newly_created_id = None;
        self.show_created_feedback = false;
    }

    pub fn newly_created_id(&self) -> Option<&str> {
        self.newly_created_id.as_deref()
    }

    pub fn shows_created_feedback(&self) -> bool {
        self.show_created_feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codestate_core::script::{ExecutionMode, Script};

    fn script(id: &str, name: &str) -> Script {
        Script {
            id: id.to_string(),
            name: name.to_string(),
            root_path: "/proj".to_string(),
            script: None,
            commands: Vec::new(),
            lifecycle: Vec::new(),
            execution_mode: ExecutionMode::NewTerminals,
            close_terminal_after_execution: false,
        }
    }

    #[test]
    fn test_add_dedupes_by_id() {
        let mut collection = EntityCollection::new();
        assert!(collection.add(script("a", "one")));
        assert!(!collection.add(script("a", "clone")));
        assert_eq!(collection.items().len(), 1);
        assert_eq!(collection.items()[0].name, "one");
    }

    #[test]
    fn test_remove_and_update_are_silent_on_missing() {
        let mut collection = EntityCollection::new();
        collection.add(script("a", "one"));

        assert!(!collection.remove("ghost"));
        assert!(!collection.update(script("ghost", "renamed")));
        assert_eq!(collection.items().len(), 1);
    }

    #[test]
    fn test_commit_create_promotes_staged_entity() {
        let mut collection = EntityCollection::new();
        let key = RequestId::new();
        collection.stage_create(key.clone(), script("", "pending"));

        assert!(collection.commit_create(&key, "abc123"));
        assert_eq!(collection.staged_count(), 0);
        assert_eq!(collection.get("abc123").unwrap().name, "pending");
    }

    #[test]
    fn test_commit_create_twice_is_idempotent() {
        let mut collection = EntityCollection::new();
        let key = RequestId::new();
        collection.stage_create(key.clone(), script("", "pending"));

        assert!(collection.commit_create(&key, "abc123"));
        assert!(!collection.commit_create(&key, "abc123"));
        assert_eq!(collection.items().len(), 1);
    }

    #[test]
    fn test_concurrent_stages_do_not_clobber() {
        let mut collection = EntityCollection::new();
        let first = RequestId::new();
        let second = RequestId::new();
        collection.stage_create(first.clone(), script("", "first"));
        collection.stage_create(second.clone(), script("", "second"));

        assert!(collection.commit_create(&second, "id-2"));
        assert!(collection.commit_create(&first, "id-1"));
        assert_eq!(collection.get("id-1").unwrap().name, "first");
        assert_eq!(collection.get("id-2").unwrap().name, "second");
    }

    #[test]
    fn test_abandon_discards_staged_entity() {
        let mut collection = EntityCollection::new();
        let key = RequestId::new();
        collection.stage_create(key.clone(), script("", "doomed"));

        assert!(collection.abandon(&key));
        assert!(!collection.commit_create(&key, "abc123"));
        assert!(collection.items().is_empty());
    }

    #[test]
    fn test_commit_update_replaces_matching_id() {
        let mut collection = EntityCollection::new();
        collection.add(script("a", "old"));
        let key = RequestId::new();
        collection.stage_update(key.clone(), script("a", "new"));

        assert!(collection.commit_update(&key));
        assert_eq!(collection.get("a").unwrap().name, "new");
    }
}
