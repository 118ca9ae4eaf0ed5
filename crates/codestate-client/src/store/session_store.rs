//! Session domain store.

use super::collection::EntityCollection;
use super::notify::ChangeNotifier;
use codestate_core::session::{SessionPrefill, SessionWithFullData};

/// Sessions plus the creation-wizard seed captured from the host.
#[derive(Debug, Default)]
pub struct SessionStore {
    pub collection: EntityCollection<SessionWithFullData>,
    /// Workspace snapshot the host captured for the creation wizard.
    create_prefill: Option<SessionPrefill>,
    /// Error from the last failed create/prefill exchange.
    create_error: Option<String>,
    pub notifier: ChangeNotifier,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_prefill(&self) -> Option<&SessionPrefill> {
        self.create_prefill.as_ref()
    }

    pub fn set_create_prefill(&mut self, prefill: Option<SessionPrefill>) {
        self.create_prefill = prefill;
        self.notifier.notify();
    }

    pub fn create_error(&self) -> Option<&str> {
        self.create_error.as_deref()
    }

    pub fn set_create_error(&mut self, error: Option<String>) {
        self.create_error = error;
        self.notifier.notify();
    }
}
