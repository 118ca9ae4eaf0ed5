//! Cross-cutting UI state: the open dialog and the active theme.

use super::modal::{Domain, Modal};
use super::notify::ChangeNotifier;
use codestate_core::config::Theme;

/// Dialog and theme state shared by every view.
#[derive(Debug, Default)]
pub struct UiStore {
    modal: Modal,
    theme: Theme,
    pub notifier: ChangeNotifier,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.notifier.notify();
    }

    pub fn open_create(&mut self, domain: Domain) {
        self.set_modal(Modal::Creating(domain));
    }

    pub fn open_edit(&mut self, domain: Domain, id: impl Into<String>) {
        self.set_modal(Modal::Editing(domain, id.into()));
    }

    pub fn open_delete(&mut self, domain: Domain, id: impl Into<String>) {
        self.set_modal(Modal::Deleting(domain, id.into()));
    }

    pub fn open_config(&mut self) {
        self.set_modal(Modal::Configuring);
    }

    pub fn close_all(&mut self) {
        self.set_modal(Modal::Closed);
    }

    fn set_modal(&mut self, modal: Modal) {
        self.modal = modal;
        self.notifier.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_dialog_open_at_a_time() {
        let mut store = UiStore::new();
        store.open_create(Domain::Sessions);
        store.open_delete(Domain::Scripts, "s1");

        assert!(!store.modal().is_creating(Domain::Sessions));
        assert_eq!(store.modal().deleting_id(Domain::Scripts), Some("s1"));

        store.close_all();
        assert!(!store.modal().is_open());
    }

    #[test]
    fn test_mutations_notify_subscribers() {
        let mut store = UiStore::new();
        let mut rx = store.notifier.subscribe();

        store.set_theme(Theme::Light);
        assert!(rx.try_recv().is_ok());
        assert_eq!(store.theme(), Theme::Light);
    }
}
