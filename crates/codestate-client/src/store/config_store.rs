//! Configuration and environment store.

use super::load_state::LoadState;
use super::notify::ChangeNotifier;
use codestate_core::config::{Config, ExecutionTarget, OsInfo};

/// Application config, the OS snapshot, and the active project root.
///
/// The config document and the OS snapshot arrive together on the config
/// init response; the project root is derived from session data and shared
/// with every creation form.
#[derive(Debug, Default)]
pub struct ConfigStore {
    config: Option<Config>,
    os_info: Option<OsInfo>,
    load: LoadState,
    config_error: Option<String>,
    current_project_root: Option<String>,
    pub notifier: ChangeNotifier,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn os_info(&self) -> Option<&OsInfo> {
        self.os_info.as_ref()
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    pub fn begin_loading(&mut self) -> bool {
        let started = self.load.begin();
        if started {
            self.notifier.notify();
        }
        started
    }

    pub fn finish_load(&mut self, config: Option<Config>, os_info: Option<OsInfo>) {
        self.config = config;
        // The snapshot is delivered once; keep the old one if the host
        // omits it on a later refresh.
        if os_info.is_some() {
            self.os_info = os_info;
        }
        self.config_error = None;
        self.load.succeed();
        self.notifier.notify();
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.config_error = Some(message.clone());
        self.load.fail(message);
        self.notifier.notify();
    }

    /// Replaces the config document after a successful update response.
    pub fn apply_update(&mut self, config: Config) {
        self.config = Some(config);
        self.config_error = None;
        self.notifier.notify();
    }

    pub fn config_error(&self) -> Option<&str> {
        self.config_error.as_deref()
    }

    pub fn set_config_error(&mut self, error: Option<String>) {
        self.config_error = error;
        self.notifier.notify();
    }

    /// Execution targets the UI may offer, derived from the OS snapshot.
    /// Only the IDE target is offered until the snapshot arrives.
    pub fn execution_targets(&self) -> Vec<ExecutionTarget> {
        match &self.os_info {
            Some(os) => ExecutionTarget::available_for(os),
            None => vec![ExecutionTarget::Ide],
        }
    }

    pub fn current_project_root(&self) -> Option<&str> {
        self.current_project_root.as_deref()
    }

    pub fn set_current_project_root(&mut self, root: Option<String>) {
        self.current_project_root = root;
        self.notifier.notify();
    }
}
