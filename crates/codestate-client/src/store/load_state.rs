//! Collection load-state machine.

/// Lifecycle of a host-loaded collection.
///
/// ```text
/// NotLoaded --initialize (guarded)--> Loading
/// Loading   --success response-----> Loaded
/// Loading   --error response------->  Errored
/// Errored   --initialize retry-----> Loading
/// ```
///
/// Loaded and Errored are both stable: nothing auto-retries, the user
/// re-invokes initialization from the error affordance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Errored(String),
}

impl LoadState {
    /// True iff not loaded and not loading, the only states in which an
    /// initialize call may send a request.
    pub fn needs_data(&self) -> bool {
        matches!(self, LoadState::NotLoaded | LoadState::Errored(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, LoadState::Errored(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// Guarded transition into Loading.
    ///
    /// Returns whether the transition happened; callers must not send an
    /// init request when it did not (duplicate-request guard).
    pub fn begin(&mut self) -> bool {
        if self.needs_data() {
            *self = LoadState::Loading;
            true
        } else {
            false
        }
    }

    pub fn succeed(&mut self) {
        *self = LoadState::Loaded;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = LoadState::Errored(message.into());
    }
}
