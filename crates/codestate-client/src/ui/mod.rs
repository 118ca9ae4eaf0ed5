//! View-side helpers: UI events and the session-creation wizard.

mod events;
mod wizard;

// Re-export public API
pub use events::UiEvent;
pub use wizard::{SessionWizard, WizardStep};
