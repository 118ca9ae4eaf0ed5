//! Events emitted by the views.

use crate::store::Domain;

/// Everything a view can ask the client to do besides entity mutations.
///
/// Dialog events funnel through here so opening one dialog always closes
/// the others, and so the session-create flow triggers its host prefill
/// request in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Open the session-creation wizard (requests the workspace prefill).
    OpenSessionCreate,
    /// Open the script creation form.
    OpenScriptCreate,
    /// Open the terminal-collection creation form.
    OpenTerminalCollectionCreate,
    /// Open the edit form for an existing entity.
    OpenEdit { domain: Domain, id: String },
    /// Open the delete confirmation for an existing entity.
    OpenDelete { domain: Domain, id: String },
    /// Ask the host to resume (sessions) or execute (scripts, collections)
    /// an entity. Sends directly; no dialog involved.
    Resume { domain: Domain, id: String },
    /// Ask the host to export a session to disk.
    ExportSession { id: String },
    /// Open the configuration editor.
    OpenConfig,
    /// Close whatever dialog is open.
    CloseDialogs,
    /// Clear the "just created" highlight for a domain.
    DismissCreatedFeedback(Domain),
}
