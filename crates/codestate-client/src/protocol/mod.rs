//! Wire protocol between the webview client and the host.
//!
//! Both directions use the same envelope: `{type, payload, status?, id?}`.
//! Requests carry a client-generated id; responses are matched by that id
//! when the host echoes it, falling back to the `.response` kind-suffix
//! convention for hosts that do not.

mod envelope;
mod kinds;
mod payloads;
mod pending;

// Re-export public API
pub use envelope::{Envelope, ResponseStatus};
pub use kinds::{RequestKind, RESPONSE_SUFFIX, THEME_CHANGED};
pub use payloads::{
    ConfigInitPayload, ConfigUpdatePayload, ExportResponsePayload, MutationResponsePayload,
    ScriptsInitPayload, SessionCreateInitPayload, SessionUpdateResponsePayload,
    SessionsInitPayload, TerminalCollectionsInitPayload, ThemeChangedPayload,
};
pub use pending::{PendingRequest, PendingRequests, RequestId};
