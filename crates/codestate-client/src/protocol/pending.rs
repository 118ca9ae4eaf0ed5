//! Pending-request correlation.
//!
//! Every request that expects a response registers here under a
//! client-generated id. Responses resolve by the echoed id when the host
//! provides one, falling back to the oldest in-flight request of the same
//! kind, which is all the `.response` suffix convention can guarantee.

use super::kinds::RequestKind;
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Client-generated correlation id attached to outgoing envelopes.
///
/// Doubles as the provisional key for optimistic entities staged in the
/// stores: one request, one staged entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub kind: RequestKind,
    /// Id of the existing entity the request concerns (delete, resume,
    /// export, update); `None` for creates and init requests.
    pub target: Option<String>,
}

/// The in-flight request map, ordered oldest first.
///
/// Entries are only removed by a matching response; there are no timeouts
/// and no cancellation, so a request the host never answers stays pending
/// indefinitely (recovery is the user re-initiating the action).
#[derive(Debug, Default)]
pub struct PendingRequests {
    entries: VecDeque<PendingRequest>,
}

impl PendingRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an in-flight request.
    pub fn register(&mut self, id: RequestId, kind: RequestKind, target: Option<String>) {
        self.entries.push_back(PendingRequest { id, kind, target });
    }

    /// Resolves and removes the pending entry for a response.
    ///
    /// The echoed id wins when present and known; otherwise the oldest
    /// entry of the same kind is taken. Returns `None` when nothing
    /// matches (e.g. a duplicate delivery of an already-resolved response).
    pub fn resolve(&mut self, echoed_id: Option<&str>, kind: RequestKind) -> Option<PendingRequest> {
        if let Some(echoed) = echoed_id {
            // The kind must agree too; a mismatched echo falls through to
            // the suffix convention instead of consuming a foreign entry.
            if let Some(index) = self
                .entries
                .iter()
                .position(|e| e.id.as_str() == echoed && e.kind == kind)
            {
                return self.entries.remove(index);
            }
        }
        let index = self.entries.iter().position(|e| e.kind == kind)?;
        self.entries.remove(index)
    }

    /// Number of in-flight requests of the given kind.
    pub fn in_flight(&self, kind: RequestKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_echoed_id() {
        let mut pending = PendingRequests::new();
        let first = RequestId::new();
        let second = RequestId::new();
        pending.register(first.clone(), RequestKind::SessionCreate, None);
        pending.register(second.clone(), RequestKind::SessionCreate, None);

        let resolved = pending
            .resolve(Some(second.as_str()), RequestKind::SessionCreate)
            .unwrap();
        assert_eq!(resolved.id, second);
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn test_resolve_falls_back_to_oldest_of_kind() {
        let mut pending = PendingRequests::new();
        let first = RequestId::new();
        let second = RequestId::new();
        pending.register(first.clone(), RequestKind::ScriptCreate, None);
        pending.register(second, RequestKind::ScriptCreate, None);

        let resolved = pending.resolve(None, RequestKind::ScriptCreate).unwrap();
        assert_eq!(resolved.id, first);
    }

    #[test]
    fn test_unknown_echoed_id_still_matches_kind() {
        // A host that invents response ids must not strand the request.
        let mut pending = PendingRequests::new();
        let id = RequestId::new();
        pending.register(id.clone(), RequestKind::SessionsInit, None);

        let resolved = pending
            .resolve(Some("not-a-known-id"), RequestKind::SessionsInit)
            .unwrap();
        assert_eq!(resolved.id, id);
    }

    #[test]
    fn test_duplicate_resolution_returns_none() {
        let mut pending = PendingRequests::new();
        pending.register(RequestId::new(), RequestKind::SessionCreate, None);

        assert!(pending.resolve(None, RequestKind::SessionCreate).is_some());
        assert!(pending.resolve(None, RequestKind::SessionCreate).is_none());
    }

    #[test]
    fn test_kind_mismatch_does_not_resolve() {
        let mut pending = PendingRequests::new();
        pending.register(RequestId::new(), RequestKind::ScriptsInit, None);

        assert!(pending.resolve(None, RequestKind::SessionsInit).is_none());
        assert_eq!(pending.len(), 1);
    }
}
