//! Message kind strings.

use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Suffix appended to a request kind to form its response kind.
pub const RESPONSE_SUFFIX: &str = ".response";

/// Host-initiated theme push; the only inbound kind with no request pair.
pub const THEME_CHANGED: &str = "theme-changed";

/// Every request kind the client can send.
///
/// The serialized form is the exact wire string; responses arrive under
/// `<kind>.response` except for the fire-and-forget notifications
/// ([`RequestKind::UiReady`] and [`RequestKind::SetTheme`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum RequestKind {
    #[strum(serialize = "codestate.sessions.init")]
    SessionsInit,
    #[strum(serialize = "codestate.scripts.init")]
    ScriptsInit,
    #[strum(serialize = "codestate.tc.init")]
    TerminalCollectionsInit,
    #[strum(serialize = "codestate.config.init")]
    ConfigInit,
    #[strum(serialize = "codestate.sessions.create.init")]
    SessionCreateInit,
    #[strum(serialize = "codestate.session.create")]
    SessionCreate,
    #[strum(serialize = "codestate.session.update")]
    SessionUpdate,
    #[strum(serialize = "codestate.session.delete")]
    SessionDelete,
    #[strum(serialize = "codestate.session.resume")]
    SessionResume,
    #[strum(serialize = "codestate.session.export")]
    SessionExport,
    #[strum(serialize = "codestate.script.create")]
    ScriptCreate,
    #[strum(serialize = "codestate.script.update")]
    ScriptUpdate,
    #[strum(serialize = "codestate.script.delete")]
    ScriptDelete,
    #[strum(serialize = "codestate.script.resume")]
    ScriptResume,
    #[strum(serialize = "codestate.terminal-collection.create")]
    TerminalCollectionCreate,
    #[strum(serialize = "codestate.terminal-collection.update")]
    TerminalCollectionUpdate,
    #[strum(serialize = "codestate.terminal-collection.delete")]
    TerminalCollectionDelete,
    #[strum(serialize = "codestate.terminal-collection.resume")]
    TerminalCollectionResume,
    #[strum(serialize = "codestate.config.update")]
    ConfigUpdate,
    #[strum(serialize = "codestate.ui.ready")]
    UiReady,
    #[strum(serialize = "set-theme")]
    SetTheme,
}

impl RequestKind {
    /// The wire string of the response to this request.
    pub fn response_kind(&self) -> String {
        format!("{self}{RESPONSE_SUFFIX}")
    }

    /// Parses an inbound response kind back to the request it answers.
    ///
    /// Returns `None` for anything that is not `<known kind>.response`;
    /// callers log and drop those.
    pub fn from_response_kind(kind: &str) -> Option<RequestKind> {
        let request = kind.strip_suffix(RESPONSE_SUFFIX)?;
        RequestKind::from_str(request).ok()
    }

    /// Whether the host answers this kind at all.
    ///
    /// `ui.ready` and `set-theme` are notifications; registering them as
    /// pending would leave permanent entries in the correlation map.
    pub fn expects_response(&self) -> bool {
        !matches!(self, RequestKind::UiReady | RequestKind::SetTheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_strings() {
        assert_eq!(
            RequestKind::SessionCreate.to_string(),
            "codestate.session.create"
        );
        assert_eq!(
            RequestKind::TerminalCollectionsInit.to_string(),
            "codestate.tc.init"
        );
        assert_eq!(RequestKind::SetTheme.to_string(), "set-theme");
    }

    #[test]
    fn test_response_kind_round_trip() {
        for kind in RequestKind::iter() {
            assert_eq!(
                RequestKind::from_response_kind(&kind.response_kind()),
                Some(kind)
            );
        }
    }

    #[test]
    fn test_unknown_kinds_are_rejected() {
        assert_eq!(RequestKind::from_response_kind("codestate.bogus.response"), None);
        assert_eq!(RequestKind::from_response_kind("codestate.session.create"), None);
        assert_eq!(RequestKind::from_response_kind(THEME_CHANGED), None);
    }

    #[test]
    fn test_notifications_expect_no_response() {
        assert!(!RequestKind::UiReady.expects_response());
        assert!(!RequestKind::SetTheme.expects_response());
        assert!(RequestKind::SessionsInit.expects_response());
    }
}
