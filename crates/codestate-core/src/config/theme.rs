//! UI theme.

use serde::{Deserialize, Serialize};

/// The webview color theme.
///
/// `MatchIde` follows whatever theme the IDE reports; the concrete colors
/// are a rendering concern outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    MatchIde,
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The wire string used in `set-theme` / `theme-changed` payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::MatchIde => "match-ide",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a wire string, falling back to the default for unknown values.
    pub fn from_wire(value: &str) -> Theme {
        match value {
            "match-ide" => Theme::MatchIde,
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip() {
        for theme in [Theme::MatchIde, Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_wire(theme.as_str()), theme);
        }
    }

    #[test]
    fn test_unknown_value_falls_back_to_dark() {
        assert_eq!(Theme::from_wire("sepia"), Theme::Dark);
    }

    #[test]
    fn test_serde_matches_wire_strings() {
        assert_eq!(serde_json::to_string(&Theme::MatchIde).unwrap(), "\"match-ide\"");
    }
}
