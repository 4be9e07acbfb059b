//! Theme entity: the binary light/dark visual mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual theme of a login page.
///
/// Persisted as the lowercase strings `"light"` / `"dark"` under the
/// configured storage key. An explicit persisted value always takes
/// precedence over the platform preference on initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Returns the stored string form of the theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored string form.
    ///
    /// Returns `None` for anything other than `"light"` or `"dark"`;
    /// callers treat unrecognized values as corrupt storage.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the other theme.
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Returns the right theme for a platform color-scheme preference.
    pub fn from_system_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Glyph shown on the theme icon while this theme is active.
    ///
    /// The icon advertises the *action*, not the state: a sun while dark is
    /// active, a moon while light is active.
    pub fn icon_glyph(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Accessible label for the toggle control while this theme is active.
    ///
    /// Describes the opposite theme, i.e. what activating the control does.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Toggle to dark theme",
            Self::Dark => "Toggle to light theme",
        }
    }

    /// Tooltip title for the toggle control while this theme is active.
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("blue"), None);
    }

    #[test]
    fn test_opposite_is_involutive() {
        assert_eq!(Theme::Light.opposite(), Theme::Dark);
        assert_eq!(Theme::Dark.opposite().opposite(), Theme::Dark);
    }

    #[test]
    fn test_from_system_preference() {
        assert_eq!(Theme::from_system_preference(true), Theme::Dark);
        assert_eq!(Theme::from_system_preference(false), Theme::Light);
    }

    #[test]
    fn test_icon_advertises_the_action() {
        // Sun while dark is active, moon while light is active.
        assert_eq!(Theme::Dark.icon_glyph(), "☀️");
        assert_eq!(Theme::Light.icon_glyph(), "🌙");
    }

    #[test]
    fn test_toggle_label_describes_opposite_theme() {
        assert!(Theme::Dark.toggle_label().contains("light"));
        assert!(Theme::Light.toggle_label().contains("dark"));
        assert!(Theme::Dark.toggle_title().contains("light"));
        assert!(Theme::Light.toggle_title().contains("dark"));
    }

    #[test]
    fn test_serde_uses_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
