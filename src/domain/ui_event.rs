//! Input event model for the login page.
//!
//! Page adapters translate raw platform events (clicks, key presses, system
//! color-scheme changes) into [`UiEvent`] values and push them through an
//! async channel. [`crate::application::ui_worker::run_ui_worker`] consumes
//! the channel and dispatches to the controller.

use crate::domain::field::Field;

/// A keyboard key, reduced to what the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Character(char),
}

/// A key press with its modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    /// A key press with no modifiers held.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// The theme toggle shortcut: Ctrl (or Cmd) + Shift + T.
    ///
    /// Shift is held, so the character arrives uppercase.
    pub fn is_theme_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && self.shift && self.key == Key::Character('T')
    }
}

/// Events the controller consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Theme toggle control activated (click, or Enter/Space while focused).
    ToggleActivated,
    /// A credential field lost focus; triggers inline validation.
    FieldBlurred(Field),
    /// The form was submitted.
    SubmitRequested,
    /// A document-level key press.
    KeyPressed(KeyChord),
    /// The platform color-scheme preference changed.
    SystemPreferenceChanged(bool),
}

/// Whether the platform's default handling of the originating event
/// must be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// Let the platform proceed with its default handling.
    Continue,
    /// Cancel the default handling (the controller consumed the event).
    PreventDefault,
}

impl EventDisposition {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_shortcut_with_ctrl() {
        let chord = KeyChord {
            key: Key::Character('T'),
            ctrl: true,
            meta: false,
            shift: true,
        };
        assert!(chord.is_theme_shortcut());
    }

    #[test]
    fn test_theme_shortcut_with_meta() {
        let chord = KeyChord {
            key: Key::Character('T'),
            ctrl: false,
            meta: true,
            shift: true,
        };
        assert!(chord.is_theme_shortcut());
    }

    #[test]
    fn test_theme_shortcut_requires_shift() {
        let chord = KeyChord {
            key: Key::Character('T'),
            ctrl: true,
            meta: false,
            shift: false,
        };
        assert!(!chord.is_theme_shortcut());
    }

    #[test]
    fn test_theme_shortcut_requires_a_modifier() {
        let chord = KeyChord {
            key: Key::Character('T'),
            ctrl: false,
            meta: false,
            shift: true,
        };
        assert!(!chord.is_theme_shortcut());
    }

    #[test]
    fn test_theme_shortcut_is_uppercase_t_only() {
        // Shift is held, so a lowercase 't' never reaches the handler.
        let chord = KeyChord {
            key: Key::Character('t'),
            ctrl: true,
            meta: false,
            shift: true,
        };
        assert!(!chord.is_theme_shortcut());

        let escape = KeyChord {
            key: Key::Escape,
            ctrl: true,
            meta: false,
            shift: true,
        };
        assert!(!escape.is_theme_shortcut());
    }

    #[test]
    fn test_plain_chord_has_no_modifiers() {
        let chord = KeyChord::plain(Key::Escape);
        assert!(!chord.ctrl && !chord.meta && !chord.shift);
        assert!(!chord.is_theme_shortcut());
    }
}
