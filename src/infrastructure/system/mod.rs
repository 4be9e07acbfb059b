//! Platform color-scheme preference sources.
//!
//! Provides the [`crate::domain::ports::SystemPreferences`] implementations:
//! - [`FixedSystemPreferences`] - fixed (but togglable) answer
//! - [`EnvSystemPreferences`] - environment variable, queried at call time

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::SystemPreferences;

/// A preference source with a fixed answer.
///
/// The answer can be flipped, which models the platform preference changing
/// underneath the page; the change *event* still has to be delivered as a
/// [`crate::domain::ui_event::UiEvent::SystemPreferenceChanged`].
pub struct FixedSystemPreferences {
    dark: AtomicBool,
}

impl FixedSystemPreferences {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            dark: AtomicBool::new(prefers_dark),
        }
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.dark.store(prefers_dark, Ordering::Relaxed);
    }
}

#[async_trait]
impl SystemPreferences for FixedSystemPreferences {
    async fn prefers_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }
}

/// A preference source reading an environment variable at query time.
///
/// Truthy values (`1`, `true`, `dark`, case-insensitive) report dark; any
/// other value, or an unset variable, reports light. Used by the demo CLI.
pub struct EnvSystemPreferences {
    variable: String,
}

impl EnvSystemPreferences {
    pub fn new(variable: impl Into<String>) -> Self {
        let variable = variable.into();
        debug!(%variable, "system preference read from environment");
        Self { variable }
    }
}

#[async_trait]
impl SystemPreferences for EnvSystemPreferences {
    async fn prefers_dark(&self) -> bool {
        std::env::var(&self.variable)
            .map(|value| {
                value.eq_ignore_ascii_case("1")
                    || value.eq_ignore_ascii_case("true")
                    || value.eq_ignore_ascii_case("dark")
            })
            .unwrap_or(false)
    }
}
