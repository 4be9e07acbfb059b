//! Port for the platform color-scheme preference.

use async_trait::async_trait;

/// Platform color-scheme preference source.
///
/// Queried once during theme initialization when no explicit preference is
/// persisted. Live changes arrive as
/// [`crate::domain::ui_event::UiEvent::SystemPreferenceChanged`] events, so
/// this port stays a plain query.
///
/// # Implementations
///
/// - [`crate::infrastructure::system::FixedSystemPreferences`] - fixed answer
/// - [`crate::infrastructure::system::EnvSystemPreferences`] - environment
///   variable, for the demo CLI
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SystemPreferences: Send + Sync {
    /// True when the platform reports a dark color-scheme preference.
    async fn prefers_dark(&self) -> bool;
}
