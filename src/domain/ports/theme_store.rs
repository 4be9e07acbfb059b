//! Port for persisted theme preferences.

use crate::domain::theme::Theme;
use crate::error::StoreError;
use async_trait::async_trait;

/// Key/value store for the explicit theme preference.
///
/// One entry per login page family: the configured storage key (e.g.
/// `admin-theme` vs `theme`) keeps admin and user pages independent. The
/// value has no expiry.
///
/// Implementations are expected to be fail-open: the controller logs store
/// errors and degrades (falls back to the system preference on
/// initialization, skips the system-preference mirror on reads it cannot
/// trust) rather than surfacing a failure to the page.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::FileThemeStore`] - JSON preference file
/// - [`crate::infrastructure::store::MemoryThemeStore`] - in-process map
/// - [`crate::infrastructure::store::NullThemeStore`] - persistence disabled
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// Reads the persisted theme for a storage key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(theme))` when an explicit preference exists
    /// - `Ok(None)` when no preference has been persisted
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the backing store cannot be read
    /// and [`StoreError::Corrupt`] when the stored value is not a theme.
    async fn load(&self, key: &str) -> Result<Option<Theme>, StoreError>;

    /// Persists the theme for a storage key, replacing any previous value.
    ///
    /// Called on every theme application, including the initial resolution,
    /// so the stored value always reflects the active theme after first
    /// render.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the value cannot be persisted.
    /// Callers log and continue; presentation state is already applied.
    async fn save(&self, key: &str, theme: Theme) -> Result<(), StoreError>;
}
