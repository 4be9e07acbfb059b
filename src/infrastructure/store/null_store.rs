//! No-op store implementation for disabled persistence.

use crate::domain::ports::ThemeStore;
use crate::domain::theme::Theme;
use crate::error::StoreResult;
use async_trait::async_trait;
use tracing::debug;

/// A theme store that persists nothing.
///
/// Reads always report no preference and writes succeed without storing,
/// so the controller follows the platform preference for the whole page
/// lifetime and explicit toggles last until the next load.
///
/// # Use cases
///
/// - Environments where the preference store is unavailable (private
///   browsing, denied storage access)
/// - Testing scenarios where persistence should be bypassed
pub struct NullThemeStore;

impl NullThemeStore {
    /// Creates a new NullThemeStore instance.
    pub fn new() -> Self {
        debug!("Using NullThemeStore (theme persistence disabled)");
        Self
    }
}

impl Default for NullThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ThemeStore for NullThemeStore {
    async fn load(&self, _key: &str) -> StoreResult<Option<Theme>> {
        Ok(None)
    }

    async fn save(&self, _key: &str, _theme: Theme) -> StoreResult<()> {
        Ok(())
    }
}
