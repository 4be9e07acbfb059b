//! File-backed theme store.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::ports::ThemeStore;
use crate::domain::theme::Theme;
use crate::error::{StoreError, StoreResult};

/// One persisted preference.
#[derive(Debug, Serialize, Deserialize)]
struct PreferenceEntry {
    theme: String,
    updated_at: DateTime<Utc>,
}

type PreferenceFile = HashMap<String, PreferenceEntry>;

/// Theme store backed by a single JSON preference file.
///
/// The file maps storage keys to their persisted theme, so the admin and
/// user page families can share one file while keeping independent
/// preferences. A missing file reads as empty; an unparsable file or value
/// surfaces [`StoreError::Corrupt`] to the controller, which degrades
/// fail-open.
///
/// Writes are whole-file read-modify-write. There is no cross-process
/// locking; the component assumes a single writer, the same way a page
/// assumes a single tab.
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Creates a store over the given preference file path.
    ///
    /// The file and its parent directory are created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_file(&self) -> StoreResult<PreferenceFile> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|error| StoreError::Corrupt(error.to_string())),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(error) => Err(StoreError::Read(error.to_string())),
        }
    }

    async fn write_file(&self, preferences: &PreferenceFile) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| StoreError::Write(error.to_string()))?;
        }

        let content = serde_json::to_string_pretty(preferences)
            .map_err(|error| StoreError::Write(error.to_string()))?;

        tokio::fs::write(&self.path, content)
            .await
            .map_err(|error| StoreError::Write(error.to_string()))
    }
}

#[async_trait]
impl ThemeStore for FileThemeStore {
    async fn load(&self, key: &str) -> StoreResult<Option<Theme>> {
        let preferences = self.read_file().await?;

        match preferences.get(key) {
            None => Ok(None),
            Some(entry) => match Theme::parse(&entry.theme) {
                Some(theme) => Ok(Some(theme)),
                None => Err(StoreError::Corrupt(entry.theme.clone())),
            },
        }
    }

    async fn save(&self, key: &str, theme: Theme) -> StoreResult<()> {
        // An unreadable or corrupt file must not block persisting a fresh
        // preference; start over from an empty map.
        let mut preferences = match self.read_file().await {
            Ok(preferences) => preferences,
            Err(error) => {
                warn!(path = %self.path.display(), error = %error,
                    "preference file unreadable; rewriting it");
                HashMap::new()
            }
        };

        preferences.insert(
            key.to_string(),
            PreferenceEntry {
                theme: theme.as_str().to_string(),
                updated_at: Utc::now(),
            },
        );

        self.write_file(&preferences).await
    }
}
