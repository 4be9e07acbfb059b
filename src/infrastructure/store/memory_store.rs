//! In-process theme store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::ports::ThemeStore;
use crate::domain::theme::Theme;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;

/// Theme store backed by an in-process map.
///
/// Values are kept as raw strings so tests can seed arbitrary content and
/// exercise the corrupt-value path the same way a real external store can
/// hand back something no writer of ours produced.
#[derive(Default)]
pub struct MemoryThemeStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw string value, bypassing theme parsing.
    pub fn seed_raw(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value.to_string());
    }

    /// Raw stored string for a key, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("memory store lock poisoned")
            .get(key)
            .cloned()
    }

    /// Removes the entry for a key.
    pub fn clear(&self, key: &str) {
        self.values
            .lock()
            .expect("memory store lock poisoned")
            .remove(key);
    }
}

#[async_trait]
impl ThemeStore for MemoryThemeStore {
    async fn load(&self, key: &str) -> StoreResult<Option<Theme>> {
        let values = self.values.lock().expect("memory store lock poisoned");

        match values.get(key) {
            None => Ok(None),
            Some(raw) => match Theme::parse(raw) {
                Some(theme) => Ok(Some(theme)),
                None => Err(StoreError::Corrupt(raw.clone())),
            },
        }
    }

    async fn save(&self, key: &str, theme: Theme) -> StoreResult<()> {
        self.values
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), theme.as_str().to_string());
        Ok(())
    }
}
