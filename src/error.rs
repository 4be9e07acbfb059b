//! Error types for the preference store.
//!
//! The controller itself has no failure outcomes: absent page elements
//! degrade each dependent behavior to a no-op, and an invalid field is an
//! expected input state reflected into accessibility attributes, not an
//! error. The only fallible environment is the persisted preference store,
//! and even there the controller logs and degrades instead of propagating.

use thiserror::Error;

/// Errors a [`crate::domain::ports::ThemeStore`] implementation can report.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be read.
    #[error("preference store read failed: {0}")]
    Read(String),

    /// The backing store could not be written.
    #[error("preference store write failed: {0}")]
    Write(String),

    /// A stored value exists but is not a recognizable theme.
    ///
    /// Readers must not guess: initialization falls back to the system
    /// preference, while the system-preference mirror is skipped so a
    /// possibly-present explicit choice is never clobbered.
    #[error("stored preference is not a theme: {0:?}")]
    Corrupt(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
