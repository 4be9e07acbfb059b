//! Theme preference persistence.
//!
//! Provides the [`crate::domain::ports::ThemeStore`] implementations:
//! - [`FileThemeStore`] - JSON preference file (the localStorage analog)
//! - [`MemoryThemeStore`] - in-process map for tests and short-lived runs
//! - [`NullThemeStore`] - no-op implementation for disabled persistence

mod file_store;
mod memory_store;
mod null_store;

pub use file_store::FileThemeStore;
pub use memory_store::MemoryThemeStore;
pub use null_store::NullThemeStore;
