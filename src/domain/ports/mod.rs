//! Port (trait) definitions for the domain layer.
//!
//! These traits abstract every environment the controller touches, following
//! the ports-and-adapters pattern. Concrete adapters live in
//! `crate::infrastructure`.
//!
//! # Architecture
//!
//! - Traits define the contract for environment access
//! - Implementations live in [`crate::infrastructure`]
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available ports
//!
//! - [`ThemeStore`] - persisted theme preference (key/value, no expiry)
//! - [`LoginSurface`] - page presentation: theme marker, fields, loading
//! - [`SystemPreferences`] - platform color-scheme preference query

pub mod surface;
pub mod system;
pub mod theme_store;

pub use surface::LoginSurface;
pub use system::SystemPreferences;
pub use theme_store::ThemeStore;

#[cfg(test)]
pub use surface::MockLoginSurface;
#[cfg(test)]
pub use system::MockSystemPreferences;
#[cfg(test)]
pub use theme_store::MockThemeStore;
