//! # login-manager
//!
//! A reusable, headless login-page controller: persisted light/dark theme
//! toggling (explicit preference wins over the platform preference), inline
//! field validation against each field's own native constraints, and a
//! loading state around form submission.
//!
//! ## Architecture
//!
//! This crate follows a ports-and-adapters layout with clear layer
//! separation:
//!
//! - **Domain layer** ([`domain`]) - theme/field/event types and the port
//!   traits abstracting every environment the controller touches
//! - **Application layer** ([`application`]) - the [`LoginManager`]
//!   controller and the event-dispatch worker
//! - **Infrastructure layer** ([`infrastructure`]) - preference stores, the
//!   simulated page surface, and platform preference sources
//!
//! ## Behavior highlights
//!
//! - Every page element is optional; a missing element disables the
//!   behaviors depending on it without ever raising an error
//! - Every theme application re-persists the preference, so the store
//!   always reflects the active theme after first render
//! - The controller reads validity verdicts, it never defines rules; it
//!   removes the visual error class but never adds it
//! - Deferred effects (toggle feedback release, simulated round trip) use
//!   the runtime timer, so tests drive them with virtual time
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use login_manager::prelude::*;
//!
//! # async fn run() {
//! let page = Arc::new(InMemoryPage::full("Sign in"));
//! let store = Arc::new(FileThemeStore::new("login-prefs.json"));
//! let system = Arc::new(FixedSystemPreferences::new(false));
//!
//! let manager = LoginManager::new(LoginConfig::admin_login(), store, page, system);
//! manager.init().await;
//! # }
//! ```
//!
//! ## Shipped configurations
//!
//! [`LoginConfig::admin_login`] and [`LoginConfig::user_login`] reproduce
//! the two page instantiations: the admin page submits for real with
//! error-class handling and auto-focus; the user page intercepts submission
//! and simulates a 2 s round trip.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{LoginManager, SubmitOutcome};
pub use config::LoginConfig;
pub use error::StoreError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{LoginManager, SubmitOutcome, run_ui_worker};
    pub use crate::config::LoginConfig;
    pub use crate::domain::ports::{LoginSurface, SystemPreferences, ThemeStore};
    pub use crate::domain::{EventDisposition, Field, Key, KeyChord, Theme, UiEvent};
    pub use crate::error::StoreError;
    pub use crate::infrastructure::store::{FileThemeStore, MemoryThemeStore, NullThemeStore};
    pub use crate::infrastructure::surface::{FieldSpec, InMemoryPage};
    pub use crate::infrastructure::system::{EnvSystemPreferences, FixedSystemPreferences};
}
