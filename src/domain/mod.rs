//! Domain layer: core types and port definitions.
//!
//! # Architecture
//!
//! - [`theme`] - the light/dark theme entity
//! - [`field`] - credential field identity
//! - [`ui_event`] - input event model consumed by the controller
//! - [`ports`] - environment access trait definitions
//!
//! # Design principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation
//! - Port traits define contracts implemented by the infrastructure layer
//! - Control flow is encapsulated in the application layer (see
//!   [`crate::application`])
//!
//! # Event flow
//!
//! 1. A page adapter observes a raw platform event
//! 2. A [`ui_event::UiEvent`] is sent through an async channel
//! 3. [`crate::application::ui_worker::run_ui_worker`] dispatches it to
//!    [`crate::application::LoginManager`]
//! 4. The controller acts through the [`ports`]

pub mod field;
pub mod ports;
pub mod theme;
pub mod ui_event;

pub use field::Field;
pub use theme::Theme;
pub use ui_event::{EventDisposition, Key, KeyChord, UiEvent};
