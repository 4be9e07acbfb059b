//! Infrastructure layer: concrete adapters for the domain ports.
//!
//! # Modules
//!
//! - [`store`] - theme preference persistence (file, memory, no-op)
//! - [`surface`] - page presentation adapters (simulated page)
//! - [`system`] - platform color-scheme preference sources

pub mod store;
pub mod surface;
pub mod system;
