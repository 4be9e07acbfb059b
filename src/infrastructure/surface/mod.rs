//! Presentation surface adapters.
//!
//! Provides the [`crate::domain::ports::LoginSurface`] implementation used
//! by the integration tests and the demo CLI:
//! - [`InMemoryPage`] - simulated page with optional elements and
//!   per-element native constraints ([`FieldSpec`])

mod page;

pub use page::{FieldSpec, InMemoryPage, InMemoryPageBuilder};
