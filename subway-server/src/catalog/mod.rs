//! The line catalog: stores and the service that coordinates them.
//!
//! Topology rules live in [`crate::domain`]; this module adds the rules
//! that need more than one aggregate in view, and the in-memory stores
//! whose locks serialize edits.

mod service;
mod store;

pub use service::{Catalog, CatalogError, LineDetail};
pub use store::LineStore;
