//! Application state for the web layer.

use crate::catalog::Catalog;

/// Shared application state.
///
/// The catalog is internally shared, so cloning the state per request is
/// cheap.
#[derive(Clone)]
pub struct AppState {
    /// The line catalog
    pub catalog: Catalog,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}
