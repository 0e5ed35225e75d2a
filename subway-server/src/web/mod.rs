//! Web layer for the subway line catalog.
//!
//! Provides the REST endpoints for managing stations, lines, and the
//! sections along each line.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
