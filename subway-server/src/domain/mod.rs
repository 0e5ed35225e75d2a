//! Domain types for the subway line catalog.
//!
//! This module contains the core domain model: lines, their ordered
//! section chains, and the station identities they connect. All types
//! enforce their invariants at construction time, so code that receives
//! these types can trust their validity.

mod error;
mod id;
mod line;
mod section;
mod sections;

pub use error::SectionError;
pub use id::{LineId, StationId};
pub use line::Line;
pub use section::Section;
pub use sections::Sections;
