//! Station registration and lookup.
//!
//! Stations live in their own registry, independent of any line: a
//! station is created before it carries traffic, and lines reference
//! stations by id.

mod registry;

pub use registry::{Station, StationRegistry};
