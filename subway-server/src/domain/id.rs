//! Identifier types for catalog entities.
//!
//! Stations and lines are referenced by opaque numeric identifiers assigned
//! by their stores. The core compares stations by identity only, so the id
//! is the whole of what it sees.

use std::fmt;

/// Identifier of a station in the registry.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationId;
///
/// let id = StationId(7);
/// assert_eq!(id.to_string(), "7");
///
/// // StationId is Copy, so it's cheap to pass around
/// let id2 = id;
/// assert_eq!(id, id2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u64);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StationId {
    fn from(value: u64) -> Self {
        StationId(value)
    }
}

impl From<StationId> for u64 {
    fn from(value: StationId) -> Self {
        value.0
    }
}

/// Identifier of a line in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LineId {
    fn from(value: u64) -> Self {
        LineId(value)
    }
}

impl From<LineId> for u64 {
    fn from(value: LineId) -> Self {
        value.0
    }
}
