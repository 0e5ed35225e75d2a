//! Validation errors for line topology operations.
//!
//! Every failure here is a synchronous validation error signaled straight
//! back to the caller; no operation leaves the section list partially
//! mutated. The `Display` text travels verbatim to API clients, so tests
//! assert on it.

use super::StationId;

/// Validation errors raised by section construction and section-list edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// Section construction rejected (equal endpoints or non-positive distance)
    #[error("invalid section: {reason}")]
    InvalidSection { reason: &'static str },

    /// New section does not start at the line's current terminus
    #[error(
        "new section must start at the line's terminus, station {expected}, \
         but starts at station {found}"
    )]
    NotContiguous {
        expected: StationId,
        found: StationId,
    },

    /// New section's down station already appears on the line
    #[error("station {0} is already on the line")]
    DuplicateStation(StationId),

    /// Removal target is not the line's downstream terminus
    #[error("station {station} is not the line's downstream terminus")]
    NotTerminus { station: StationId },

    /// Removing the only section would leave the line without a route
    #[error("cannot remove the only section of the line")]
    SingleSection,
}
