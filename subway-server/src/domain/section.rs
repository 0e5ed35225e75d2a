//! Section value type.

use super::{LineId, SectionError, StationId};

/// One directed, distance-weighted edge between two stations on a line.
///
/// A section is created once, when it is appended to a line, and never
/// mutated afterwards. Its endpoints must differ and its distance must be
/// positive; both are guaranteed by construction.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{LineId, Section, StationId};
///
/// let section = Section::new(LineId(1), StationId(1), StationId(2), 10).unwrap();
/// assert_eq!(section.up(), StationId(1));
/// assert_eq!(section.down(), StationId(2));
/// assert_eq!(section.distance(), 10);
///
/// // Equal endpoints are rejected
/// assert!(Section::new(LineId(1), StationId(1), StationId(1), 10).is_err());
///
/// // Non-positive distances are rejected
/// assert!(Section::new(LineId(1), StationId(1), StationId(2), 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    line: LineId,
    up: StationId,
    down: StationId,
    distance: i64,
}

impl Section {
    /// Create a section between two stations.
    ///
    /// Fails if the endpoints are the same station or the distance is not
    /// strictly positive.
    pub fn new(
        line: LineId,
        up: StationId,
        down: StationId,
        distance: i64,
    ) -> Result<Self, SectionError> {
        if up == down {
            return Err(SectionError::InvalidSection {
                reason: "up and down station must differ",
            });
        }
        if distance <= 0 {
            return Err(SectionError::InvalidSection {
                reason: "distance must be positive",
            });
        }

        Ok(Self {
            line,
            up,
            down,
            distance,
        })
    }

    /// Identifier of the owning line.
    pub fn line(&self) -> LineId {
        self.line
    }

    /// The upstream endpoint.
    pub fn up(&self) -> StationId {
        self.up
    }

    /// The downstream endpoint.
    pub fn down(&self) -> StationId {
        self.down
    }

    /// Length of the section.
    pub fn distance(&self) -> i64 {
        self.distance
    }
}
