//! The ordered section chain owned by a line.
//!
//! Order encodes physical traversal order: each section's down station is
//! the next section's up station. Only tail appends and tail removals are
//! supported in this catalog, so chain order and insertion order coincide
//! and no reordering logic exists.

use super::{LineId, Section, SectionError, StationId};

/// Ordered, invariant-checked chain of sections for one line.
///
/// After every mutation the chain is a single unbroken path (adjacent
/// sections share a station) and no station appears twice along the line.
/// A chain holds at least one section from construction onwards: removal
/// below one section is refused, so the line always connects at least two
/// stations.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{LineId, Section, Sections, StationId};
///
/// let line = LineId(1);
/// let first = Section::new(line, StationId(1), StationId(2), 10).unwrap();
/// let mut sections = Sections::new(first);
///
/// sections.append(line, StationId(2), StationId(3), 7).unwrap();
/// assert_eq!(
///     sections.station_path(),
///     vec![StationId(1), StationId(2), StationId(3)]
/// );
///
/// // Only the downstream terminus may be removed
/// assert!(sections.remove_terminal(StationId(2)).is_err());
/// assert!(sections.remove_terminal(StationId(3)).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Creates the chain from a line's first section.
    ///
    /// A single section trivially forms a valid chain, so no ordering
    /// checks apply here.
    pub fn new(first: Section) -> Self {
        Self {
            sections: vec![first],
        }
    }

    /// Appends a new section at the downstream end of the chain.
    ///
    /// The section is constructed first (rejecting equal endpoints and
    /// non-positive distances), then checked against the chain: its up
    /// station must equal the current terminus, and its down station must
    /// not already be anywhere on the line. Only the new tail link is
    /// checked; the rest of the chain is untouched, so the invariants
    /// hold by construction.
    ///
    /// Returns the created section. On failure the chain is unchanged.
    pub fn append(
        &mut self,
        line: LineId,
        up: StationId,
        down: StationId,
        distance: i64,
    ) -> Result<Section, SectionError> {
        let section = Section::new(line, up, down, distance)?;

        let terminus = self.terminus();
        if up != terminus {
            return Err(SectionError::NotContiguous {
                expected: terminus,
                found: up,
            });
        }

        if self.contains_station(down) {
            return Err(SectionError::DuplicateStation(down));
        }

        self.sections.push(section);
        Ok(section)
    }

    /// Removes the section ending at the line's downstream terminus.
    ///
    /// `station` must be the current terminus: interior and upstream
    /// stations are refused even when removing them would be topologically
    /// repairable, since no re-linking is supported. A chain with a
    /// single section refuses removal outright so the line never loses its
    /// route. The terminus check runs first: asking to remove a
    /// non-terminus station of a minimal line reports the terminus error.
    ///
    /// Returns the removed section. On failure the chain is unchanged.
    pub fn remove_terminal(&mut self, station: StationId) -> Result<Section, SectionError> {
        if station != self.terminus() {
            return Err(SectionError::NotTerminus { station });
        }
        if self.sections.len() == 1 {
            return Err(SectionError::SingleSection);
        }

        // Safe: len >= 2 checked above
        Ok(self.sections.pop().unwrap())
    }

    /// The station at the downstream end of the last section.
    pub fn terminus(&self) -> StationId {
        // Safe: a chain holds at least one section from construction
        self.sections.last().unwrap().down()
    }

    /// Ordered stations the line visits, upstream terminus first.
    ///
    /// The path always has one more entry than the chain has sections.
    pub fn station_path(&self) -> Vec<StationId> {
        let mut path = Vec::with_capacity(self.sections.len() + 1);
        if let Some(first) = self.sections.first() {
            path.push(first.up());
        }
        path.extend(self.sections.iter().map(Section::down));
        path
    }

    /// True if `station` appears anywhere on the line's path.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections
            .iter()
            .any(|s| s.up() == station || s.down() == station)
    }

    /// Number of sections in the chain.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True if the chain holds no sections.
    ///
    /// Construction and the removal floor keep the chain non-empty, so
    /// this exists for the container idiom rather than any reachable
    /// state.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in traversal order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
