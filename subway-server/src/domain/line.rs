//! Subway lines: named, colored routes over a section chain.

use chrono::{DateTime, Utc};

use super::{LineId, Section, SectionError, Sections, StationId};

/// A subway line: identity, display attributes, and its route.
///
/// The route is a [`Sections`] chain, created together with the line and
/// never empty. All route edits go through the line so the audit
/// timestamps stay honest.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Line, LineId, StationId};
///
/// let mut line = Line::new(
///     LineId(1),
///     "Victoria".to_string(),
///     "bg-blue-600".to_string(),
///     StationId(1),
///     StationId(2),
///     10,
/// )
/// .unwrap();
///
/// line.append_section(StationId(2), StationId(3), 7).unwrap();
/// assert_eq!(
///     line.station_path(),
///     vec![StationId(1), StationId(2), StationId(3)]
/// );
/// assert!(line.contains_station(StationId(2)));
/// ```
#[derive(Debug, Clone)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    sections: Sections,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Line {
    /// Creates a line with its first section.
    ///
    /// The first section is validated like any other; a line cannot exist
    /// without a route.
    pub fn new(
        id: LineId,
        name: String,
        color: String,
        up: StationId,
        down: StationId,
        distance: i64,
    ) -> Result<Self, SectionError> {
        let first = Section::new(id, up, down, distance)?;
        let now = Utc::now();
        Ok(Self {
            id,
            name,
            color,
            sections: Sections::new(first),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the display attributes, leaving the route untouched.
    pub fn update_info(&mut self, name: String, color: String) {
        self.name = name;
        self.color = color;
        self.updated_at = Utc::now();
    }

    /// Appends a section at the downstream end of the route.
    ///
    /// Delegates the chain checks to [`Sections::append`]; on failure the
    /// line is unchanged, timestamps included.
    pub fn append_section(
        &mut self,
        up: StationId,
        down: StationId,
        distance: i64,
    ) -> Result<Section, SectionError> {
        let section = self.sections.append(self.id, up, down, distance)?;
        self.updated_at = Utc::now();
        Ok(section)
    }

    /// Removes the section ending at the downstream terminus.
    pub fn remove_terminal(&mut self, station: StationId) -> Result<Section, SectionError> {
        let section = self.sections.remove_terminal(station)?;
        self.updated_at = Utc::now();
        Ok(section)
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// The route as an ordered section chain.
    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Ordered stations the line visits, upstream terminus first.
    pub fn station_path(&self) -> Vec<StationId> {
        self.sections.station_path()
    }

    /// True if `station` is anywhere on the line's route.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections.contains_station(station)
    }

    /// The line's downstream terminus.
    pub fn terminus(&self) -> StationId {
        self.sections.terminus()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
