//! Line catalog orchestration.
//!
//! The catalog ties the line store and the station registry together: it
//! checks cross-aggregate rules (name uniqueness, stations must be
//! registered, a station on a line cannot be deleted) and hands the
//! topology rules to the domain types.

use tracing::debug;

use crate::domain::{Line, LineId, SectionError, StationId};
use crate::stations::{Station, StationRegistry};

use super::store::LineStore;

/// Errors from catalog operations.
///
/// Core topology failures pass through as [`CatalogError::Section`] with
/// their message intact; the other kinds are cross-aggregate rules only
/// the catalog can check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No line has this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// No station has this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// Another line already carries this name
    #[error("a line named {0:?} already exists")]
    DuplicateName(String),

    /// The station still appears on a line's path
    #[error("station {station} is still served by line {line}")]
    StationInUse { station: StationId, line: LineId },

    /// A topology rule rejected the edit
    #[error(transparent)]
    Section(#[from] SectionError),
}

/// A line together with the resolved stations along its path.
#[derive(Debug, Clone)]
pub struct LineDetail {
    pub line: Line,
    /// Stations in path order. A path id missing from the registry is
    /// skipped rather than failing the read; deletion is guarded, so this
    /// only covers out-of-band removal.
    pub stations: Vec<Station>,
}

/// The line catalog service.
#[derive(Clone)]
pub struct Catalog {
    lines: LineStore,
    stations: StationRegistry,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            lines: LineStore::new(),
            stations: StationRegistry::new(),
        }
    }

    /// Register a station.
    pub async fn create_station(&self, name: String) -> Station {
        self.stations.add(name).await
    }

    /// All registered stations, ordered by id.
    pub async fn stations(&self) -> Vec<Station> {
        self.stations.all().await
    }

    /// Delete a station, provided no line still runs through it.
    pub async fn delete_station(&self, id: StationId) -> Result<(), CatalogError> {
        if self.stations.get(id).await.is_none() {
            return Err(CatalogError::StationNotFound(id));
        }

        let lines = self.lines.all().await;
        if let Some(line) = lines.iter().find(|line| line.contains_station(id)) {
            return Err(CatalogError::StationInUse {
                station: id,
                line: line.id(),
            });
        }

        self.stations.remove(id).await;
        debug!(station = %id, "station deleted");
        Ok(())
    }

    /// Create a line with its first section.
    ///
    /// The name must be unused and both endpoints registered before the
    /// domain validates the section itself. The store re-checks the name
    /// under its write guard, so two concurrent creates cannot both claim
    /// it.
    pub async fn create_line(
        &self,
        name: String,
        color: String,
        up: StationId,
        down: StationId,
        distance: i64,
    ) -> Result<LineDetail, CatalogError> {
        if self.lines.name_exists(&name).await {
            return Err(CatalogError::DuplicateName(name));
        }
        self.ensure_station(up).await?;
        self.ensure_station(down).await?;

        let line = Line::new(self.lines.next_id(), name, color, up, down, distance)?;
        if !self.lines.insert_if_name_free(line.clone()).await {
            return Err(CatalogError::DuplicateName(line.name().to_string()));
        }
        debug!(line = %line.id(), name = line.name(), "line created");

        Ok(self.detail(line).await)
    }

    /// All lines with their resolved station paths, ordered by id.
    pub async fn lines(&self) -> Vec<LineDetail> {
        let mut details = Vec::new();
        for line in self.lines.all().await {
            details.push(self.detail(line).await);
        }
        details
    }

    /// One line with its resolved station path.
    pub async fn line(&self, id: LineId) -> Result<LineDetail, CatalogError> {
        let line = self
            .lines
            .get(id)
            .await
            .ok_or(CatalogError::LineNotFound(id))?;
        Ok(self.detail(line).await)
    }

    /// Rename and recolor a line. The route is untouched.
    pub async fn update_line(
        &self,
        id: LineId,
        name: String,
        color: String,
    ) -> Result<LineDetail, CatalogError> {
        self.lines
            .update(id, |line| line.update_info(name, color))
            .await
            .ok_or(CatalogError::LineNotFound(id))?;

        self.line(id).await
    }

    /// Delete a line. Its sections go with it; the stations stay
    /// registered and become free to delete.
    pub async fn delete_line(&self, id: LineId) -> Result<(), CatalogError> {
        self.lines
            .remove(id)
            .await
            .ok_or(CatalogError::LineNotFound(id))?;
        debug!(line = %id, "line deleted");
        Ok(())
    }

    /// Append a section at the line's downstream end.
    ///
    /// Returns the updated line so callers can echo the new path.
    pub async fn add_section(
        &self,
        line_id: LineId,
        up: StationId,
        down: StationId,
        distance: i64,
    ) -> Result<LineDetail, CatalogError> {
        if self.lines.get(line_id).await.is_none() {
            return Err(CatalogError::LineNotFound(line_id));
        }
        self.ensure_station(up).await?;
        self.ensure_station(down).await?;

        let appended = self
            .lines
            .update(line_id, |line| line.append_section(up, down, distance))
            .await
            .ok_or(CatalogError::LineNotFound(line_id))?;
        let section = appended?;
        debug!(
            line = %line_id,
            up = %section.up(),
            down = %section.down(),
            "section appended"
        );

        self.line(line_id).await
    }

    /// Remove the section ending at the line's downstream terminus.
    pub async fn remove_section(
        &self,
        line_id: LineId,
        station: StationId,
    ) -> Result<(), CatalogError> {
        if self.lines.get(line_id).await.is_none() {
            return Err(CatalogError::LineNotFound(line_id));
        }
        self.ensure_station(station).await?;

        let removed = self
            .lines
            .update(line_id, |line| line.remove_terminal(station))
            .await
            .ok_or(CatalogError::LineNotFound(line_id))?;
        removed?;
        debug!(line = %line_id, station = %station, "terminal section removed");
        Ok(())
    }

    async fn ensure_station(&self, id: StationId) -> Result<(), CatalogError> {
        if self.stations.get(id).await.is_none() {
            return Err(CatalogError::StationNotFound(id));
        }
        Ok(())
    }

    async fn detail(&self, line: Line) -> LineDetail {
        let mut stations = Vec::with_capacity(line.sections().len() + 1);
        for id in line.station_path() {
            if let Some(station) = self.stations.get(id).await {
                stations.push(station);
            }
        }
        LineDetail { line, stations }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
