//! Data transfer objects for web requests and responses.
//!
//! Wire field names are camelCase, matching the public API; domain types
//! stay serde-free and are converted here.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::LineDetail;
use crate::stations::Station;

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    /// Display name
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub id: u64,

    /// Display name
    pub name: String,
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    /// Line name; must be unused
    pub name: String,

    /// Display color
    pub color: String,

    /// Upstream terminus of the first section
    pub up_station_id: u64,

    /// Downstream terminus of the first section
    pub down_station_id: u64,

    /// First section's distance; must be positive
    pub distance: i64,
}

/// Request to rename or recolor a line.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// Request to append a section at the line's downstream end.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    /// Must equal the line's current terminus
    pub up_station_id: u64,

    /// Must not already be on the line
    pub down_station_id: u64,

    /// Distance; must be positive
    pub distance: i64,
}

/// Query for removing the terminal section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSectionQuery {
    /// Must be the line's downstream terminus
    pub station_id: u64,
}

/// A line with its resolved station path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResponse {
    pub id: u64,

    pub name: String,

    pub color: String,

    /// Stations in path order, upstream terminus first
    pub stations: Vec<StationResponse>,

    /// RFC 3339, UTC
    pub created_at: String,

    /// RFC 3339, UTC
    pub updated_at: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResponse {
    /// Create from a registered station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().into(),
            name: station.name().to_string(),
        }
    }
}

impl LineResponse {
    /// Create from a catalog line detail.
    pub fn from_detail(detail: &LineDetail) -> Self {
        Self {
            id: detail.line.id().into(),
            name: detail.line.name().to_string(),
            color: detail.line.color().to_string(),
            stations: detail
                .stations
                .iter()
                .map(StationResponse::from_station)
                .collect(),
            created_at: format_timestamp(&detail.line.created_at()),
            updated_at: format_timestamp(&detail.line.updated_at()),
        }
    }
}

/// Format a timestamp as RFC 3339 with whole-second precision, UTC.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
