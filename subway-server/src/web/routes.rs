//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tracing::debug;

use crate::catalog::CatalogError;
use crate::domain::{LineId, StationId};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route(
            "/lines/:id",
            get(show_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(create_section).delete(remove_section),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Register a station.
async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<CreateStationRequest>,
) -> impl IntoResponse {
    let station = state.catalog.create_station(req.name).await;
    let location = format!("/stations/{}", station.id());

    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse::from_station(&station)),
    )
}

/// List all registered stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.catalog.stations().await;
    Json(stations.iter().map(StationResponse::from_station).collect())
}

/// Delete a station no line runs through.
async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.catalog.delete_station(StationId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line with its first section.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<CreateLineRequest>,
) -> Result<Response, AppError> {
    let detail = state
        .catalog
        .create_line(
            req.name,
            req.color,
            StationId(req.up_station_id),
            StationId(req.down_station_id),
            req.distance,
        )
        .await?;
    let location = format!("/lines/{}", detail.line.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LineResponse::from_detail(&detail)),
    )
        .into_response())
}

/// List all lines with their station paths.
async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let details = state.catalog.lines().await;
    Json(details.iter().map(LineResponse::from_detail).collect())
}

/// One line with its station path.
async fn show_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LineResponse>, AppError> {
    let detail = state.catalog.line(LineId(id)).await?;
    Ok(Json(LineResponse::from_detail(&detail)))
}

/// Rename or recolor a line.
async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let detail = state
        .catalog
        .update_line(LineId(id), req.name, req.color)
        .await?;
    Ok(Json(LineResponse::from_detail(&detail)))
}

/// Delete a line and its sections.
async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.catalog.delete_line(LineId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Append a section at the line's downstream end.
async fn create_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<CreateSectionRequest>,
) -> Result<Response, AppError> {
    let detail = state
        .catalog
        .add_section(
            LineId(id),
            StationId(req.up_station_id),
            StationId(req.down_station_id),
            req.distance,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LineResponse::from_detail(&detail)),
    )
        .into_response())
}

/// Remove the section ending at the line's downstream terminus.
async fn remove_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<RemoveSectionQuery>,
) -> Result<StatusCode, AppError> {
    state
        .catalog
        .remove_section(LineId(id), StationId(query.station_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        let message = e.to_string();
        match e {
            CatalogError::LineNotFound(_) | CatalogError::StationNotFound(_) => {
                AppError::NotFound { message }
            }
            CatalogError::DuplicateName(_) | CatalogError::StationInUse { .. } => {
                AppError::Conflict { message }
            }
            CatalogError::Section(_) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        debug!(status = %status, error = %message, "request rejected");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn seeded_state(stations: &[&str]) -> AppState {
        let state = AppState::new(Catalog::new());
        for name in stations {
            state.catalog.create_station((*name).to_string()).await;
        }
        state
    }

    /// State with four stations and line 1 running King's Cross → Angel.
    async fn state_with_line() -> AppState {
        let state = seeded_state(&["King's Cross", "Angel", "Bank", "Oval"]).await;
        state
            .catalog
            .create_line(
                "Victoria".to_string(),
                "bg-blue-600".to_string(),
                StationId(1),
                StationId(2),
                10,
            )
            .await
            .unwrap();
        state
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_answers_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn create_station_returns_created_with_location() {
        let state = seeded_state(&[]).await;

        let response = create_station(
            State(state),
            Json(CreateStationRequest {
                name: "Angel".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/stations/1"
        );
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Angel");
    }

    #[tokio::test]
    async fn list_stations_returns_all_in_id_order() {
        let state = seeded_state(&["King's Cross", "Angel"]).await;

        let Json(stations) = list_stations(State(state)).await;

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "King's Cross");
        assert_eq!(stations[1].name, "Angel");
    }

    #[tokio::test]
    async fn delete_station_answers_no_content() {
        let state = seeded_state(&["Angel"]).await;

        let status = delete_station(State(state.clone()), Path(1)).await.unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.catalog.stations().await.is_empty());
    }

    #[tokio::test]
    async fn delete_station_on_a_line_conflicts() {
        let state = state_with_line().await;

        let err = delete_station(State(state), Path(2)).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"], "station 2 is still served by line 1");
    }

    #[tokio::test]
    async fn delete_missing_station_is_not_found() {
        let state = seeded_state(&[]).await;

        let err = delete_station(State(state), Path(9)).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "station 9 not found");
    }

    #[tokio::test]
    async fn create_line_returns_created_with_location_and_path() {
        let state = seeded_state(&["King's Cross", "Angel"]).await;

        let response = create_line(
            State(state),
            Json(CreateLineRequest {
                name: "Victoria".to_string(),
                color: "bg-blue-600".to_string(),
                up_station_id: 1,
                down_station_id: 2,
                distance: 10,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/lines/1"
        );
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Victoria");
        assert_eq!(body["color"], "bg-blue-600");
        assert_eq!(body["stations"][0]["name"], "King's Cross");
        assert_eq!(body["stations"][1]["name"], "Angel");
        assert!(body["createdAt"].is_string());
        assert!(body["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn create_line_with_taken_name_conflicts() {
        let state = state_with_line().await;

        let err = create_line(
            State(state),
            Json(CreateLineRequest {
                name: "Victoria".to_string(),
                color: "bg-red-600".to_string(),
                up_station_id: 3,
                down_station_id: 4,
                distance: 5,
            }),
        )
        .await
        .unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["error"], "a line named \"Victoria\" already exists");
    }

    #[tokio::test]
    async fn create_line_with_unknown_station_is_not_found() {
        let state = seeded_state(&["King's Cross"]).await;

        let err = create_line(
            State(state),
            Json(CreateLineRequest {
                name: "Victoria".to_string(),
                color: "bg-blue-600".to_string(),
                up_station_id: 1,
                down_station_id: 9,
                distance: 10,
            }),
        )
        .await
        .unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "station 9 not found");
    }

    #[tokio::test]
    async fn create_line_with_bad_distance_is_bad_request() {
        let state = seeded_state(&["King's Cross", "Angel"]).await;

        let err = create_line(
            State(state),
            Json(CreateLineRequest {
                name: "Victoria".to_string(),
                color: "bg-blue-600".to_string(),
                up_station_id: 1,
                down_station_id: 2,
                distance: 0,
            }),
        )
        .await
        .unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid section: distance must be positive");
    }

    #[tokio::test]
    async fn show_line_returns_the_path() {
        let state = state_with_line().await;

        let Json(line) = show_line(State(state), Path(1)).await.unwrap();

        assert_eq!(line.id, 1);
        assert_eq!(line.stations.len(), 2);
        assert_eq!(line.stations[0].name, "King's Cross");
    }

    #[tokio::test]
    async fn show_missing_line_is_not_found() {
        let state = seeded_state(&[]).await;

        let err = show_line(State(state), Path(9)).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "line 9 not found");
    }

    #[tokio::test]
    async fn list_lines_returns_every_line() {
        let state = state_with_line().await;
        state
            .catalog
            .create_line(
                "Northern".to_string(),
                "bg-black-600".to_string(),
                StationId(3),
                StationId(4),
                4,
            )
            .await
            .unwrap();

        let Json(lines) = list_lines(State(state)).await;

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Victoria");
        assert_eq!(lines[1].name, "Northern");
    }

    #[tokio::test]
    async fn update_line_echoes_the_new_attributes() {
        let state = state_with_line().await;

        let Json(line) = update_line(
            State(state),
            Path(1),
            Json(UpdateLineRequest {
                name: "Jubilee".to_string(),
                color: "bg-gray-500".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(line.name, "Jubilee");
        assert_eq!(line.color, "bg-gray-500");
        assert_eq!(line.stations.len(), 2);
    }

    #[tokio::test]
    async fn delete_line_answers_no_content() {
        let state = state_with_line().await;

        let status = delete_line(State(state.clone()), Path(1)).await.unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(state.catalog.lines().await.is_empty());
    }

    #[tokio::test]
    async fn create_section_returns_the_extended_line() {
        let state = state_with_line().await;

        let response = create_section(
            State(state),
            Path(1),
            Json(CreateSectionRequest {
                up_station_id: 2,
                down_station_id: 3,
                distance: 7,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["stations"][2]["name"], "Bank");
    }

    #[tokio::test]
    async fn create_section_off_the_terminus_is_bad_request() {
        let state = state_with_line().await;

        let err = create_section(
            State(state),
            Path(1),
            Json(CreateSectionRequest {
                up_station_id: 3,
                down_station_id: 4,
                distance: 7,
            }),
        )
        .await
        .unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "new section must start at the line's terminus, station 2, \
             but starts at station 3"
        );
    }

    #[tokio::test]
    async fn create_section_revisiting_a_station_is_bad_request() {
        let state = state_with_line().await;

        let err = create_section(
            State(state),
            Path(1),
            Json(CreateSectionRequest {
                up_station_id: 2,
                down_station_id: 1,
                distance: 7,
            }),
        )
        .await
        .unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "station 1 is already on the line");
    }

    #[tokio::test]
    async fn remove_section_answers_no_content() {
        let state = state_with_line().await;
        state
            .catalog
            .add_section(LineId(1), StationId(2), StationId(3), 7)
            .await
            .unwrap();

        let status = remove_section(
            State(state.clone()),
            Path(1),
            Query(RemoveSectionQuery { station_id: 3 }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
        let detail = state.catalog.line(LineId(1)).await.unwrap();
        assert_eq!(
            detail.line.station_path(),
            vec![StationId(1), StationId(2)]
        );
    }

    #[tokio::test]
    async fn remove_only_section_is_bad_request() {
        let state = state_with_line().await;

        let err = remove_section(
            State(state),
            Path(1),
            Query(RemoveSectionQuery { station_id: 2 }),
        )
        .await
        .unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "cannot remove the only section of the line");
    }

    #[tokio::test]
    async fn remove_non_terminus_station_is_bad_request() {
        let state = state_with_line().await;
        state
            .catalog
            .add_section(LineId(1), StationId(2), StationId(3), 7)
            .await
            .unwrap();

        let err = remove_section(
            State(state),
            Path(1),
            Query(RemoveSectionQuery { station_id: 2 }),
        )
        .await
        .unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "station 2 is not the line's downstream terminus"
        );
    }
}
