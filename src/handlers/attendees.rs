use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::AppState;
use crate::error::ApiError;
use crate::models::NewAttendee;
use crate::services::AttendeeService;
use crate::validate;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/attendees", axum::routing::post(create_attendee))
        .route("/attendees/:id", get(get_attendee).put(update_attendee))
        .route("/attendees/event/:event_id", get(list_attendees_for_event))
}

#[derive(Debug, Deserialize)]
pub struct AttendeeRequest {
    pub event_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

fn validate_attendee(req: AttendeeRequest) -> Result<NewAttendee, ApiError> {
    let mut details = Vec::new();
    let event_id = validate::required_id(&mut details, "event_id", req.event_id);
    let name = validate::required_str(&mut details, "name", req.name);
    let email = validate::required_str(&mut details, "email", req.email);
    match (event_id, name, email) {
        (Some(event_id), Some(name), Some(email)) => Ok(NewAttendee {
            event_id,
            name,
            email,
        }),
        _ => Err(ApiError::validation(
            "Event ID, name, and email are all required",
            details,
        )),
    }
}

/// POST /attendees
pub async fn create_attendee(
    State(state): State<AppState>,
    Json(payload): Json<AttendeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_attendee = validate_attendee(payload)?;
    let row = AttendeeService::new(state.pool.clone()).create(new_attendee).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /attendees/:id
pub async fn get_attendee(
    State(state): State<AppState>,
    Path(attendee_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = AttendeeService::new(state.pool.clone()).get(attendee_id).await?;
    Ok(Json(row))
}

/// GET /attendees/event/:event_id - empty list when nobody has been added
pub async fn list_attendees_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = AttendeeService::new(state.pool.clone())
        .list_for_event(event_id)
        .await?;
    Ok(Json(rows))
}

/// PUT /attendees/:id - full-field update
pub async fn update_attendee(
    State(state): State<AppState>,
    Path(attendee_id): Path<i64>,
    Json(payload): Json<AttendeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let update = validate_attendee(payload)?;
    let row = AttendeeService::new(state.pool.clone())
        .update(attendee_id, update)
        .await?;
    Ok(Json(row))
}
