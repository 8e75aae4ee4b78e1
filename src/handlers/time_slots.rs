use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::ApiError;
use crate::models::NewSlot;
use crate::services::TimeSlotService;
use crate::validate;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/time_slots", axum::routing::post(create_time_slot))
        .route(
            "/time_slots/:id",
            get(get_time_slot).put(update_time_slot).delete(delete_time_slot),
        )
        .route("/time_slots/event/:event_id", get(list_time_slots_for_event))
}

#[derive(Debug, Deserialize)]
pub struct CreateTimeSlotRequest {
    pub event_id: Option<i64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTimeSlotRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

fn validate_create(req: CreateTimeSlotRequest) -> Result<(i64, NewSlot), ApiError> {
    let mut details = Vec::new();
    let event_id = validate::required_id(&mut details, "event_id", req.event_id);
    let slot = validate::slot_interval(
        &mut details,
        "time_slot",
        req.start_time.as_deref(),
        req.end_time.as_deref(),
    );
    match (event_id, slot) {
        (Some(event_id), Some(slot)) if details.is_empty() => Ok((event_id, slot)),
        _ => Err(ApiError::validation("All fields required", details)),
    }
}

fn validate_update(req: UpdateTimeSlotRequest) -> Result<NewSlot, ApiError> {
    let mut details = Vec::new();
    let slot = validate::slot_interval(
        &mut details,
        "time_slot",
        req.start_time.as_deref(),
        req.end_time.as_deref(),
    );
    match slot {
        Some(slot) if details.is_empty() => Ok(slot),
        _ => Err(ApiError::validation(
            "Start and end times are required to update a time slot.",
            details,
        )),
    }
}

/// POST /time_slots
pub async fn create_time_slot(
    State(state): State<AppState>,
    Json(payload): Json<CreateTimeSlotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (event_id, slot) = validate_create(payload)?;
    let row = TimeSlotService::new(state.pool.clone()).create(event_id, slot).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /time_slots/:id
pub async fn get_time_slot(
    State(state): State<AppState>,
    Path(time_slot_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = TimeSlotService::new(state.pool.clone()).get(time_slot_id).await?;
    Ok(Json(row))
}

/// GET /time_slots/event/:event_id - empty list when the event has no slots
pub async fn list_time_slots_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = TimeSlotService::new(state.pool.clone())
        .list_for_event(event_id)
        .await?;
    Ok(Json(rows))
}

/// PUT /time_slots/:id
pub async fn update_time_slot(
    State(state): State<AppState>,
    Path(time_slot_id): Path<i64>,
    Json(payload): Json<UpdateTimeSlotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let slot = validate_update(payload)?;
    let row = TimeSlotService::new(state.pool.clone())
        .update(time_slot_id, slot)
        .await?;
    Ok(Json(row))
}

/// DELETE /time_slots/:id
pub async fn delete_time_slot(
    State(state): State<AppState>,
    Path(time_slot_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    TimeSlotService::new(state.pool.clone()).delete(time_slot_id).await?;
    Ok(Json(json!({ "message": "Time slot deleted successfully." })))
}
