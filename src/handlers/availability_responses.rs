use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::ApiError;
use crate::models::{NewSubmission, ResponseUpdate};
use crate::services::AvailabilityService;
use crate::validate;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/availability_responses",
            get(list_responses).post(submit_availability),
        )
        .route(
            "/availability_responses/:id",
            get(get_response).put(update_response).delete(delete_response),
        )
}

/// Combined submission: invitee identity plus the slots they picked. The
/// camelCase alias matches the original client payload.
#[derive(Debug, Deserialize)]
pub struct SubmitAvailabilityRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub event_id: Option<i64>,
    #[serde(alias = "timeSlots")]
    pub time_slot_ids: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResponseRequest {
    pub attendee_id: Option<i64>,
    pub time_slot_id: Option<i64>,
    pub event_id: Option<i64>,
    pub availability: Option<bool>,
}

fn validate_submission(req: SubmitAvailabilityRequest) -> Result<NewSubmission, ApiError> {
    let mut details = Vec::new();
    let name = validate::required_str(&mut details, "name", req.name);
    let email = validate::required_str(&mut details, "email", req.email);
    let event_id = validate::required_id(&mut details, "event_id", req.event_id);
    let time_slot_ids = match req.time_slot_ids {
        Some(ids) if !ids.is_empty() => Some(ids),
        Some(_) => {
            details.push("time_slot_ids must contain at least one time slot".to_string());
            None
        }
        None => {
            details.push("time_slot_ids is required".to_string());
            None
        }
    };

    match (name, email, event_id, time_slot_ids) {
        (Some(name), Some(email), Some(event_id), Some(time_slot_ids)) => Ok(NewSubmission {
            name,
            email,
            event_id,
            time_slot_ids,
        }),
        _ => Err(ApiError::validation("Missing required fields", details)),
    }
}

fn validate_update(req: UpdateResponseRequest) -> Result<ResponseUpdate, ApiError> {
    let mut details = Vec::new();
    let attendee_id = validate::required_id(&mut details, "attendee_id", req.attendee_id);
    let time_slot_id = validate::required_id(&mut details, "time_slot_id", req.time_slot_id);
    let event_id = validate::required_id(&mut details, "event_id", req.event_id);

    match (attendee_id, time_slot_id, event_id) {
        (Some(attendee_id), Some(time_slot_id), Some(event_id)) => Ok(ResponseUpdate {
            attendee_id,
            time_slot_id,
            event_id,
            availability: req.availability,
        }),
        _ => Err(ApiError::validation("Missing required fields", details)),
    }
}

/// POST /availability_responses - create the attendee and one response per
/// selected slot in a single transaction
pub async fn submit_availability(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAvailabilityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let submission = validate_submission(payload)?;

    let attendee = AvailabilityService::new(state.pool.clone()).submit(submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Availability submitted successfully.",
            "attendee": { "name": attendee.name, "email": attendee.email },
        })),
    ))
}

/// GET /availability_responses - empty list when none exist
pub async fn list_responses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = AvailabilityService::new(state.pool.clone()).list().await?;
    Ok(Json(rows))
}

/// GET /availability_responses/:id
pub async fn get_response(
    State(state): State<AppState>,
    Path(response_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let row = AvailabilityService::new(state.pool.clone()).get(response_id).await?;
    Ok(Json(row))
}

/// PUT /availability_responses/:id - full-field update
pub async fn update_response(
    State(state): State<AppState>,
    Path(response_id): Path<i64>,
    Json(payload): Json<UpdateResponseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let update = validate_update(payload)?;
    let row = AvailabilityService::new(state.pool.clone())
        .update(response_id, update)
        .await?;
    Ok(Json(row))
}

/// DELETE /availability_responses/:id
pub async fn delete_response(
    State(state): State<AppState>,
    Path(response_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    AvailabilityService::new(state.pool.clone()).delete(response_id).await?;
    Ok(Json(json!({ "message": "Availability response deleted successfully." })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_rejects_empty_slot_list() {
        let err = validate_submission(SubmitAvailabilityRequest {
            name: Some("John".into()),
            email: Some("john@x.com".into()),
            event_id: Some(1),
            time_slot_ids: Some(vec![]),
        })
        .unwrap_err();
        match err {
            ApiError::Validation { message, details } => {
                assert_eq!(message, "Missing required fields");
                assert_eq!(
                    details,
                    vec!["time_slot_ids must contain at least one time slot"]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn submission_accepts_camel_case_alias() {
        let req: SubmitAvailabilityRequest = serde_json::from_value(serde_json::json!({
            "name": "John",
            "email": "john@x.com",
            "event_id": 1,
            "timeSlots": [5, 6],
        }))
        .unwrap();
        let submission = validate_submission(req).unwrap();
        assert_eq!(submission.time_slot_ids, vec![5, 6]);
    }

    #[test]
    fn update_allows_absent_availability_flag() {
        let update = validate_update(UpdateResponseRequest {
            attendee_id: Some(1),
            time_slot_id: Some(2),
            event_id: Some(3),
            availability: None,
        })
        .unwrap();
        assert!(update.availability.is_none());
    }
}
