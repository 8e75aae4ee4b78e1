use axum::extract::{Host, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{request_scheme, AppState};
use crate::error::ApiError;
use crate::models::{Event, NewEvent, SlotInput, TimeSlot, UpdateEvent};
use crate::services::event_service::DeletedEvent;
use crate::services::EventService;
use crate::validate;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/:handle",
            get(get_event).put(update_event).delete(delete_event),
        )
}

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
    pub time_slots: Option<Vec<SlotInput>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub time_slots: Option<Vec<SlotInput>>,
}

#[derive(Debug, Serialize)]
pub struct CreatedEventBody {
    #[serde(flatten)]
    pub event: Event,
    pub share_url: String,
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedEventBody {
    #[serde(flatten)]
    pub event: Event,
    pub time_slots: Vec<TimeSlot>,
}

fn validate_create(req: CreateEventRequest) -> Result<NewEvent, ApiError> {
    let mut details = Vec::new();
    let event_name = validate::required_str(&mut details, "event_name", req.event_name);
    let description = validate::required_str(&mut details, "description", req.description);
    let organizer_name = validate::required_str(&mut details, "organizer_name", req.organizer_name);
    let organizer_email =
        validate::required_str(&mut details, "organizer_email", req.organizer_email);
    let slots = validate::slot_list(&mut details, "time_slots", req.time_slots);

    if let (Some(event_name), Some(description), Some(organizer_name), Some(organizer_email), Some(slots)) =
        (event_name, description, organizer_name, organizer_email, slots)
    {
        if details.is_empty() {
            return Ok(NewEvent {
                event_name,
                description,
                organizer_name,
                organizer_email,
                slots,
            });
        }
    }
    Err(ApiError::validation(
        "All fields are required to create an event.",
        details,
    ))
}

fn validate_update(req: UpdateEventRequest) -> Result<UpdateEvent, ApiError> {
    let mut details = Vec::new();
    let event_name = validate::required_str(&mut details, "event_name", req.event_name);
    let description = validate::required_str(&mut details, "description", req.description);
    let slots = validate::slot_list(&mut details, "time_slots", req.time_slots);

    if let (Some(event_name), Some(description), Some(slots)) = (event_name, description, slots) {
        if details.is_empty() {
            return Ok(UpdateEvent {
                event_name,
                description,
                slots,
            });
        }
    }
    Err(ApiError::validation(
        "All fields needed to update the event.",
        details,
    ))
}

/// POST /events - create an event with its candidate slots
pub async fn create_event(
    State(state): State<AppState>,
    Host(host): Host,
    headers: HeaderMap,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_event = validate_create(payload)?;

    let (event, time_slots) = EventService::new(state.pool.clone()).create(new_event).await?;

    // The share link is built from the request's own host so the body is
    // directly usable behind any deployment name.
    let share_url = format!(
        "{}://{}/events/{}",
        request_scheme(&headers),
        host,
        event.unique_url
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedEventBody {
            event,
            share_url,
            time_slots,
        }),
    ))
}

/// GET /events - list all events (empty list when there are none)
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let events = EventService::new(state.pool.clone()).list().await?;
    Ok(Json(events))
}

/// GET /events/:handle - numeric handles resolve by id, everything else is
/// treated as a share token
pub async fn get_event(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let service = EventService::new(state.pool.clone());
    let detail = match handle.parse::<i64>() {
        Ok(event_id) => service.get_by_id(event_id).await?,
        Err(_) => service.get_by_token(&handle).await?,
    };
    Ok(Json(detail))
}

/// PUT /events/:id - update scalar fields and fully replace the slot list
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let update = validate_update(payload)?;

    let (event, time_slots) = EventService::new(state.pool.clone())
        .update(event_id, update)
        .await?;

    Ok(Json(UpdatedEventBody { event, time_slots }))
}

/// DELETE /events/:id - cascading delete of the event and all its dependents
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted: DeletedEvent = EventService::new(state.pool.clone()).delete(event_id).await?;
    Ok(Json(json!({
        "message": "Event deleted successfully.",
        "deleted": deleted,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_create_request() -> CreateEventRequest {
        CreateEventRequest {
            event_name: Some("Standup".into()),
            description: Some("daily".into()),
            organizer_name: Some("Ann".into()),
            organizer_email: Some("ann@x.com".into()),
            time_slots: Some(vec![SlotInput {
                start_time: Some("2025-01-16T10:00:00Z".into()),
                end_time: Some("2025-01-16T11:00:00Z".into()),
            }]),
        }
    }

    #[test]
    fn create_validation_accepts_complete_payload() {
        let new_event = validate_create(full_create_request()).unwrap();
        assert_eq!(new_event.event_name, "Standup");
        assert_eq!(new_event.slots.len(), 1);
    }

    #[test]
    fn create_validation_collects_every_missing_field() {
        let req = CreateEventRequest {
            event_name: None,
            description: None,
            organizer_name: None,
            organizer_email: None,
            time_slots: None,
        };
        let err = validate_create(req).unwrap_err();
        match err {
            ApiError::Validation { message, details } => {
                assert_eq!(message, "All fields are required to create an event.");
                assert_eq!(details.len(), 5);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_validation_rejects_empty_slot_list() {
        let req = CreateEventRequest {
            time_slots: Some(vec![]),
            ..full_create_request()
        };
        let err = validate_create(req).unwrap_err();
        match err {
            ApiError::Validation { details, .. } => {
                assert_eq!(details, vec!["time_slots must contain at least one slot"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn update_validation_rejects_reversed_slot() {
        let req = UpdateEventRequest {
            event_name: Some("Standup".into()),
            description: Some("daily".into()),
            time_slots: Some(vec![SlotInput {
                start_time: Some("2025-01-16T11:00:00Z".into()),
                end_time: Some("2025-01-16T10:00:00Z".into()),
            }]),
        };
        let err = validate_update(req).unwrap_err();
        match err {
            ApiError::Validation { details, .. } => {
                assert_eq!(
                    details,
                    vec!["time_slots[0].start_time must be earlier than end_time"]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
