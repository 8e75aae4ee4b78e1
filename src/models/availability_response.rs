use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One attendee's response for one time slot. `event_id` is denormalized so
/// per-event queries need no join; `availability` is nullable, with row
/// presence alone meaning "selected".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AvailabilityResponse {
    pub response_id: i64,
    pub attendee_id: i64,
    pub time_slot_id: i64,
    pub event_id: i64,
    pub availability: Option<bool>,
}

/// Validated combined submission: attendee identity plus the slot ids they
/// selected. Inserted atomically (attendee row + one response per slot).
#[derive(Debug)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub event_id: i64,
    pub time_slot_ids: Vec<i64>,
}

/// Validated full-field update of a single response row.
#[derive(Debug)]
pub struct ResponseUpdate {
    pub attendee_id: i64,
    pub time_slot_id: i64,
    pub event_id: i64,
    pub availability: Option<bool>,
}
