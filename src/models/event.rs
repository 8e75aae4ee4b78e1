use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::time_slot::{NewSlot, TimeSlot};

/// An event row. `unique_url` is the opaque public share handle, distinct
/// from the numeric `event_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub event_id: i64,
    pub event_name: String,
    pub description: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub unique_url: String,
}

/// Validated payload for event creation. Produced by boundary validation;
/// every slot is already checked for presence and ordering.
#[derive(Debug)]
pub struct NewEvent {
    pub event_name: String,
    pub description: String,
    pub organizer_name: String,
    pub organizer_email: String,
    pub slots: Vec<NewSlot>,
}

/// Validated payload for event update. The slot list fully replaces the
/// event's existing slots.
#[derive(Debug)]
pub struct UpdateEvent {
    pub event_name: String,
    pub description: String,
    pub slots: Vec<NewSlot>,
}

/// A distinct (name, email) pair of someone who has responded to an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Respondent {
    pub name: String,
    pub email: String,
}

/// Event plus its dependent rows, as returned by the single-event lookups.
#[derive(Debug, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub time_slots: Vec<TimeSlot>,
    pub attendees: Vec<Respondent>,
}
