use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person who has submitted (or may submit) availability for an event.
/// `event_id` is nullable in the schema; rows created through the attendee
/// endpoint or the combined submission always carry one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendee {
    pub attendee_id: i64,
    pub event_id: Option<i64>,
    pub name: String,
    pub email: String,
}

/// Validated payload for attendee creation and full-field update.
#[derive(Debug)]
pub struct NewAttendee {
    pub event_id: i64,
    pub name: String,
    pub email: String,
}
