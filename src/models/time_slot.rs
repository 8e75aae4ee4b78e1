use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A candidate start/end interval attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimeSlot {
    pub time_slot_id: i64,
    pub event_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Raw slot payload as it arrives on the wire. Both fields are optional so
/// that missing keys surface as field-level validation details instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotInput {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// A validated slot interval: both timestamps present, start before end.
#[derive(Debug, Clone, Copy)]
pub struct NewSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
