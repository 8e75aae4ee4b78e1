use sqlx::PgPool;
use tracing::info;

use crate::error::ApiError;
use crate::models::{Attendee, NewAttendee};

pub const ATTENDEE_NOT_FOUND: &str = "Attendee not found.";

/// CRUD on attendees scoped to an event.
pub struct AttendeeService {
    pool: PgPool,
}

impl AttendeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewAttendee) -> Result<Attendee, ApiError> {
        let row: Attendee = sqlx::query_as(
            "INSERT INTO attendees (event_id, name, email) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(new.event_id)
        .bind(&new.name)
        .bind(&new.email)
        .fetch_one(&self.pool)
        .await?;
        info!(attendee_id = row.attendee_id, event_id = new.event_id, "Created attendee");
        Ok(row)
    }

    pub async fn get(&self, attendee_id: i64) -> Result<Attendee, ApiError> {
        let row: Option<Attendee> =
            sqlx::query_as("SELECT * FROM attendees WHERE attendee_id = $1")
                .bind(attendee_id)
                .fetch_optional(&self.pool)
                .await?;
        row.ok_or_else(|| ApiError::not_found(ATTENDEE_NOT_FOUND))
    }

    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Attendee>, ApiError> {
        let rows = sqlx::query_as("SELECT * FROM attendees WHERE event_id = $1 ORDER BY attendee_id")
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn update(&self, attendee_id: i64, update: NewAttendee) -> Result<Attendee, ApiError> {
        let row: Option<Attendee> = sqlx::query_as(
            "UPDATE attendees SET event_id = $1, name = $2, email = $3 \
             WHERE attendee_id = $4 RETURNING *",
        )
        .bind(update.event_id)
        .bind(&update.name)
        .bind(&update.email)
        .bind(attendee_id)
        .fetch_optional(&self.pool)
        .await?;
        row.ok_or_else(|| ApiError::not_found(ATTENDEE_NOT_FOUND))
    }
}
