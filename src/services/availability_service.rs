use sqlx::PgPool;
use tracing::info;

use crate::error::ApiError;
use crate::models::{Attendee, AvailabilityResponse, NewSubmission, ResponseUpdate};

pub const RESPONSE_NOT_FOUND: &str = "Response not found";

/// Records availability responses. The combined submission creates the
/// attendee row and one response per selected slot in a single transaction:
/// any failure (typically a foreign-key violation on a stale slot id) rolls
/// back the attendee insert too, leaving no partial side effect.
pub struct AvailabilityService {
    pool: PgPool,
}

impl AvailabilityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn submit(&self, submission: NewSubmission) -> Result<Attendee, ApiError> {
        let mut tx = self.pool.begin().await?;

        let attendee: Attendee = sqlx::query_as(
            "INSERT INTO attendees (event_id, name, email) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(submission.event_id)
        .bind(&submission.name)
        .bind(&submission.email)
        .fetch_one(&mut *tx)
        .await?;

        for time_slot_id in &submission.time_slot_ids {
            sqlx::query(
                "INSERT INTO availability_responses (attendee_id, time_slot_id, event_id, availability) \
                 VALUES ($1, $2, $3, TRUE)",
            )
            .bind(attendee.attendee_id)
            .bind(time_slot_id)
            .bind(submission.event_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            attendee_id = attendee.attendee_id,
            event_id = submission.event_id,
            slots = submission.time_slot_ids.len(),
            "Recorded availability submission"
        );
        Ok(attendee)
    }

    pub async fn get(&self, response_id: i64) -> Result<AvailabilityResponse, ApiError> {
        let row: Option<AvailabilityResponse> =
            sqlx::query_as("SELECT * FROM availability_responses WHERE response_id = $1")
                .bind(response_id)
                .fetch_optional(&self.pool)
                .await?;
        row.ok_or_else(|| ApiError::not_found(RESPONSE_NOT_FOUND))
    }

    pub async fn list(&self) -> Result<Vec<AvailabilityResponse>, ApiError> {
        let rows = sqlx::query_as("SELECT * FROM availability_responses ORDER BY response_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn update(
        &self,
        response_id: i64,
        update: ResponseUpdate,
    ) -> Result<AvailabilityResponse, ApiError> {
        let row: Option<AvailabilityResponse> = sqlx::query_as(
            "UPDATE availability_responses \
             SET attendee_id = $1, time_slot_id = $2, event_id = $3, availability = $4 \
             WHERE response_id = $5 RETURNING *",
        )
        .bind(update.attendee_id)
        .bind(update.time_slot_id)
        .bind(update.event_id)
        .bind(update.availability)
        .bind(response_id)
        .fetch_optional(&self.pool)
        .await?;
        row.ok_or_else(|| ApiError::not_found(RESPONSE_NOT_FOUND))
    }

    pub async fn delete(&self, response_id: i64) -> Result<(), ApiError> {
        let deleted = sqlx::query("DELETE FROM availability_responses WHERE response_id = $1")
            .bind(response_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(ApiError::not_found(RESPONSE_NOT_FOUND));
        }
        info!(response_id, "Deleted availability response");
        Ok(())
    }
}
