use sqlx::PgPool;
use tracing::info;

use crate::error::ApiError;
use crate::models::{NewSlot, TimeSlot};

pub const TIME_SLOT_NOT_FOUND: &str = "Time slot not found.";

/// CRUD on time slots scoped to an event. Single-statement operations; a bad
/// event_id surfaces as a foreign-key constraint violation from the store.
pub struct TimeSlotService {
    pool: PgPool,
}

impl TimeSlotService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, event_id: i64, slot: NewSlot) -> Result<TimeSlot, ApiError> {
        let row: TimeSlot = sqlx::query_as(
            "INSERT INTO time_slots (event_id, start_time, end_time) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(event_id)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .fetch_one(&self.pool)
        .await?;
        info!(event_id, time_slot_id = row.time_slot_id, "Created time slot");
        Ok(row)
    }

    pub async fn get(&self, time_slot_id: i64) -> Result<TimeSlot, ApiError> {
        let row: Option<TimeSlot> =
            sqlx::query_as("SELECT * FROM time_slots WHERE time_slot_id = $1")
                .bind(time_slot_id)
                .fetch_optional(&self.pool)
                .await?;
        row.ok_or_else(|| ApiError::not_found(TIME_SLOT_NOT_FOUND))
    }

    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<TimeSlot>, ApiError> {
        let rows = sqlx::query_as(
            "SELECT * FROM time_slots WHERE event_id = $1 ORDER BY start_time",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn update(&self, time_slot_id: i64, slot: NewSlot) -> Result<TimeSlot, ApiError> {
        let row: Option<TimeSlot> = sqlx::query_as(
            "UPDATE time_slots SET start_time = $1, end_time = $2 \
             WHERE time_slot_id = $3 RETURNING *",
        )
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(time_slot_id)
        .fetch_optional(&self.pool)
        .await?;
        row.ok_or_else(|| ApiError::not_found(TIME_SLOT_NOT_FOUND))
    }

    pub async fn delete(&self, time_slot_id: i64) -> Result<(), ApiError> {
        let deleted = sqlx::query("DELETE FROM time_slots WHERE time_slot_id = $1")
            .bind(time_slot_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(ApiError::not_found(TIME_SLOT_NOT_FOUND));
        }
        info!(time_slot_id, "Deleted time slot");
        Ok(())
    }
}
