use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::error::ApiError;
use crate::models::{Event, EventDetail, NewEvent, Respondent, TimeSlot, UpdateEvent};
use crate::token;

pub const EVENT_NOT_FOUND: &str = "Sorry, event not found.";

/// Per-table row counts removed by a cascading event delete.
#[derive(Debug, Serialize)]
pub struct DeletedEvent {
    pub availability_responses: u64,
    pub time_slots: u64,
    pub attendees: u64,
}

/// Owns the event row and the invariant that its time slots are fully
/// replaced on update and fully removed (with attendees and responses) on
/// delete. Every multi-statement mutation runs in one transaction; a dropped
/// transaction rolls back.
pub struct EventService {
    pool: PgPool,
}

impl EventService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the event row and all its slots atomically. A failed slot
    /// insert leaves no orphan event behind.
    pub async fn create(&self, new: NewEvent) -> Result<(Event, Vec<TimeSlot>), ApiError> {
        let share_token = token::generate_share_token();

        let mut tx = self.pool.begin().await?;

        let event: Event = sqlx::query_as(
            "INSERT INTO events (event_name, description, organizer_name, organizer_email, unique_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&new.event_name)
        .bind(&new.description)
        .bind(&new.organizer_name)
        .bind(&new.organizer_email)
        .bind(&share_token)
        .fetch_one(&mut *tx)
        .await?;

        let mut slots = Vec::with_capacity(new.slots.len());
        for slot in &new.slots {
            let row: TimeSlot = sqlx::query_as(
                "INSERT INTO time_slots (event_id, start_time, end_time) \
                 VALUES ($1, $2, $3) RETURNING *",
            )
            .bind(event.event_id)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .fetch_one(&mut *tx)
            .await?;
            slots.push(row);
        }

        tx.commit().await?;

        info!(
            event_id = event.event_id,
            slots = slots.len(),
            "Created event \"{}\"",
            event.event_name
        );
        Ok((event, slots))
    }

    pub async fn get_by_token(&self, share_token: &str) -> Result<EventDetail, ApiError> {
        let event: Option<Event> = sqlx::query_as("SELECT * FROM events WHERE unique_url = $1")
            .bind(share_token)
            .fetch_optional(&self.pool)
            .await?;
        match event {
            Some(event) => self.attach_dependents(event).await,
            None => Err(ApiError::not_found(EVENT_NOT_FOUND)),
        }
    }

    pub async fn get_by_id(&self, event_id: i64) -> Result<EventDetail, ApiError> {
        let event: Option<Event> = sqlx::query_as("SELECT * FROM events WHERE event_id = $1")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;
        match event {
            Some(event) => self.attach_dependents(event).await,
            None => Err(ApiError::not_found(EVENT_NOT_FOUND)),
        }
    }

    async fn attach_dependents(&self, event: Event) -> Result<EventDetail, ApiError> {
        let time_slots: Vec<TimeSlot> = sqlx::query_as(
            "SELECT * FROM time_slots WHERE event_id = $1 ORDER BY start_time",
        )
        .bind(event.event_id)
        .fetch_all(&self.pool)
        .await?;

        let attendees: Vec<Respondent> = sqlx::query_as(
            "SELECT DISTINCT a.name, a.email FROM attendees a \
             JOIN availability_responses r ON r.attendee_id = a.attendee_id \
             WHERE r.event_id = $1",
        )
        .bind(event.event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(EventDetail {
            event,
            time_slots,
            attendees,
        })
    }

    /// Zero rows is an empty list, not an error.
    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        let events = sqlx::query_as("SELECT * FROM events ORDER BY event_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    /// Update the scalar fields and replace the slot list, atomically. The
    /// old slots are gone only if every new slot made it in.
    pub async fn update(
        &self,
        event_id: i64,
        update: UpdateEvent,
    ) -> Result<(Event, Vec<TimeSlot>), ApiError> {
        let mut tx = self.pool.begin().await?;

        let event: Option<Event> = sqlx::query_as(
            "UPDATE events SET event_name = $1, description = $2 \
             WHERE event_id = $3 RETURNING *",
        )
        .bind(&update.event_name)
        .bind(&update.description)
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(event) = event else {
            return Err(ApiError::not_found(EVENT_NOT_FOUND));
        };

        sqlx::query("DELETE FROM time_slots WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        let mut slots = Vec::with_capacity(update.slots.len());
        for slot in &update.slots {
            let row: TimeSlot = sqlx::query_as(
                "INSERT INTO time_slots (event_id, start_time, end_time) \
                 VALUES ($1, $2, $3) RETURNING *",
            )
            .bind(event_id)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .fetch_one(&mut *tx)
            .await?;
            slots.push(row);
        }

        tx.commit().await?;

        info!(event_id, slots = slots.len(), "Updated event");
        Ok((event, slots))
    }

    /// Cascading delete: responses, then slots, then attendees, then the
    /// event row, all in one transaction. An unknown event id rolls the
    /// whole thing back.
    pub async fn delete(&self, event_id: i64) -> Result<DeletedEvent, ApiError> {
        let mut tx = self.pool.begin().await?;

        let availability_responses =
            sqlx::query("DELETE FROM availability_responses WHERE event_id = $1")
                .bind(event_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();

        let time_slots = sqlx::query("DELETE FROM time_slots WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let attendees = sqlx::query("DELETE FROM attendees WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let events = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if events == 0 {
            return Err(ApiError::not_found(EVENT_NOT_FOUND));
        }

        tx.commit().await?;

        info!(
            event_id,
            availability_responses, time_slots, attendees, "Deleted event and dependents"
        );
        Ok(DeletedEvent {
            availability_responses,
            time_slots,
            attendees,
        })
    }
}
