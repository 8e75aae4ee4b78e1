//! Boundary validation helpers shared by all handlers.
//!
//! Each helper appends field-level messages to a `details` list and returns
//! the validated value when present. Handlers run every check, then reject
//! with a single `ApiError::Validation` carrying all collected details, so
//! clients see the full set of problems at once. Validation always happens
//! before any store access.

use chrono::{DateTime, Utc};

use crate::models::time_slot::{NewSlot, SlotInput};

pub fn required_str(details: &mut Vec<String>, field: &str, value: Option<String>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            details.push(format!("{field} is required"));
            None
        }
    }
}

pub fn required_id(details: &mut Vec<String>, field: &str, value: Option<i64>) -> Option<i64> {
    match value {
        Some(v) => Some(v),
        None => {
            details.push(format!("{field} is required"));
            None
        }
    }
}

pub fn timestamp(
    details: &mut Vec<String>,
    field: &str,
    value: Option<&str>,
) -> Option<DateTime<Utc>> {
    let Some(raw) = value else {
        details.push(format!("{field} is required"));
        return None;
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(_) => {
            details.push(format!("{field} must be an RFC 3339 timestamp"));
            None
        }
    }
}

/// Validate one slot interval: both timestamps present, parseable, and
/// start strictly before end.
pub fn slot_interval(
    details: &mut Vec<String>,
    label: &str,
    start_raw: Option<&str>,
    end_raw: Option<&str>,
) -> Option<NewSlot> {
    let start = timestamp(details, &format!("{label}.start_time"), start_raw);
    let end = timestamp(details, &format!("{label}.end_time"), end_raw);
    match (start, end) {
        (Some(start_time), Some(end_time)) if start_time < end_time => Some(NewSlot {
            start_time,
            end_time,
        }),
        (Some(_), Some(_)) => {
            details.push(format!("{label}.start_time must be earlier than end_time"));
            None
        }
        _ => None,
    }
}

/// Validate a non-empty slot list. Returns the validated slots only when the
/// list is present, non-empty, and every entry passed.
pub fn slot_list(
    details: &mut Vec<String>,
    field: &str,
    payload: Option<Vec<SlotInput>>,
) -> Option<Vec<NewSlot>> {
    let Some(list) = payload else {
        details.push(format!("{field} is required"));
        return None;
    };
    if list.is_empty() {
        details.push(format!("{field} must contain at least one slot"));
        return None;
    }
    let before = details.len();
    let slots: Vec<NewSlot> = list
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| {
            slot_interval(
                details,
                &format!("{field}[{i}]"),
                slot.start_time.as_deref(),
                slot.end_time.as_deref(),
            )
        })
        .collect();
    if details.len() == before {
        Some(slots)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_str_rejects_missing_and_blank() {
        let mut details = Vec::new();
        assert!(required_str(&mut details, "name", None).is_none());
        assert!(required_str(&mut details, "email", Some("   ".into())).is_none());
        assert_eq!(
            details,
            vec!["name is required", "email is required"]
        );
    }

    #[test]
    fn required_str_passes_value_through() {
        let mut details = Vec::new();
        let value = required_str(&mut details, "name", Some("Ann".into()));
        assert_eq!(value.as_deref(), Some("Ann"));
        assert!(details.is_empty());
    }

    #[test]
    fn timestamp_rejects_garbage() {
        let mut details = Vec::new();
        assert!(timestamp(&mut details, "start_time", Some("yesterday")).is_none());
        assert_eq!(details, vec!["start_time must be an RFC 3339 timestamp"]);
    }

    #[test]
    fn slot_interval_rejects_reversed_times() {
        let mut details = Vec::new();
        let slot = slot_interval(
            &mut details,
            "time_slots[0]",
            Some("2025-01-16T11:00:00Z"),
            Some("2025-01-16T10:00:00Z"),
        );
        assert!(slot.is_none());
        assert_eq!(
            details,
            vec!["time_slots[0].start_time must be earlier than end_time"]
        );
    }

    #[test]
    fn slot_interval_accepts_ordered_times() {
        let mut details = Vec::new();
        let slot = slot_interval(
            &mut details,
            "time_slots[0]",
            Some("2025-01-16T10:00:00Z"),
            Some("2025-01-16T11:00:00Z"),
        );
        assert!(slot.is_some());
        assert!(details.is_empty());
    }

    #[test]
    fn slot_list_rejects_empty_list() {
        let mut details = Vec::new();
        assert!(slot_list(&mut details, "time_slots", Some(vec![])).is_none());
        assert_eq!(details, vec!["time_slots must contain at least one slot"]);
    }
}
