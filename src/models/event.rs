//! Event rows as the events list endpoint returns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the Events list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// `None` means unlimited capacity.
    #[serde(default)]
    pub capacity: Option<u32>,
    pub num_guests: u32,
    /// Unpublished events are visible to managers only.
    pub published: bool,
}

impl EventSummary {
    /// Whether RSVP should be disabled because the event is at capacity.
    pub fn is_full(&self) -> bool {
        matches!(self.capacity, Some(capacity) if self.num_guests >= capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(capacity: &str, guests: u32) -> EventSummary {
        serde_json::from_str(&format!(
            r#"{{
                "id": "00000000-0000-0000-0000-000000000003",
                "name": "Trivia night",
                "location": "BA 2250",
                "startTime": "2025-05-10T22:00:00Z",
                "endTime": "2025-05-11T00:00:00Z",
                "capacity": {capacity},
                "numGuests": {guests},
                "published": true
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn full_when_guests_reach_capacity() {
        assert!(event("30", 30).is_full());
        assert!(!event("30", 29).is_full());
    }

    #[test]
    fn unlimited_capacity_is_never_full() {
        assert!(!event("null", 5000).is_full());
    }
}
