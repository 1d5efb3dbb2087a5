//! Test fixtures and snapshot builders for integration testing

#![allow(dead_code)]

use std::collections::HashMap;
use swim_scoring::types::{
    Event, EventEntries, PlayerId, Registration, TimingRecord, UniversityId,
};

/// Player taking part in a test tournament
#[derive(Debug, Clone)]
pub struct TestSwimmer {
    pub id: &'static str,
    pub name: &'static str,
    pub university_id: &'static str,
    pub university_name: &'static str,
}

/// Roster shared by the integration tests
pub fn roster() -> Vec<TestSwimmer> {
    vec![
        TestSwimmer {
            id: "A",
            name: "Ada Lovelace",
            university_id: "north",
            university_name: "North University",
        },
        TestSwimmer {
            id: "B",
            name: "Bea Arthur",
            university_id: "north",
            university_name: "North University",
        },
        TestSwimmer {
            id: "C",
            name: "Cy Young",
            university_id: "south",
            university_name: "South College",
        },
        TestSwimmer {
            id: "D",
            name: "Di Prince",
            university_id: "east",
            university_name: "East Institute",
        },
        TestSwimmer {
            id: "E",
            name: "Ed Sheeran",
            university_id: "south",
            university_name: "South College",
        },
    ]
}

fn swimmer(player_id: &str) -> TestSwimmer {
    roster()
        .into_iter()
        .find(|s| s.id == player_id)
        .unwrap_or(TestSwimmer {
            id: "?",
            name: "Unknown",
            university_id: "none",
            university_name: "Unattached",
        })
}

/// Builder for one event's registrations and timings
pub struct EventBuilder {
    entries: EventEntries,
}

impl EventBuilder {
    pub fn new(event_id: &str) -> Self {
        Self {
            entries: EventEntries {
                event: Event {
                    id: event_id.to_string(),
                    name: format!("Event {}", event_id),
                },
                registrations: Vec::new(),
                timings: Vec::new(),
            },
        }
    }

    /// Register a roster swimmer and record their time
    pub fn swim(mut self, player_id: &str, time_ms: Option<i64>) -> Self {
        self = self.register(player_id);
        self.entries.timings.push(TimingRecord::new(
            player_id,
            self.entries.event.id.clone(),
            time_ms,
        ));
        self
    }

    /// Register a roster swimmer without any timing record
    pub fn register(mut self, player_id: &str) -> Self {
        let s = swimmer(player_id);
        self.entries.registrations.push(Registration {
            player_id: player_id.to_string(),
            event_id: self.entries.event.id.clone(),
            player_name: s.name.to_string(),
            university_id: s.university_id.to_string(),
            university_name: s.university_name.to_string(),
        });
        self
    }

    /// Add a raw timing record, registered or not
    pub fn timing(mut self, player_id: &str, time_ms: Option<i64>) -> Self {
        self.entries.timings.push(TimingRecord::new(
            player_id,
            self.entries.event.id.clone(),
            time_ms,
        ));
        self
    }

    pub fn build(self) -> EventEntries {
        self.entries
    }
}

/// University directory built from the roster
pub fn directory() -> HashMap<PlayerId, UniversityId> {
    roster()
        .into_iter()
        .map(|s| (s.id.to_string(), s.university_id.to_string()))
        .collect()
}
