//! Event catalog
//!
//! The catalog is the fixed list of events the championship runs. It is
//! built once at startup and never mutated; every registration references
//! an event in it by id. Iteration order is the display and tie-breaking
//! order for statistics.

use chrono::NaiveDate;

use crate::models::Event;

/// Ordered, fixed-at-startup collection of events
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Create a catalog from an ordered event list
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Resolve an event id to its catalog entry
    pub fn get(&self, event_id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// Iterate events in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Number of events in the catalog
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct categories in first-seen catalog order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for event in &self.events {
            if !categories.contains(&event.category) {
                categories.push(event.category.clone());
            }
        }
        categories
    }
}

impl Default for EventCatalog {
    /// The Annual School Sports Championship catalog
    fn default() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Self::new(vec![
            Event::new(1, "100m Sprint", "Track & Field", 20, date(2024, 3, 15), "Athletic Track"),
            Event::new(2, "Football", "Team Sports", 22, date(2024, 3, 16), "Football Ground"),
            Event::new(3, "Basketball", "Team Sports", 10, date(2024, 3, 17), "Basketball Court"),
            Event::new(4, "Swimming", "Individual Sports", 15, date(2024, 3, 18), "Swimming Pool"),
            Event::new(5, "Long Jump", "Track & Field", 18, date(2024, 3, 19), "Athletic Field"),
            Event::new(6, "Chess", "Indoor Games", 32, date(2024, 3, 20), "Activity Hall"),
        ])
    }
}
