//! Event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A schedulable activity with a fixed capacity that registrations
/// compete for. Events are created once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub max_participants: u32,
    pub date: NaiveDate,
    pub venue: String,
}

impl Event {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        max_participants: u32,
        date: NaiveDate,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            max_participants,
            date,
            venue: venue.into(),
        }
    }
}
