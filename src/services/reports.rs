//! Reports service implementation
//!
//! Statistics are a pure function of (catalog, registrations), recomputed
//! in full on every invocation. Nothing here caches or updates
//! incrementally; the presentation layer calls in whenever it renders.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::EventCatalog;
use crate::models::{Event, Registration};

/// Registration status tier for one event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Open,
    Filling,
    Full,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Open => "open",
            EventStatus::Filling => "filling",
            EventStatus::Full => "full",
        }
    }

    /// Display label for badges and exports
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Open => "Open",
            EventStatus::Filling => "Filling Fast",
            EventStatus::Full => "Full",
        }
    }
}

/// Per-event statistics
#[derive(Debug, Clone, Serialize)]
pub struct EventStats {
    pub event: Event,
    pub registrations: usize,
    pub fill_percentage: f64,
    pub remaining_spots: u32,
    pub is_full: bool,
    pub status: EventStatus,
}

/// Registration count for one grade label
#[derive(Debug, Clone, Serialize)]
pub struct GradeStats {
    pub grade: String,
    pub registrations: usize,
}

/// Per-category statistics across all events sharing the category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub events: usize,
    pub registrations: usize,
    pub capacity: u32,
    pub fill_percentage: f64,
}

/// The derived report view over the full registration collection
#[derive(Debug, Clone, Serialize)]
pub struct ReportStatistics {
    pub total_students: usize,
    pub total_registrations: usize,
    pub total_categories: usize,
    /// Per-event stats, sorted descending by registration count
    pub event_stats: Vec<EventStats>,
    /// Per-category stats, sorted descending by registration count
    pub category_stats: Vec<CategoryStats>,
    /// Registration counts by grade, in first-seen order, for records
    /// that carry a grade
    pub grade_stats: Vec<GradeStats>,
    pub average_registrations_per_event: f64,
    /// Event with the most registrations; first maximum in catalog order
    pub most_popular_event: Option<EventStats>,
}

/// Status tier for a registration count against a capacity. Exactly 80%
/// is still `Open`; the filling tier starts strictly above it.
pub fn event_status(registrations: usize, max_participants: u32) -> EventStatus {
    if registrations >= max_participants as usize {
        return EventStatus::Full;
    }
    if fill_percentage(registrations, max_participants) > 80.0 {
        return EventStatus::Filling;
    }
    EventStatus::Open
}

// Capacity is assumed positive; a zero capacity yields NaN, as the
// original dashboard did.
fn fill_percentage(registrations: usize, max_participants: u32) -> f64 {
    (registrations as f64 / max_participants as f64) * 100.0
}

/// Compute the statistics for one event against the registration list
pub fn event_stats(event: &Event, registrations: &[Registration]) -> EventStats {
    let count = registrations
        .iter()
        .filter(|r| r.event_id == event.id)
        .count();
    let is_full = count >= event.max_participants as usize;

    EventStats {
        event: event.clone(),
        registrations: count,
        fill_percentage: fill_percentage(count, event.max_participants),
        remaining_spots: (event.max_participants as i64 - count as i64).max(0) as u32,
        is_full,
        status: event_status(count, event.max_participants),
    }
}

/// Recompute the full report view from the catalog and the registration
/// collection
pub fn compute_statistics(
    catalog: &EventCatalog,
    registrations: &[Registration],
) -> ReportStatistics {
    // Per-event, in catalog order first so ties keep that order below
    let per_event: Vec<EventStats> = catalog
        .iter()
        .map(|event| event_stats(event, registrations))
        .collect();

    let most_popular_event = per_event
        .iter()
        .fold(None::<&EventStats>, |max, stats| match max {
            Some(current) if stats.registrations > current.registrations => Some(stats),
            Some(current) => Some(current),
            None => Some(stats),
        })
        .cloned();

    let mut event_stats = per_event;
    event_stats.sort_by(|a, b| b.registrations.cmp(&a.registrations));

    let mut category_stats: Vec<CategoryStats> = catalog
        .categories()
        .into_iter()
        .map(|category| {
            let events: Vec<&Event> = catalog.iter().filter(|e| e.category == category).collect();
            let capacity: u32 = events.iter().map(|e| e.max_participants).sum();
            let count = registrations
                .iter()
                .filter(|r| events.iter().any(|e| e.id == r.event_id))
                .count();

            CategoryStats {
                category,
                events: events.len(),
                registrations: count,
                capacity,
                fill_percentage: if capacity == 0 {
                    0.0
                } else {
                    fill_percentage(count, capacity)
                },
            }
        })
        .collect();
    category_stats.sort_by(|a, b| b.registrations.cmp(&a.registrations));

    let mut grade_stats: Vec<GradeStats> = Vec::new();
    for registration in registrations {
        if let Some(grade) = &registration.grade {
            match grade_stats.iter_mut().find(|g| &g.grade == grade) {
                Some(entry) => entry.registrations += 1,
                None => grade_stats.push(GradeStats {
                    grade: grade.clone(),
                    registrations: 1,
                }),
            }
        }
    }

    let total_students = registrations
        .iter()
        .map(|r| r.student_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let average_registrations_per_event = if catalog.is_empty() {
        0.0
    } else {
        registrations.len() as f64 / catalog.len() as f64
    };

    ReportStatistics {
        total_students,
        total_registrations: registrations.len(),
        total_categories: catalog.categories().len(),
        event_stats,
        category_stats,
        grade_stats,
        average_registrations_per_event,
        most_popular_event,
    }
}

/// Filter the registration list down to one event and/or one category,
/// preserving admission order
pub fn filter_registrations<'a>(
    catalog: &EventCatalog,
    registrations: &'a [Registration],
    event_id: Option<i64>,
    category: Option<&str>,
) -> Vec<&'a Registration> {
    registrations
        .iter()
        .filter(|r| event_id.map_or(true, |id| r.event_id == id))
        .filter(|r| {
            category.map_or(true, |c| {
                catalog.get(r.event_id).is_some_and(|e| e.category == c)
            })
        })
        .collect()
}

/// Reports service bound to one catalog
#[derive(Debug, Clone)]
pub struct ReportsService {
    catalog: EventCatalog,
}

impl ReportsService {
    /// Create a new ReportsService instance
    pub fn new(catalog: EventCatalog) -> Self {
        Self { catalog }
    }

    /// Recompute the report view for the given registration collection
    pub fn statistics(&self, registrations: &[Registration]) -> ReportStatistics {
        compute_statistics(&self.catalog, registrations)
    }

    /// Statistics for a single catalog event
    pub fn event_statistics(&self, event_id: i64, registrations: &[Registration]) -> Option<EventStats> {
        self.catalog
            .get(event_id)
            .map(|event| event_stats(event, registrations))
    }

    /// Filter registrations by event and/or category
    pub fn filter<'a>(
        &self,
        registrations: &'a [Registration],
        event_id: Option<i64>,
        category: Option<&str>,
    ) -> Vec<&'a Registration> {
        filter_registrations(&self.catalog, registrations, event_id, category)
    }
}
