//! Shared test helpers
//!
//! Builders for catalogs, candidate registrations, and snapshot-backed
//! admission services rooted in a temporary directory.

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use sportsdesk::config::StorageConfig;
use sportsdesk::models::Event;
use sportsdesk::{AdmissionService, EventCatalog, RegistrationRequest, SnapshotStorage};

/// The default six-event championship catalog
pub fn championship_catalog() -> EventCatalog {
    EventCatalog::default()
}

/// A two-event catalog: event 1 holds two students, event 2 holds one
pub fn two_event_catalog() -> EventCatalog {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    EventCatalog::new(vec![
        Event::new(1, "Event A", "Test Sports", 2, date, "Field A"),
        Event::new(2, "Event B", "Test Sports", 1, date, "Field B"),
    ])
}

/// Snapshot storage rooted in a test-owned temporary directory
pub fn storage_in(dir: &TempDir) -> SnapshotStorage {
    SnapshotStorage::new(StorageConfig {
        path: dir.path().to_string_lossy().into_owned(),
        key: "sportsRegistrations".to_string(),
    })
}

/// An admission service over the given catalog, persisting into `dir`
pub async fn service_in(dir: &TempDir, catalog: EventCatalog) -> AdmissionService {
    AdmissionService::load(catalog, storage_in(dir))
        .await
        .expect("admission service should load")
}

/// A complete, valid candidate registration for one student and event
pub fn candidate(student_id: &str, event_id: i64) -> RegistrationRequest {
    RegistrationRequest {
        student_name: format!("Student {student_id}"),
        student_id: student_id.to_string(),
        email: format!("{}@school.edu", student_id.to_lowercase()),
        phone: Some("555-0100".to_string()),
        grade: Some("10th Grade".to_string()),
        event_id: Some(event_id),
    }
}
