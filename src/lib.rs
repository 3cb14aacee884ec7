//! SportsDesk
//!
//! Registration admission and reporting engine for an annual school sports
//! championship. This library provides the event catalog, the admission
//! check that gates student registrations against capacity and duplicates,
//! on-demand statistics aggregation, snapshot persistence, and the CSV and
//! print export collaborators built on top of them.

pub mod catalog;
pub mod config;
pub mod export;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{RejectionReason, Result, SportsDeskError};

// Re-export main components for easy access
pub use catalog::EventCatalog;
pub use models::{Event, Registration, RegistrationRequest};
pub use services::{AdmissionService, ReportStatistics, ServiceFactory};
pub use state::SnapshotStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
