//! Services module
//!
//! This module contains the business logic services: the admission check
//! that gates registrations, and the on-demand statistics aggregation
//! behind the report views.

pub mod admission;
pub mod reports;

// Re-export commonly used services
pub use admission::{admit, AdmissionService};
pub use reports::{
    compute_statistics, event_stats, event_status, filter_registrations, CategoryStats,
    EventStats, EventStatus, GradeStats, ReportStatistics, ReportsService,
};

use crate::catalog::EventCatalog;
use crate::config::Settings;
use crate::state::SnapshotStorage;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub admission_service: AdmissionService,
    pub reports_service: ReportsService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized. The
    /// admission service starts from whatever the snapshot holds.
    pub async fn new(settings: Settings, catalog: EventCatalog) -> Result<Self> {
        let storage = SnapshotStorage::new(settings.storage.clone());
        let admission_service = AdmissionService::load(catalog.clone(), storage).await?;
        let reports_service = ReportsService::new(catalog);

        Ok(Self {
            admission_service,
            reports_service,
        })
    }
}
