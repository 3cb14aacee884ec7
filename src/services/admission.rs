//! Admission service implementation
//!
//! This service runs the admission check for candidate registrations and,
//! on success, appends the admitted record and persists the updated
//! collection as a wholesale snapshot replacement.

use chrono::Utc;
use tracing::{debug, info};

use crate::catalog::EventCatalog;
use crate::models::{Registration, RegistrationRequest};
use crate::state::SnapshotStorage;
use crate::utils::errors::{RejectionReason, Result};

/// Decide whether a candidate registration is admitted.
///
/// Rejection conditions run in a fixed order: missing required fields,
/// unknown event, duplicate (student id, event id) pair, event at
/// capacity. Returns the resolved event id on success.
pub fn admit(
    catalog: &EventCatalog,
    registrations: &[Registration],
    request: &RegistrationRequest,
) -> std::result::Result<i64, RejectionReason> {
    if !request.has_required_fields() {
        return Err(RejectionReason::MissingInformation);
    }

    // Presence was just checked
    let event_id = request.event_id.ok_or(RejectionReason::MissingInformation)?;

    let event = catalog
        .get(event_id)
        .ok_or(RejectionReason::InvalidEvent { event_id })?;

    let already_registered = registrations
        .iter()
        .any(|r| r.student_id == request.student_id && r.event_id == event_id);
    if already_registered {
        return Err(RejectionReason::AlreadyRegistered);
    }

    let current = registrations.iter().filter(|r| r.event_id == event_id).count();
    if current >= event.max_participants as usize {
        return Err(RejectionReason::EventFull);
    }

    Ok(event_id)
}

/// Admission service owning the catalog, the snapshot storage, and the
/// in-memory registration collection
#[derive(Clone)]
pub struct AdmissionService {
    catalog: EventCatalog,
    storage: SnapshotStorage,
    registrations: Vec<Registration>,
}

impl AdmissionService {
    /// Create an admission service, loading prior registrations from the
    /// snapshot. A missing or unreadable snapshot means an empty list.
    pub async fn load(catalog: EventCatalog, storage: SnapshotStorage) -> Result<Self> {
        let registrations = storage.load().await?;
        debug!(
            record_count = registrations.len(),
            "Admission service loaded"
        );

        Ok(Self {
            catalog,
            storage,
            registrations,
        })
    }

    /// The event catalog this service admits against
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// The full registration collection, in admission order
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Count of registrations for one event
    pub fn registration_count(&self, event_id: i64) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .count()
    }

    /// Run the admission check for a candidate and, if admitted, append
    /// the timestamped record and persist the updated collection.
    ///
    /// The collection is replaced wholesale: the new list is written to
    /// the snapshot before it takes the old list's place, so a failed
    /// write leaves the in-memory state unchanged.
    pub async fn register(&mut self, request: RegistrationRequest) -> Result<Registration> {
        let event_id = match admit(&self.catalog, &self.registrations, &request) {
            Ok(event_id) => event_id,
            Err(reason) => {
                debug!(
                    student_id = %request.student_id,
                    event_id = request.event_id,
                    reason = %reason,
                    "Registration rejected"
                );
                return Err(reason.into());
            }
        };

        let now = Utc::now();
        let registration = Registration {
            // Time-based identifier, effectively unique within a session
            id: now.timestamp_millis(),
            student_name: request.student_name,
            student_id: request.student_id,
            event_id,
            email: request.email,
            phone: request.phone.filter(|p| !p.is_empty()),
            grade: request.grade.filter(|g| !g.is_empty()),
            registration_date: now,
        };

        let mut updated = self.registrations.clone();
        updated.push(registration.clone());

        self.storage.save(&updated).await?;
        self.registrations = updated;

        info!(
            registration_id = registration.id,
            student_id = %registration.student_id,
            event_id = registration.event_id,
            "Registration accepted"
        );

        Ok(registration)
    }
}

impl std::fmt::Debug for AdmissionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionService")
            .field("events", &self.catalog.len())
            .field("registrations", &self.registrations.len())
            .finish_non_exhaustive()
    }
}
