//! Snapshot storage implementation
//!
//! The full registration list is persisted as one JSON array under a fixed
//! storage key and replaced wholesale on every write. A missing or
//! unreadable snapshot is not an error: it reads back as an empty list,
//! the same as a browser whose local storage was cleared.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::models::Registration;
use crate::utils::errors::Result;

/// File-backed snapshot storage for the registration collection
#[derive(Debug, Clone)]
pub struct SnapshotStorage {
    config: StorageConfig,
}

impl SnapshotStorage {
    /// Create a new snapshot storage instance
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Path of the snapshot file for the configured storage key
    pub fn snapshot_path(&self) -> PathBuf {
        Path::new(&self.config.path).join(format!("{}.json", self.config.key))
    }

    /// Load the registration collection from the snapshot.
    ///
    /// A missing snapshot yields an empty list; so does a snapshot that no
    /// longer parses, since lost local state is treated as "no prior
    /// registrations" rather than surfaced as an error.
    pub async fn load(&self) -> Result<Vec<Registration>> {
        let path = self.snapshot_path();

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No snapshot found, starting with empty registrations");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<Registration>>(&raw) {
            Ok(registrations) => {
                debug!(
                    path = %path.display(),
                    record_count = registrations.len(),
                    "Snapshot loaded"
                );
                Ok(registrations)
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Snapshot is unreadable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Persist the full registration collection, replacing the prior
    /// snapshot. No partial update, no transaction.
    pub async fn save(&self, registrations: &[Registration]) -> Result<()> {
        let path = self.snapshot_path();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let serialized = serde_json::to_string(registrations)?;
        tokio::fs::write(&path, serialized).await?;

        debug!(
            path = %path.display(),
            record_count = registrations.len(),
            "Snapshot saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn storage_in(dir: &Path) -> SnapshotStorage {
        SnapshotStorage::new(StorageConfig {
            path: dir.to_string_lossy().into_owned(),
            key: "sportsRegistrations".to_string(),
        })
    }

    fn sample_registration() -> Registration {
        Registration {
            id: 1710000000000,
            student_name: "Alice Johnson".to_string(),
            student_id: "STU-001".to_string(),
            event_id: 1,
            email: "alice@school.edu".to_string(),
            phone: Some("555-0101".to_string()),
            grade: Some("9th Grade".to_string()),
            registration_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn missing_snapshot_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());

        let loaded = storage.load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn corrupt_snapshot_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());

        tokio::fs::write(storage.snapshot_path(), "{not json")
            .await
            .unwrap();

        let loaded = storage.load().await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn save_replaces_prior_snapshot_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());

        let first = vec![sample_registration()];
        storage.save(&first).await.unwrap();

        let mut second = first.clone();
        second.push(Registration {
            id: 1710000000001,
            student_id: "STU-002".to_string(),
            ..sample_registration()
        });
        storage.save(&second).await.unwrap();

        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded, second);
    }

    #[tokio::test]
    async fn snapshot_uses_camel_case_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());

        storage.save(&[sample_registration()]).await.unwrap();

        let raw = tokio::fs::read_to_string(storage.snapshot_path())
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];

        for key in ["id", "studentName", "studentId", "eventId", "email", "phone", "grade", "registrationDate"] {
            assert!(record.get(key).is_some(), "missing snapshot field {key}");
        }
        // Timestamps are stored as ISO-8601 strings
        assert!(record["registrationDate"].is_string());
    }

    #[tokio::test]
    async fn absent_optionals_are_omitted_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());

        let registration = Registration {
            phone: None,
            grade: None,
            ..sample_registration()
        };
        storage.save(&[registration]).await.unwrap();

        let raw = tokio::fs::read_to_string(storage.snapshot_path())
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];
        assert!(record.get("phone").is_none());
        assert!(record.get("grade").is_none());
    }
}
