//! State persistence module
//!
//! This module handles the single persisted snapshot of the registration
//! collection.

pub mod snapshot;

pub use snapshot::SnapshotStorage;
