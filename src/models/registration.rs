//! Registration model
//!
//! A registration binds one student to one event. Records are created only
//! by a successful admission check and are never updated or deleted; the
//! serialized field names are the persisted snapshot contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grade labels offered by the registration form. The grade field itself
/// is free-form and is not validated against this list.
pub const SUGGESTED_GRADES: [&str; 4] = ["9th Grade", "10th Grade", "11th Grade", "12th Grade"];

/// An admitted registration record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    pub student_name: String,
    pub student_id: String,
    pub event_id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub registration_date: DateTime<Utc>,
}

/// A candidate registration collected from the form, before admission.
/// Required text fields arrive as plain strings; an empty string counts
/// as missing, matching the form's presence checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub student_name: String,
    pub student_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub grade: Option<String>,
    pub event_id: Option<i64>,
}

impl RegistrationRequest {
    /// Check that every required field is present: name, student id,
    /// email, and an event selection
    pub fn has_required_fields(&self) -> bool {
        !self.student_name.is_empty()
            && !self.student_id.is_empty()
            && !self.email.is_empty()
            && self.event_id.is_some()
    }
}
