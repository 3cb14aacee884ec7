//! Error handling for SportsDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy. Admission rejections are
//! kept as their own enum because they are user-facing decisions rather
//! than infrastructure failures.

use thiserror::Error;

/// Main error type for SportsDesk operations
#[derive(Error, Debug)]
pub enum SportsDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Registration rejected: {0}")]
    Rejected(#[from] RejectionReason),
}

/// The four ways an admission check can turn a candidate away, in the
/// order the checks run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Please fill in all required fields.")]
    MissingInformation,

    #[error("The selected event does not exist.")]
    InvalidEvent { event_id: i64 },

    #[error("This student is already registered for the selected event.")]
    AlreadyRegistered,

    #[error("This event has reached its maximum capacity.")]
    EventFull,
}

impl RejectionReason {
    /// Short notification title shown alongside the message
    pub fn title(&self) -> &'static str {
        match self {
            RejectionReason::MissingInformation => "Missing Information",
            RejectionReason::InvalidEvent { .. } => "Invalid Event",
            RejectionReason::AlreadyRegistered => "Already Registered",
            RejectionReason::EventFull => "Event Full",
        }
    }
}

/// Result type alias for SportsDesk operations
pub type Result<T> = std::result::Result<T, SportsDeskError>;

impl SportsDeskError {
    /// Check if the error is a user-facing admission rejection rather
    /// than an infrastructure failure
    pub fn is_rejection(&self) -> bool {
        matches!(self, SportsDeskError::Rejected(_))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SportsDeskError::Config(_) => ErrorSeverity::Critical,
            SportsDeskError::Serialization(_) => ErrorSeverity::Error,
            SportsDeskError::Io(_) => ErrorSeverity::Error,
            SportsDeskError::Rejected(_) => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
