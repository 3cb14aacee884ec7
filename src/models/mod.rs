//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod registration;

// Re-export commonly used models
pub use event::Event;
pub use registration::{Registration, RegistrationRequest, SUGGESTED_GRADES};
