//! Export module
//!
//! Pure formatting consumers of the statistics and registration views:
//! CSV reports and the per-event HTML print roster. Nothing here touches
//! state or imposes contracts on the core.

pub mod csv;
pub mod print;

pub use csv::{event_report, student_report};
pub use print::event_roster_html;
