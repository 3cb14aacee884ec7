//! CSV report generation
//!
//! Two flat reports over the statistics view: one row per event, and one
//! row per (filtered) registration. Text cells are double-quoted and
//! embedded quotes doubled.

use crate::catalog::EventCatalog;
use crate::models::Registration;
use crate::services::ReportStatistics;
use crate::utils::logging::log_export;

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Event report: one row per event in the sorted statistics order
pub fn event_report(stats: &ReportStatistics) -> String {
    let mut out =
        String::from("Event Name,Category,Date,Venue,Registrations,Capacity,Fill Percentage\n");

    for event_stats in &stats.event_stats {
        let event = &event_stats.event;
        out.push_str(&format!(
            "{},{},{},{},{},{},{:.2}%\n",
            quote(&event.name),
            quote(&event.category),
            quote(&event.date.to_string()),
            quote(&event.venue),
            event_stats.registrations,
            event.max_participants,
            event_stats.fill_percentage,
        ));
    }

    log_export("event_report", stats.event_stats.len());
    out
}

/// Student report: one row per registration, with the event resolved
/// against the catalog. Absent optionals and unresolvable events render
/// as empty cells.
pub fn student_report(catalog: &EventCatalog, registrations: &[&Registration]) -> String {
    let mut out =
        String::from("Student Name,Student ID,Email,Phone,Grade,Event,Category,Registration Date\n");

    for registration in registrations {
        let event = catalog.get(registration.event_id);
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            quote(&registration.student_name),
            quote(&registration.student_id),
            quote(&registration.email),
            quote(registration.phone.as_deref().unwrap_or("")),
            quote(registration.grade.as_deref().unwrap_or("")),
            quote(event.map_or("", |e| e.name.as_str())),
            quote(event.map_or("", |e| e.category.as_str())),
            quote(&registration.registration_date.format("%Y-%m-%d").to_string()),
        ));
    }

    log_export("student_report", registrations.len());
    out
}
