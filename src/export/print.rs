//! Printable event roster
//!
//! Renders one event's registration list as a standalone HTML document
//! for printing. All user-entered data is escaped.

use crate::models::{Event, Registration};
use crate::services::event_stats;
use crate::utils::logging::log_export;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the print view for one event over the full registration list.
/// Registrations for other events are ignored.
pub fn event_roster_html(event: &Event, registrations: &[Registration]) -> String {
    let stats = event_stats(event, registrations);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>{} - Registrations</title>\n", escape(&event.name)));
    html.push_str("<style>body{font-family:sans-serif}table{border-collapse:collapse;width:100%}th,td{border:1px solid #999;padding:4px 8px;text-align:left}</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape(&event.name)));
    html.push_str(&format!(
        "<p>{} &middot; {} &middot; {}</p>\n",
        escape(&event.category),
        event.date,
        escape(&event.venue),
    ));
    html.push_str(&format!(
        "<p>{} of {} spots filled ({})</p>\n",
        stats.registrations,
        event.max_participants,
        stats.status.label(),
    ));

    html.push_str("<table>\n<tr><th>#</th><th>Student Name</th><th>Student ID</th><th>Email</th><th>Phone</th><th>Grade</th><th>Registered</th></tr>\n");
    let mut row = 0;
    for registration in registrations.iter().filter(|r| r.event_id == event.id) {
        row += 1;
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row,
            escape(&registration.student_name),
            escape(&registration.student_id),
            escape(&registration.email),
            escape(registration.phone.as_deref().unwrap_or("")),
            escape(registration.grade.as_deref().unwrap_or("")),
            registration.registration_date.format("%Y-%m-%d %H:%M"),
        ));
    }
    html.push_str("</table>\n</body>\n</html>\n");

    log_export("event_roster", row);
    html
}
