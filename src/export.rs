//! Tabular export and staff notifications.
//!
//! CSV output uses `,` between columns and ` | ` between names inside a
//! cell. Fields containing `,`, `"` or a line break are quoted.

use crate::models::WeeklySchedule;
use crate::scheduler::{OffByDay, WorkStats};

/// Separator between names within one CSV cell.
pub const NAME_SEPARATOR: &str = " | ";

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// `Day,Shift,Assigned`, one row per slot in week order.
pub fn schedule_to_csv(schedule: &WeeklySchedule) -> String {
    let mut rows = vec![csv_row(&["Day", "Shift", "Assigned"])];
    for (day, shift, assigned) in schedule.slots() {
        rows.push(csv_row(&[
            day.short_name(),
            shift.name(),
            &assigned.join(NAME_SEPARATOR),
        ]));
    }
    rows.join("\n")
}

/// `Staff,DaysWorked,DaysOff,HoursWorked`, one row per staff member.
pub fn work_stats_to_csv(stats: &WorkStats) -> String {
    let mut rows = vec![csv_row(&["Staff", "DaysWorked", "DaysOff", "HoursWorked"])];
    for e in stats.iter() {
        rows.push(csv_row(&[
            &e.staff,
            &e.days_worked.to_string(),
            &e.days_off.to_string(),
            &e.hours_worked.to_string(),
        ]));
    }
    rows.join("\n")
}

/// `Day,OffStaff`, one row per day.
pub fn off_by_day_to_csv(off: &OffByDay) -> String {
    let mut rows = vec![csv_row(&["Day", "OffStaff"])];
    for (day, names) in off.iter() {
        rows.push(csv_row(&[day.short_name(), &names.join(NAME_SEPARATOR)]));
    }
    rows.join("\n")
}

/// Plain-text message telling `staff` which shifts they work this week.
///
/// Delivery (mail, chat, printed sheet) is up to the caller.
pub fn notification_message(staff: &str, schedule: &WeeklySchedule) -> String {
    let lines: Vec<String> = schedule
        .assignments_for(staff)
        .map(|(day, shift)| format!("- {day}: {shift} shift"))
        .collect();

    if lines.is_empty() {
        return format!("Hi {staff},\n\nYou have no shifts scheduled this week.");
    }

    let noun = if lines.len() == 1 { "shift" } else { "shifts" };
    format!(
        "Hi {staff},\n\nYou have {} {noun} this week:\n{}",
        lines.len(),
        lines.join("\n")
    )
}
