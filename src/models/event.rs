use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Read-only calendar entry, seeded at startup. Start and end are
/// structured times so slot bucketing compares hours as integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub date: NaiveDate,
    pub color_tag: String,
}

impl CalendarEvent {
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// The mocked schedule shown by the dashboard, anchored to `today`.
pub fn seed_events(today: NaiveDate) -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: 1,
            title: "Team Standup".to_string(),
            start: time(9, 0),
            end: time(9, 30),
            date: today,
            color_tag: "gray".to_string(),
        },
        CalendarEvent {
            id: 2,
            title: "JET Task List Session".to_string(),
            start: time(14, 0),
            end: time(15, 0),
            date: today,
            color_tag: "blue".to_string(),
        },
        CalendarEvent {
            id: 3,
            title: "August Campaign Brief".to_string(),
            start: time(15, 0),
            end: time(16, 0),
            date: today,
            color_tag: "yellow".to_string(),
        },
        CalendarEvent {
            id: 4,
            title: "Client Review Meeting".to_string(),
            start: time(16, 30),
            end: time(17, 30),
            date: today,
            color_tag: "yellow".to_string(),
        },
    ]
}
