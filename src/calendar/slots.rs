use chrono::{NaiveDate, Timelike};

use crate::models::event::CalendarEvent;

/// Hour range rendered by the day and week views.
pub const FIRST_SLOT_HOUR: u32 = 8;
pub const LAST_SLOT_HOUR: u32 = 18;

/// Exact calendar-date match, ignoring time of day; order follows the
/// input sequence.
pub fn events_on_date<'a>(events: &'a [CalendarEvent], date: NaiveDate) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|event| event.date == date).collect()
}

// An event lives in exactly one slot, the one matching its start hour,
// even when its duration spans several hours.
pub fn events_in_slot<'a>(
    events: &'a [CalendarEvent],
    date: NaiveDate,
    hour: u32,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| event.date == date && event.start.hour() == hour)
        .collect()
}

pub fn slot_hours() -> impl Iterator<Item = u32> {
    FIRST_SLOT_HOUR..=LAST_SLOT_HOUR
}
