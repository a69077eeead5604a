pub mod grid;
pub mod slots;

pub use grid::{month_dates, month_weeks, navigate, week_dates, CalendarView};
pub use slots::{events_in_slot, events_on_date};
