use chrono::{Datelike, Duration, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Day,
    Week,
    Month,
}

impl CalendarView {
    pub fn label(&self) -> &'static str {
        match self {
            CalendarView::Day => "day",
            CalendarView::Week => "week",
            CalendarView::Month => "month",
        }
    }
}

/// The Sunday-to-Saturday week containing `reference`, in order.
pub fn week_dates(reference: NaiveDate) -> Vec<NaiveDate> {
    let sunday = reference - Duration::days(reference.weekday().num_days_from_sunday() as i64);
    (0..7).map(|offset| sunday + Duration::days(offset)).collect()
}

/// Every date from the Sunday on/before the 1st through the Saturday
/// on/after the last day of the month. Padding dates from adjacent
/// months are told apart by comparing `.month()` against the reference.
pub fn month_dates(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = reference.with_day(1).unwrap_or(reference);
    let last = first + Months::new(1) - Duration::days(1);
    let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);

    let mut dates = Vec::new();
    let mut day = start;
    while day <= end {
        dates.push(day);
        day = day + Duration::days(1);
    }
    dates
}

/// `month_dates` grouped into rows of 7 for rendering.
pub fn month_weeks(reference: NaiveDate) -> Vec<Vec<NaiveDate>> {
    month_dates(reference)
        .chunks(7)
        .map(|week| week.to_vec())
        .collect()
}

// Month steps use calendar-month arithmetic; chrono clamps the
// day-of-month when the target month is shorter (Jan 31 -> Feb 28).
pub fn navigate(reference: NaiveDate, view: CalendarView, direction: i32) -> NaiveDate {
    let forward = direction > 0;
    match view {
        CalendarView::Day => reference + Duration::days(direction.signum() as i64),
        CalendarView::Week => reference + Duration::days(7 * direction.signum() as i64),
        CalendarView::Month => {
            if forward {
                reference + Months::new(1)
            } else {
                reference - Months::new(1)
            }
        }
    }
}
