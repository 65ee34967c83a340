use serde::Serialize;

use crate::time::{Date, Holiday, HolidayCalendar, WeekDay};

/// One calendar day of the attendance list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    day_of_month: usize,
    week_day: WeekDay,
    formatted_day_of_month: String,
    #[serde(skip)]
    date: Date,
}

impl Day {
    #[must_use]
    pub fn new(date: Date) -> Self {
        Self {
            day_of_month: date.day(),
            week_day: date.week_day(),
            formatted_day_of_month: date.day().to_string(),
            date,
        }
    }

    #[must_use]
    pub fn day_of_month(&self) -> usize {
        self.day_of_month
    }

    #[must_use]
    pub fn week_day(&self) -> WeekDay {
        self.week_day
    }

    #[must_use]
    pub fn formatted_day_of_month(&self) -> &str {
        &self.formatted_day_of_month
    }

    /// Returns the public holiday on this day in the region of the `calendar`.
    #[must_use]
    pub fn holiday(&self, calendar: HolidayCalendar) -> Option<Holiday> {
        calendar.holiday_on(self.date)
    }
}

impl From<Date> for Day {
    fn from(date: Date) -> Self {
        Self::new(date)
    }
}
