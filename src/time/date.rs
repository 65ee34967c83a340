use core::fmt;

use thiserror::Error;

use crate::time::{Month, WeekDay, Year};

#[cfg(test)]
#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// # Safety
    ///
    /// The day must exist in the given month of the given year.
    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    pub const fn week_day(&self) -> WeekDay {
        self.year().week_day(self.month(), self.day())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    /// Returns the number of days that have passed since 0000-01-01.
    #[must_use]
    pub(super) const fn days_since_base_date(&self) -> usize {
        self.year.days_since_base_date() + self.year.days_before_month(self.month) + self.day - 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("{day:02} is not a valid day for {:04}-{:02}", .year.as_usize(), .month.as_usize())]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_to_string() {
        assert_eq!(date!(2019:02:10).to_string(), "2019-02-10".to_string());
        assert_eq!(date!(0999:12:31).to_string(), "0999-12-31".to_string());
    }

    #[test]
    fn test_new_rejects_day_zero() {
        assert!(Date::new(Year::new(2024), Month::January, 0).is_err());
        assert!(Date::new(Year::new(2024), Month::February, 29).is_ok());
        assert!(Date::new(Year::new(2023), Month::February, 29).is_err());
    }

    #[test]
    fn test_days_since_base_date() {
        assert_eq!(date!(0000:01:01).days_since_base_date(), 0);
        assert_eq!(date!(0000:12:31).days_since_base_date(), 365);
        assert_eq!(date!(0001:01:01).days_since_base_date(), 366);
        assert_eq!(
            date!(2019:03:01).days_since_base_date() - date!(2019:02:28).days_since_base_date(),
            1
        );
    }
}
