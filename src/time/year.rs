use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::iter_const;
use crate::time::{Date, Month, WeekDay};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize, Display,
)]
#[serde(from = "usize")]
#[serde(into = "usize")]
#[display("{}", _0)]
pub struct Year(usize);

impl Year {
    /// Choose the date 0000/01/01 as a base date, because it does not make sense to got past this date.
    const BASE_DATE: (Self, Month, usize, WeekDay) =
        (Self(0), Month::January, 1, WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.as_usize() % 4 == 0 && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// The number of days in this year before the first day of `month`.
    #[must_use]
    pub(super) const fn days_before_month(&self, month: Month) -> usize {
        let mut result = 0;

        iter_const!(for i in 1,..month.as_usize() => {
            result += self.number_of_days_in_month(Month::new(i));
        });

        result
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (_, _, day_ref, week_day_ref) = Self::BASE_DATE;

        let days =
            self.days_since_base_date() + self.days_before_month(month) + (day - day_ref);

        week_day_ref.add_const(days)
    }

    /// Returns the number of days between the first day of the base year and the
    /// first day of this year.
    pub(super) const fn days_since_base_date(&self) -> usize {
        let year = self.as_usize();
        if year == 0 {
            return 0;
        }

        // the base year 0 is a leap year itself, which is why one is added
        let leap_years = (year - 1) / 4 - (year - 1) / 100 + (year - 1) / 400 + 1;

        year * 365 + leap_years
    }

    /// Iterates over every date in the `month` of this year in ascending order.
    pub fn iter_days_in(&self, month: Month) -> impl Iterator<Item = Date> + Clone {
        let year = *self;

        (1..=year.number_of_days_in_month(month)).map(move |day| {
            // SAFETY: the day is in the range of valid days for the month
            unsafe { Date::new_unchecked(year, month, day) }
        })
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_leap_year() {
        // from: https://www.calendar.best/leap-years.html
        macro_rules! assert_leap_years {
            ( $( $year:expr ),* $(,)? ) => {
                $(
                    assert!(
                        Year::new($year).is_leap_year(),
                        concat!(stringify!($year), " should be a leap year")
                    );
                )*
            };
        }

        macro_rules! assert_not_leap_years {
            ( $( $year:expr ),* $(,)? ) => {
                $(
                    assert!(
                        !Year::new($year).is_leap_year(),
                        concat!(stringify!($year), " should not be a leap year")
                    );
                )*
            };
        }

        assert_leap_years![
            1904, 1908, 1912, 1916, 1920, 1924, 1928, 1932, 1936, 1940, 1944, 1948, 1952, 1956,
            1960, 1964, 1968, 1972, 1976, 1980, 1984, 1988, 1992, 1996, 2000, 2004, 2008, 2012,
            2016, 2020, 2024, 2028, 2032, 2036, 2040, 2044, 2048, 2052, 2056, 2060, 2064, 2068,
            2072, 2076, 2080, 2084, 2088, 2092, 2096
        ];

        assert_not_leap_years![
            1900, 1901, 1902, 1903, 1905, 1906, 1907, 1909, 1910, 1911, 1913, 1914, 1915, 1917,
            1918, 1919, 1921, 1922, 1923, 1925, 1926, 1927, 1929, 1930, 1931, 2019, 2023, 2100,
            2200, 2300, 2500, 2600, 2700, 2900, 3000
        ];
    }

    #[test]
    fn test_number_of_days_in_february() {
        for year in [2000, 2020, 2024] {
            assert_eq!(Year::new(year).number_of_days_in_month(Month::February), 29);
        }

        for year in [1900, 2019, 2023] {
            assert_eq!(Year::new(year).number_of_days_in_month(Month::February), 28);
        }
    }

    #[test]
    fn test_days_since_base_date() {
        let mut elapsed_days = 0;
        let mut year = Year::new(0);
        while year <= Year::new(2030) {
            assert_eq!(
                year.days_since_base_date(),
                elapsed_days,
                "{} days since the base date",
                year,
            );
            elapsed_days += if year.is_leap_year() { 366 } else { 365 };
            year = Year::new(year.as_usize() + 1);
        }
    }

    #[test]
    fn test_days_before_month() {
        let year = Year::new(2000);
        assert_eq!(year.days_before_month(Month::January), 0);
        assert_eq!(year.days_before_month(Month::March), 31 + 29);
        assert_eq!(year.days_before_month(Month::December), 366 - 31);
    }

    #[test]
    fn test_week_day() {
        assert_eq!(Year::new(2000).week_day(Month::January, 2), WeekDay::Sunday);
        assert_eq!(Year::new(2000).week_day(Month::January, 3), WeekDay::Monday);
        assert_eq!(
            Year::new(2000).week_day(Month::January, 4),
            WeekDay::Tuesday
        );

        assert_eq!(
            Year::new(2001).week_day(Month::January, 15),
            WeekDay::Monday
        );
        assert_eq!(Year::new(2002).week_day(Month::March, 10), WeekDay::Sunday);
        assert_eq!(
            Year::new(2019).week_day(Month::February, 10),
            WeekDay::Sunday
        );
        assert_eq!(
            Year::new(2021).week_day(Month::December, 24),
            WeekDay::Friday
        );
    }

    #[test]
    fn test_iter_days_in() {
        let days = Year::new(2019)
            .iter_days_in(Month::February)
            .map(|date| date.day())
            .collect::<Vec<_>>();

        assert_eq!(days, (1..=28).collect::<Vec<_>>());
    }
}
