use serde::Serialize;

use crate::input::{Day, InvalidArgument};
use crate::time::{Month, Year};

/// The people and the month an attendance list is made for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceListData {
    fullnames: Vec<String>,
    month: Month,
    year: Year,
    days: Vec<Day>,
}

impl AttendanceListData {
    pub const MIN_YEAR: Year = Year::new(1);
    pub const MAX_YEAR: Year = Year::new(9999);

    /// Creates the data for an attendance list of the `month` in the `year`.
    ///
    /// # Errors
    ///
    /// If `fullnames` is empty or the `year` is not in `MIN_YEAR..=MAX_YEAR`.
    pub fn new(
        fullnames: impl IntoIterator<Item = impl Into<String>>,
        month: Month,
        year: Year,
    ) -> Result<Self, InvalidArgument> {
        let fullnames = fullnames.into_iter().map(Into::into).collect::<Vec<_>>();

        if fullnames.is_empty() {
            return Err(InvalidArgument::EmptyFullnames);
        }

        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(InvalidArgument::YearOutOfRange {
                year,
                min: Self::MIN_YEAR,
                max: Self::MAX_YEAR,
            });
        }

        let days = year.iter_days_in(month).map(Day::from).collect();

        Ok(Self {
            fullnames,
            month,
            year,
            days,
        })
    }

    /// Every day of the month in ascending order, starting with the first.
    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    #[must_use]
    pub fn fullnames(&self) -> &[String] {
        &self.fullnames
    }

    /// The number of name columns the table needs.
    #[must_use]
    pub fn max_number_of_fullnames(&self) -> usize {
        self.fullnames.len()
    }

    #[must_use]
    pub fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub fn year(&self) -> Year {
        self.year
    }
}
