use serde::{Deserialize, Serialize};

use crate::time::{Date, Month, Year};

/// Public holidays of every supported [`HolidayCalendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Holiday {
    NewYear,
    Epiphany,
    GoodFriday,
    EasterMonday,
    LabourDay,
    ConstitutionDay,
    AscensionDay,
    WhitMonday,
    CorpusChristi,
    AssumptionDay,
    GermanUnityDay,
    AllSaintsDay,
    IndependenceDay,
    ChristmasDay,
    StStephensDay,
}

/// The region whose public holidays are marked in an attendance list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCalendar {
    #[default]
    BadenWuerttemberg,
    Poland,
}

/// Returns the date of easter sunday in the given year.
///
/// The algorithm is based on <https://en.wikipedia.org/wiki/Date_of_Easter#Anonymous_Gregorian_algorithm>
const fn easter_sunday(year: Year) -> Date {
    let year_number = year.as_usize();

    let a = year_number % 19;
    let b = year_number / 100;
    let c = year_number % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = (h + l - 7 * m + 114) / 31;
    let o = (h + l - 7 * m + 114) % 31;

    // SAFETY: easter is always in march or april
    unsafe { Date::new_unchecked(year, Month::new(n), o + 1) }
}

impl Holiday {
    const FIXED_HOLIDAYS: [(usize, Month, Self); 10] = [
        (1, Month::January, Self::NewYear),
        (6, Month::January, Self::Epiphany),
        (1, Month::May, Self::LabourDay),
        (3, Month::May, Self::ConstitutionDay),
        (15, Month::August, Self::AssumptionDay),
        (3, Month::October, Self::GermanUnityDay),
        (1, Month::November, Self::AllSaintsDay),
        (11, Month::November, Self::IndependenceDay),
        (25, Month::December, Self::ChristmasDay),
        (26, Month::December, Self::StStephensDay),
    ];

    /// Offsets in days relative to easter sunday.
    const EASTER_HOLIDAYS: [(isize, Self); 5] = [
        (-2, Self::GoodFriday),
        (1, Self::EasterMonday),
        (39, Self::AscensionDay),
        (50, Self::WhitMonday),
        (60, Self::CorpusChristi),
    ];

    pub const fn holidays() -> [Self; 15] {
        [
            Self::NewYear,
            Self::Epiphany,
            Self::GoodFriday,
            Self::EasterMonday,
            Self::LabourDay,
            Self::ConstitutionDay,
            Self::AscensionDay,
            Self::WhitMonday,
            Self::CorpusChristi,
            Self::AssumptionDay,
            Self::GermanUnityDay,
            Self::AllSaintsDay,
            Self::IndependenceDay,
            Self::ChristmasDay,
            Self::StStephensDay,
        ]
    }
}

impl HolidayCalendar {
    /// Whether the `holiday` is a day off in this region.
    #[must_use]
    pub const fn observes(&self, holiday: Holiday) -> bool {
        match self {
            Self::BadenWuerttemberg => !matches!(
                holiday,
                Holiday::ConstitutionDay | Holiday::AssumptionDay | Holiday::IndependenceDay
            ),
            Self::Poland => !matches!(
                holiday,
                Holiday::GoodFriday
                    | Holiday::AscensionDay
                    | Holiday::WhitMonday
                    | Holiday::GermanUnityDay
            ),
        }
    }

    /// Returns the holiday on the given date or `None` if the date is a regular day here.
    #[must_use]
    pub const fn holiday_on(&self, date: Date) -> Option<Holiday> {
        let mut i = 0;
        while i < Holiday::FIXED_HOLIDAYS.len() {
            let (day, month, holiday) = Holiday::FIXED_HOLIDAYS[i];

            if self.observes(holiday) && date.day() == day && date.month().is_eq(&month) {
                return Some(holiday);
            }

            i += 1;
        }

        let easter = easter_sunday(date.year()).days_since_base_date() as isize;
        let offset = date.days_since_base_date() as isize - easter;

        let mut i = 0;
        while i < Holiday::EASTER_HOLIDAYS.len() {
            let (holiday_offset, holiday) = Holiday::EASTER_HOLIDAYS[i];

            if self.observes(holiday) && offset == holiday_offset {
                return Some(holiday);
            }

            i += 1;
        }

        None
    }
}
