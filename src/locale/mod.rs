//! Display strings for week days, months, holidays and the document metadata.

use core::fmt;
use core::str::FromStr;

use serde::{de, Deserialize, Serialize};

use crate::time::{Holiday, HolidayCalendar, Month, WeekDay, Year};

mod custom_title;
mod english;
mod german;
mod polish;

pub use custom_title::*;
pub use english::*;
pub use german::*;
pub use polish::*;

/// Provides the localized strings that end up in an attendance list.
pub trait LocalizedNames {
    /// The author written into the document metadata.
    fn document_author(&self) -> &str;

    /// The directory name of this application inside the documents catalog.
    fn application_catalog_name(&self) -> &str;

    /// The directory name, where the user keeps their documents.
    fn documents_catalog_name(&self) -> &str;

    fn week_day_name(&self, week_day: WeekDay) -> &str;

    fn week_day_abbreviation(&self, week_day: WeekDay) -> &str;

    fn month_name(&self, month: Month) -> &str;

    fn holiday_name(&self, holiday: Holiday) -> &str;

    /// The region whose holidays are marked, if holidays are marked at all.
    fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::default()
    }

    fn document_title(&self, month: Month, year: Year) -> String;
}

impl<T: LocalizedNames + ?Sized> LocalizedNames for &T {
    fn document_author(&self) -> &str {
        (**self).document_author()
    }

    fn application_catalog_name(&self) -> &str {
        (**self).application_catalog_name()
    }

    fn documents_catalog_name(&self) -> &str {
        (**self).documents_catalog_name()
    }

    fn week_day_name(&self, week_day: WeekDay) -> &str {
        (**self).week_day_name(week_day)
    }

    fn week_day_abbreviation(&self, week_day: WeekDay) -> &str {
        (**self).week_day_abbreviation(week_day)
    }

    fn month_name(&self, month: Month) -> &str {
        (**self).month_name(month)
    }

    fn holiday_name(&self, holiday: Holiday) -> &str {
        (**self).holiday_name(holiday)
    }

    fn holiday_calendar(&self) -> HolidayCalendar {
        (**self).holiday_calendar()
    }

    fn document_title(&self, month: Month, year: Year) -> String {
        (**self).document_title(month, year)
    }
}

/// The languages an attendance list can be generated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    English,
    German,
    Polish,
}

impl Locale {
    #[must_use]
    pub fn names(&self) -> &'static dyn LocalizedNames {
        match self {
            Self::English => &English,
            Self::German => &German,
            Self::Polish => &Polish,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::Polish => "pl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "en" => Ok(Self::English),
            "de" => Ok(Self::German),
            "pl" => Ok(Self::Polish),
            _ => Err(anyhow::anyhow!(
                "unsupported locale `{}`, expected one of `en`, `de` or `pl`",
                string
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    const LOCALES: [Locale; 3] = [Locale::English, Locale::German, Locale::Polish];

    #[test]
    fn test_from_str() {
        for locale in LOCALES {
            assert_eq!(locale.code().parse::<Locale>().ok(), Some(locale));
        }

        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_every_name_is_present() {
        for locale in LOCALES {
            let names = locale.names();

            for week_day in WeekDay::week_days() {
                assert!(!names.week_day_name(week_day).is_empty());
                assert!(!names.week_day_abbreviation(week_day).is_empty());
            }

            for month in Month::months() {
                assert!(!names.month_name(month).is_empty());
            }

            for holiday in Holiday::holidays() {
                assert!(!names.holiday_name(holiday).is_empty());
            }

            assert!(!names.document_author().is_empty());
            assert!(!names.application_catalog_name().is_empty());
            assert!(!names.documents_catalog_name().is_empty());
        }
    }

    #[test]
    fn test_week_day_names_are_distinct() {
        for locale in LOCALES {
            let names = locale.names();
            let mut abbreviations = WeekDay::week_days()
                .map(|week_day| names.week_day_abbreviation(week_day))
                .to_vec();
            abbreviations.sort_unstable();
            abbreviations.dedup();

            assert_eq!(abbreviations.len(), 7, "duplicate abbreviation in {}", locale);
        }
    }

    #[test]
    fn test_document_title_mentions_month_and_year() {
        for locale in LOCALES {
            let names = locale.names();
            let title = names.document_title(Month::February, Year::new(2019));

            assert!(title.contains(names.month_name(Month::February)), "{}", title);
            assert!(title.contains("2019"), "{}", title);
        }
    }
}
