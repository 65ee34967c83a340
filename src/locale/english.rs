use crate::locale::LocalizedNames;
use crate::time::{Holiday, Month, WeekDay, Year};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct English;

impl LocalizedNames for English {
    fn document_author(&self) -> &str {
        "Attendance List Generator"
    }

    fn application_catalog_name(&self) -> &str {
        "Attendance Lists"
    }

    fn documents_catalog_name(&self) -> &str {
        "Documents"
    }

    fn week_day_name(&self, week_day: WeekDay) -> &str {
        match week_day {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
            WeekDay::Saturday => "Saturday",
            WeekDay::Sunday => "Sunday",
        }
    }

    fn week_day_abbreviation(&self, week_day: WeekDay) -> &str {
        match week_day {
            WeekDay::Monday => "Mon",
            WeekDay::Tuesday => "Tue",
            WeekDay::Wednesday => "Wed",
            WeekDay::Thursday => "Thu",
            WeekDay::Friday => "Fri",
            WeekDay::Saturday => "Sat",
            WeekDay::Sunday => "Sun",
        }
    }

    fn month_name(&self, month: Month) -> &str {
        match month {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    fn holiday_name(&self, holiday: Holiday) -> &str {
        match holiday {
            Holiday::NewYear => "New Year's Day",
            Holiday::Epiphany => "Epiphany",
            Holiday::GoodFriday => "Good Friday",
            Holiday::EasterMonday => "Easter Monday",
            Holiday::LabourDay => "Labour Day",
            Holiday::ConstitutionDay => "Constitution Day",
            Holiday::AscensionDay => "Ascension Day",
            Holiday::WhitMonday => "Whit Monday",
            Holiday::CorpusChristi => "Corpus Christi",
            Holiday::AssumptionDay => "Assumption Day",
            Holiday::GermanUnityDay => "German Unity Day",
            Holiday::AllSaintsDay => "All Saints' Day",
            Holiday::IndependenceDay => "Independence Day",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::StStephensDay => "St. Stephen's Day",
        }
    }

    fn document_title(&self, month: Month, year: Year) -> String {
        format!("Attendance list - {} {}", self.month_name(month), year)
    }
}
