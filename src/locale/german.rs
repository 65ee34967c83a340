use crate::locale::LocalizedNames;
use crate::time::{Holiday, Month, WeekDay, Year};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct German;

impl LocalizedNames for German {
    fn document_author(&self) -> &str {
        "Anwesenheitslisten-Generator"
    }

    fn application_catalog_name(&self) -> &str {
        "Anwesenheitslisten"
    }

    fn documents_catalog_name(&self) -> &str {
        "Dokumente"
    }

    fn week_day_name(&self, week_day: WeekDay) -> &str {
        match week_day {
            WeekDay::Monday => "Montag",
            WeekDay::Tuesday => "Dienstag",
            WeekDay::Wednesday => "Mittwoch",
            WeekDay::Thursday => "Donnerstag",
            WeekDay::Friday => "Freitag",
            WeekDay::Saturday => "Samstag",
            WeekDay::Sunday => "Sonntag",
        }
    }

    fn week_day_abbreviation(&self, week_day: WeekDay) -> &str {
        match week_day {
            WeekDay::Monday => "Mo",
            WeekDay::Tuesday => "Di",
            WeekDay::Wednesday => "Mi",
            WeekDay::Thursday => "Do",
            WeekDay::Friday => "Fr",
            WeekDay::Saturday => "Sa",
            WeekDay::Sunday => "So",
        }
    }

    fn month_name(&self, month: Month) -> &str {
        match month {
            Month::January => "Januar",
            Month::February => "Februar",
            Month::March => "März",
            Month::April => "April",
            Month::May => "Mai",
            Month::June => "Juni",
            Month::July => "Juli",
            Month::August => "August",
            Month::September => "September",
            Month::October => "Oktober",
            Month::November => "November",
            Month::December => "Dezember",
        }
    }

    fn holiday_name(&self, holiday: Holiday) -> &str {
        match holiday {
            Holiday::NewYear => "Neujahr",
            Holiday::Epiphany => "Heilige Drei Könige",
            Holiday::GoodFriday => "Karfreitag",
            Holiday::EasterMonday => "Ostermontag",
            Holiday::LabourDay => "Tag der Arbeit",
            Holiday::ConstitutionDay => "Tag der Verfassung",
            Holiday::AscensionDay => "Christi Himmelfahrt",
            Holiday::WhitMonday => "Pfingstmontag",
            Holiday::CorpusChristi => "Fronleichnam",
            Holiday::AssumptionDay => "Mariä Himmelfahrt",
            Holiday::GermanUnityDay => "Tag der deutschen Einheit",
            Holiday::AllSaintsDay => "Allerheiligen",
            Holiday::IndependenceDay => "Unabhängigkeitstag",
            Holiday::ChristmasDay => "1. Weihnachtsfeiertag",
            Holiday::StStephensDay => "2. Weihnachtsfeiertag",
        }
    }

    fn document_title(&self, month: Month, year: Year) -> String {
        format!("Anwesenheitsliste - {} {}", self.month_name(month), year)
    }
}
