use crate::locale::LocalizedNames;
use crate::time::{Holiday, HolidayCalendar, Month, WeekDay, Year};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Polish;

impl LocalizedNames for Polish {
    fn document_author(&self) -> &str {
        "Generator list obecności"
    }

    fn application_catalog_name(&self) -> &str {
        "Listy obecności"
    }

    fn documents_catalog_name(&self) -> &str {
        "Dokumenty"
    }

    fn week_day_name(&self, week_day: WeekDay) -> &str {
        match week_day {
            WeekDay::Monday => "Poniedziałek",
            WeekDay::Tuesday => "Wtorek",
            WeekDay::Wednesday => "Środa",
            WeekDay::Thursday => "Czwartek",
            WeekDay::Friday => "Piątek",
            WeekDay::Saturday => "Sobota",
            WeekDay::Sunday => "Niedziela",
        }
    }

    fn week_day_abbreviation(&self, week_day: WeekDay) -> &str {
        match week_day {
            WeekDay::Monday => "Pn",
            WeekDay::Tuesday => "Wt",
            WeekDay::Wednesday => "Śr",
            WeekDay::Thursday => "Cz",
            WeekDay::Friday => "Pt",
            WeekDay::Saturday => "Sb",
            WeekDay::Sunday => "Nd",
        }
    }

    fn month_name(&self, month: Month) -> &str {
        match month {
            Month::January => "Styczeń",
            Month::February => "Luty",
            Month::March => "Marzec",
            Month::April => "Kwiecień",
            Month::May => "Maj",
            Month::June => "Czerwiec",
            Month::July => "Lipiec",
            Month::August => "Sierpień",
            Month::September => "Wrzesień",
            Month::October => "Październik",
            Month::November => "Listopad",
            Month::December => "Grudzień",
        }
    }

    fn holiday_name(&self, holiday: Holiday) -> &str {
        match holiday {
            Holiday::NewYear => "Nowy Rok",
            Holiday::Epiphany => "Święto Trzech Króli",
            Holiday::GoodFriday => "Wielki Piątek",
            Holiday::EasterMonday => "Poniedziałek Wielkanocny",
            Holiday::LabourDay => "Święto Pracy",
            Holiday::ConstitutionDay => "Święto Konstytucji 3 Maja",
            Holiday::AscensionDay => "Wniebowstąpienie Pańskie",
            Holiday::WhitMonday => "Poniedziałek Zielonoświątkowy",
            Holiday::CorpusChristi => "Boże Ciało",
            Holiday::AssumptionDay => "Wniebowzięcie Najświętszej Maryi Panny",
            Holiday::GermanUnityDay => "Dzień Jedności Niemiec",
            Holiday::AllSaintsDay => "Wszystkich Świętych",
            Holiday::IndependenceDay => "Narodowe Święto Niepodległości",
            Holiday::ChristmasDay => "Boże Narodzenie",
            Holiday::StStephensDay => "Drugi dzień Bożego Narodzenia",
        }
    }

    fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::Poland
    }

    fn document_title(&self, month: Month, year: Year) -> String {
        format!("Lista obecności - {} {}", self.month_name(month), year)
    }
}
