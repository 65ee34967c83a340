use serde::Deserialize;

use crate::input::toml_input::{General, Output, People};
use crate::layout::DocumentStyle;

/// The content of an attendance list file.
#[derive(Debug, Clone, Deserialize)]
pub struct Attendance {
    general: General,
    people: People,
    #[serde(default)]
    style: DocumentStyle,
    #[serde(default)]
    output: Output,
}

impl Attendance {
    #[must_use]
    pub fn new(general: General, people: People) -> Self {
        Self {
            general,
            people,
            style: DocumentStyle::default(),
            output: Output::default(),
        }
    }

    #[must_use]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[must_use]
    pub fn people(&self) -> &People {
        &self.people
    }

    #[must_use]
    pub fn style(&self) -> &DocumentStyle {
        &self.style
    }

    #[must_use]
    pub fn output(&self) -> &Output {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::document::Color;
    use crate::locale::Locale;
    use crate::time::{HolidayCalendar, Month, Year};

    #[test]
    fn test_minimal_file() {
        let attendance: Attendance = toml::from_str(concat!(
            "[general]\n",
            "month = 2\n",
            "year = 2019\n",
            "\n",
            "[people]\n",
            "fullnames = [\"Alice\", \"Bob\"]\n",
        ))
        .expect("toml should be valid");

        assert_eq!(attendance.general().month(), Month::February);
        assert_eq!(attendance.general().year(), Year::new(2019));
        assert_eq!(attendance.general().locale(), Locale::English);
        assert_eq!(attendance.general().title(), None);
        assert_eq!(attendance.people().fullnames(), &["Alice", "Bob"]);
        assert_eq!(attendance.style(), &DocumentStyle::default());
        assert_eq!(attendance.output().filename(), "{year}-{month}.pdf");
        assert_eq!(attendance.output().directory(), None);
    }

    #[test]
    fn test_full_file() {
        let attendance: Attendance = toml::from_str(concat!(
            "[general]\n",
            "month = 12\n",
            "year = 2023\n",
            "locale = \"pl\"\n",
            "title = \"{month_name} {year}\"\n",
            "\n",
            "[people]\n",
            "fullnames = [\"Anna\"]\n",
            "\n",
            "[style]\n",
            "colors = false\n",
            "mark_holidays = true\n",
            "holiday_calendar = \"baden_wuerttemberg\"\n",
            "sunday_color = [255, 0, 0]\n",
            "\n",
            "[output]\n",
            "directory = \"lists\"\n",
            "filename = \"december.pdf\"\n",
            "latex_mk_path = \"/usr/bin/latexmk\"\n",
        ))
        .expect("toml should be valid");

        assert_eq!(attendance.general().locale(), Locale::Polish);
        assert_eq!(attendance.general().title(), Some("{month_name} {year}"));
        assert_eq!(
            attendance.style(),
            &DocumentStyle {
                colors: false,
                mark_holidays: true,
                holiday_calendar: Some(HolidayCalendar::BadenWuerttemberg),
                sunday_color: Color::new(255, 0, 0),
                ..DocumentStyle::default()
            }
        );
        assert_eq!(
            attendance.output().directory(),
            Some(std::path::Path::new("lists"))
        );
        assert_eq!(attendance.output().filename(), "december.pdf");
        assert_eq!(
            attendance.output().latex_mk_path(),
            Some(std::path::Path::new("/usr/bin/latexmk"))
        );
    }

    #[test]
    fn test_unknown_locale() {
        let result = toml::from_str::<Attendance>(concat!(
            "[general]\n",
            "month = 2\n",
            "year = 2019\n",
            "locale = \"xx\"\n",
            "\n",
            "[people]\n",
            "fullnames = [\"Alice\"]\n",
        ));

        assert!(result.is_err());
    }
}
