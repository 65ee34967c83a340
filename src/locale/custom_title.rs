use formatx::formatx;

use crate::locale::LocalizedNames;
use crate::time::{Holiday, HolidayCalendar, Month, WeekDay, Year};

/// Replaces the document title of `N` with a user supplied template.
///
/// The template can use the placeholders `{month}` (the number),
/// `{month_name}` and `{year}`.
#[derive(Debug, Clone)]
pub struct CustomTitle<N> {
    names: N,
    template: String,
}

impl<N: LocalizedNames> CustomTitle<N> {
    pub fn new(names: N, template: impl Into<String>) -> anyhow::Result<Self> {
        let template = template.into();

        // ensure that the template is valid, so formatting it later can not fail
        Self::format(&template, &names, Month::January, Year::new(2000))
            .map_err(|e| anyhow::anyhow!("invalid title template `{}`: {}", template, e))?;

        Ok(Self { names, template })
    }

    fn format(
        template: &str,
        names: &N,
        month: Month,
        year: Year,
    ) -> Result<String, formatx::Error> {
        formatx!(
            template,
            month = month.as_usize(),
            month_name = names.month_name(month),
            year = year.as_usize()
        )
    }
}

impl<N: LocalizedNames> LocalizedNames for CustomTitle<N> {
    fn document_author(&self) -> &str {
        self.names.document_author()
    }

    fn application_catalog_name(&self) -> &str {
        self.names.application_catalog_name()
    }

    fn documents_catalog_name(&self) -> &str {
        self.names.documents_catalog_name()
    }

    fn week_day_name(&self, week_day: WeekDay) -> &str {
        self.names.week_day_name(week_day)
    }

    fn week_day_abbreviation(&self, week_day: WeekDay) -> &str {
        self.names.week_day_abbreviation(week_day)
    }

    fn month_name(&self, month: Month) -> &str {
        self.names.month_name(month)
    }

    fn holiday_name(&self, holiday: Holiday) -> &str {
        self.names.holiday_name(holiday)
    }

    fn holiday_calendar(&self) -> HolidayCalendar {
        self.names.holiday_calendar()
    }

    fn document_title(&self, month: Month, year: Year) -> String {
        Self::format(&self.template, &self.names, month, year)
            .unwrap_or_else(|_| self.names.document_title(month, year))
    }
}
