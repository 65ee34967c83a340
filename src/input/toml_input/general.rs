use serde::Deserialize;

use crate::locale::Locale;
use crate::time::{Month, Year};

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    month: Month,
    year: Year,
    #[serde(default)]
    locale: Locale,
    /// Replaces the default document title of the locale.
    title: Option<String>,
}

impl General {
    #[must_use]
    pub fn new(month: Month, year: Year, locale: Locale) -> Self {
        Self {
            month,
            year,
            locale,
            title: None,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
