use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;

use crate::document::{
    Alignment, Color, Document, DocumentInfo, Font, PageSetup, Paragraph, Points, Table,
};
use crate::input::{AttendanceListData, Day, InvalidArgument};
use crate::locale::LocalizedNames;
use crate::time::{HolidayCalendar, WeekDay};

/// The day number and the week day abbreviation.
const NUMBER_OF_ADDITIONAL_COLUMNS: usize = 2;
const DOCUMENT_MARGINS: Points = 30.0;
const FULLNAMES_COLUMN_WIDTH: Points = 100.0;
const FIRST_COLUMN_WIDTH: Points = 25.0;
const SECOND_COLUMN_WIDTH: Points = 30.0;
const FONT_NAME: &str = "Times New Roman";

const fn default_true() -> bool {
    true
}

const fn default_heading_color() -> Color {
    Color::gray(220)
}

const fn default_saturday_color() -> Color {
    Color::gray(215)
}

const fn default_sunday_color() -> Color {
    Color::gray(192)
}

/// Optional parts of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentStyle {
    /// Whether the heading row and the weekends are shaded.
    #[serde(default = "default_true")]
    pub colors: bool,
    /// Writes the name of the holiday into the name columns of a holiday.
    #[serde(default)]
    pub mark_holidays: bool,
    /// Overrides the holiday region of the locale.
    #[serde(default)]
    pub holiday_calendar: Option<HolidayCalendar>,
    #[serde(default = "default_heading_color")]
    pub heading_color: Color,
    #[serde(default = "default_saturday_color")]
    pub saturday_color: Color,
    #[serde(default = "default_sunday_color")]
    pub sunday_color: Color,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            colors: true,
            mark_holidays: false,
            holiday_calendar: None,
            heading_color: default_heading_color(),
            saturday_color: default_saturday_color(),
            sunday_color: default_sunday_color(),
        }
    }
}

/// Maps a day of the month to the index of its row in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DayRows(BTreeMap<usize, usize>);

impl DayRows {
    fn insert(&mut self, day: &Day, row: usize) {
        self.0.insert(day.day_of_month(), row);
    }

    fn get(&self, day: &Day) -> Option<usize> {
        self.0.get(&day.day_of_month()).copied()
    }
}

pub struct DocumentGeneratorBuilder<N> {
    data: Option<AttendanceListData>,
    names: Option<N>,
    style: DocumentStyle,
}

impl<N: LocalizedNames> DocumentGeneratorBuilder<N> {
    pub fn data(&mut self, data: AttendanceListData) -> &mut Self {
        self.data = Some(data);
        self
    }

    pub fn names(&mut self, names: N) -> &mut Self {
        self.names = Some(names);
        self
    }

    pub fn style(&mut self, style: DocumentStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn colors(&mut self, colors: bool) -> &mut Self {
        self.style.colors = colors;
        self
    }

    /// # Errors
    ///
    /// If the data or the localized names have not been set.
    pub fn build(self) -> Result<AttendanceListDocumentGenerator<N>, InvalidArgument> {
        Ok(AttendanceListDocumentGenerator {
            data: self.data.ok_or(InvalidArgument::MissingData)?,
            names: self.names.ok_or(InvalidArgument::MissingLocalizedNames)?,
            style: self.style,
        })
    }
}

/// Lays out the attendance list of one month.
pub struct AttendanceListDocumentGenerator<N> {
    data: AttendanceListData,
    names: N,
    style: DocumentStyle,
}

impl<N: LocalizedNames> AttendanceListDocumentGenerator<N> {
    #[must_use]
    pub fn builder() -> DocumentGeneratorBuilder<N> {
        DocumentGeneratorBuilder {
            data: None,
            names: None,
            style: DocumentStyle::default(),
        }
    }

    pub fn new(data: AttendanceListData, names: N) -> Self {
        Self {
            data,
            names,
            style: DocumentStyle::default(),
        }
    }

    #[must_use]
    pub fn data(&self) -> &AttendanceListData {
        &self.data
    }

    #[must_use]
    pub fn names(&self) -> &N {
        &self.names
    }

    #[must_use]
    pub fn style(&self) -> &DocumentStyle {
        &self.style
    }

    #[must_use]
    pub fn generate_document(&self) -> Document {
        let title = self.names.document_title(self.data.month(), self.data.year());

        let (mut table, day_rows) = self.create_table();

        self.change_table_format(&mut table);

        if self.style.colors {
            self.add_colors_to_the_table(&mut table, &day_rows);
        }

        debug!(
            "generated a table with {} rows and {} columns",
            table.rows.len(),
            table.column_count()
        );

        Document {
            info: DocumentInfo {
                title: title.clone(),
                author: self.names.document_author().to_string(),
            },
            page_setup: PageSetup::landscape_with_margins(DOCUMENT_MARGINS),
            heading: Self::create_document_heading(title),
            table,
        }
    }

    fn holiday_calendar(&self) -> HolidayCalendar {
        self.style
            .holiday_calendar
            .unwrap_or_else(|| self.names.holiday_calendar())
    }

    fn create_document_heading(title: String) -> Paragraph {
        Paragraph {
            alignment: Alignment::Center,
            font: Some(Font::new(FONT_NAME, 18.0).bold()),
            space_after: 15.0,
            ..Paragraph::new(title)
        }
    }

    fn create_table(&self) -> (Table, DayRows) {
        let number_of_table_columns =
            self.data.max_number_of_fullnames() + NUMBER_OF_ADDITIONAL_COLUMNS;

        let mut table = Table::new(number_of_table_columns, FULLNAMES_COLUMN_WIDTH);

        self.add_row_with_fullnames_to_the_table(&mut table);

        let mut day_rows = DayRows::default();
        for day in self.data.days() {
            let row = self.add_day_to_the_table(&mut table, day);
            day_rows.insert(day, row);
        }

        (table, day_rows)
    }

    fn add_row_with_fullnames_to_the_table(&self, table: &mut Table) {
        let index = table.add_row();
        let row = &mut table.rows[index];

        for (cell, fullname) in row
            .cells
            .iter_mut()
            .skip(NUMBER_OF_ADDITIONAL_COLUMNS)
            .zip(self.data.fullnames())
        {
            cell.text = fullname.clone();
        }
    }

    fn add_day_to_the_table(&self, table: &mut Table, day: &Day) -> usize {
        let index = table.add_row();
        let row = &mut table.rows[index];

        row.cells[0].text = day.formatted_day_of_month().to_string();
        row.cells[1].text = self
            .names
            .week_day_abbreviation(day.week_day())
            .to_string();

        let filler = {
            if day.week_day() == WeekDay::Sunday {
                Some(self.names.week_day_name(WeekDay::Sunday).to_uppercase())
            } else if self.style.mark_holidays {
                day.holiday(self.holiday_calendar())
                    .map(|holiday| self.names.holiday_name(holiday).to_string())
            } else {
                None
            }
        };

        if let Some(text) = filler {
            for cell in row.cells.iter_mut().skip(NUMBER_OF_ADDITIONAL_COLUMNS) {
                cell.text = text.clone();
                cell.alignment = Alignment::Center;
            }
        }

        index
    }

    fn change_table_format(&self, table: &mut Table) {
        table.border_color = Some(Color::BLACK);

        // the two cells above the day columns look like they are not part of the table
        for cell in &mut table.rows[0].cells[..NUMBER_OF_ADDITIONAL_COLUMNS] {
            cell.borders.top = false;
            cell.borders.left = false;
            cell.borders.right = false;
        }

        table.columns[0].width = FIRST_COLUMN_WIDTH;
        table.columns[1].width = SECOND_COLUMN_WIDTH;

        for column in &mut table.columns[NUMBER_OF_ADDITIONAL_COLUMNS..] {
            column.width = FULLNAMES_COLUMN_WIDTH;
        }

        table.font = Some(Font::new(FONT_NAME, 12.0));
        table.rows[0].font = Some(Font::new(FONT_NAME, 14.0).bold());
    }

    fn add_colors_to_the_table(&self, table: &mut Table, day_rows: &DayRows) {
        let first_row = &mut table.rows[0];
        first_row.shading = Some(self.style.heading_color);

        for cell in &mut first_row.cells[..NUMBER_OF_ADDITIONAL_COLUMNS] {
            cell.shading = Some(Color::WHITE);
        }

        for day in self.data.days() {
            let color = match day.week_day() {
                WeekDay::Saturday => self.style.saturday_color,
                WeekDay::Sunday => self.style.sunday_color,
                _ => continue,
            };

            // every day has been added to the table in `create_table`
            if let Some(index) = day_rows.get(day) {
                table.rows[index].shading = Some(color);
            }
        }
    }
}
