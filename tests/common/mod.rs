use attendance_list::document::{Document, Table};
use attendance_list::input::toml_input::Attendance;
use attendance_list::input::Config;

#[must_use]
pub fn make_attendance(month: usize, year: usize, fullnames: &[&str]) -> String {
    format!(
        concat!(
            "[general]\n",
            "month = {}\n",
            "year = {}\n",
            "\n",
            "[people]\n",
            "fullnames = {:?}\n",
        ),
        month, year, fullnames
    )
}

#[must_use]
#[allow(dead_code)]
pub fn make_document(attendance: &str) -> Document {
    let attendance: Attendance = toml::from_str(attendance).expect("toml should be valid");

    Config::try_from_toml(attendance)
        .build()
        .expect("config should be valid")
        .generate_document()
        .expect("document should be generated")
}

#[must_use]
#[allow(dead_code)]
pub fn column(table: &Table, index: usize) -> Vec<&str> {
    table.column_texts(index).collect()
}
