mod attendance_list_data;
mod config;
mod day;
mod invalid_argument;

pub mod toml_input;

pub use attendance_list_data::*;
pub use config::*;
pub use day::*;
pub use invalid_argument::*;
