mod month;
pub use month::*;
mod date;
pub use date::*;
mod holiday;
pub use holiday::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
