use thiserror::Error;

use crate::time::Year;

/// The only kind of error the layout core raises. It is always detected
/// while constructing a value, never during document generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("the list of fullnames must not be empty")]
    EmptyFullnames,
    #[error("year {year} is not supported, expected a year in {min}..={max}")]
    YearOutOfRange { year: Year, min: Year, max: Year },
    #[error("{number} is not a valid month number, expected a number in 1..=12")]
    InvalidMonth { number: usize },
    #[error("missing attendance list data")]
    MissingData,
    #[error("missing localized names")]
    MissingLocalizedNames,
}
