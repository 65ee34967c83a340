use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display, Deserialize, Serialize,
)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn week_days() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// Returns the week day `days` after this one.
    #[must_use]
    pub const fn add_const(self, days: usize) -> Self {
        Self::week_days()[(self.as_usize() - 1 + days % 7) % 7]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_const() {
        assert_eq!(WeekDay::Monday.add_const(0), WeekDay::Monday);
        assert_eq!(WeekDay::Monday.add_const(6), WeekDay::Sunday);
        assert_eq!(WeekDay::Sunday.add_const(1), WeekDay::Monday);
        assert_eq!(WeekDay::Saturday.add_const(15), WeekDay::Sunday);

        for week_day in WeekDay::week_days() {
            assert_eq!(week_day.add_const(7 * 52), week_day);
        }
    }
}
