use derive_more::Display;
use thiserror::Error;

/// A day of the week, numbered the way the upstream snapshots number them:
/// 0 is Sunday, 6 is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum WeekDay {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl WeekDay {
    /// All days, Sunday first.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    #[must_use]
    pub const fn as_index(&self) -> usize {
        *self as usize
    }

    pub(crate) const fn from_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("week days are numbered 0 (Sunday) to 6 (Saturday), got {0}")]
pub struct InvalidWeekDayNumber(pub u8);

impl TryFrom<u8> for WeekDay {
    type Error = InvalidWeekDayNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 6 {
            return Err(InvalidWeekDayNumber(value));
        }

        Ok(Self::from_index(value))
    }
}
