use crate::{MAX_MONTH, MAX_YEAR, MIN_YEAR, SolarDate};

/// Error type for constructing, parsing and converting dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LunarError {
    /// Lunar year outside the range covered by the calendar table.
    #[error("The {year} year you provided is out of range. This gem only support 1900 - 2099.")]
    OutOfRange { year: u16 },

    /// Lunar month ordinal outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day is zero or longer than the lunar month it names.
    #[error("Invalid day {day} for lunar month {year}-{month:02}{}", leap_suffix(.leap))]
    InvalidDay { year: u16, month: u8, day: u8, leap: bool },

    /// Leap flag set for a month that is not repeated in that year.
    #[error("Lunar year {year} has no leap month {month}")]
    NoLeapMonth { year: u16, month: u8 },

    /// Gregorian components that do not form a real date.
    #[error("Invalid solar date {year:04}-{month:02}-{day:02}")]
    InvalidSolarDate { year: u16, month: u8, day: u8 },

    /// Solar date outside the span covered by lunar years
    /// `MIN_YEAR..=MAX_YEAR`.
    #[error("Solar date {0} is outside lunar years {min}-{max}", min = MIN_YEAR, max = MAX_YEAR)]
    SolarOutOfRange(SolarDate),

    /// Input that is not a `YYYY-MM-DD` date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

const fn leap_suffix(leap: &bool) -> &'static str {
    if *leap { " (leap)" } else { "" }
}

impl LunarError {
    /// Returns the offending lunar year of an `OutOfRange` error.
    pub const fn year(&self) -> Option<u16> {
        match self {
            Self::OutOfRange { year } => Some(*year),
            _ => None,
        }
    }
}
