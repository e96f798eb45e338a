use crate::consts::{
    CENTURY_CYCLE, COMMON_YEAR_DAYS, DATE_SEPARATOR, DAYS_IN_MONTH, DECEMBER, EPOCH_SOLAR,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LAST_SOLAR, LEAP_YEAR_CYCLE,
    LEAP_YEAR_DAYS, MIN_DAY,
};
use crate::{LunarError, prelude::*};
use std::str::FromStr;

/// A Gregorian calendar date, always displayed as `YYYY-MM-DD`.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct SolarDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl SolarDate {
    /// Solar date of lunar 1900-01-01, offset 0 of every conversion
    pub const EPOCH: Self = Self {
        year:  EPOCH_SOLAR.0,
        month: EPOCH_SOLAR.1,
        day:   EPOCH_SOLAR.2,
    };

    /// Solar date of the last day of lunar year 2099
    pub const LAST: Self = Self {
        year:  LAST_SOLAR.0,
        month: LAST_SOLAR.1,
        day:   LAST_SOLAR.2,
    };

    /// Creates a new solar date, validating month and day against the
    /// Gregorian calendar
    ///
    /// # Errors
    /// Returns `LunarError::InvalidSolarDate` if the year is 0, the month is
    /// outside `1..=12`, or the day does not exist in that month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, LunarError> {
        let invalid = LunarError::InvalidSolarDate { year, month, day };
        if year == 0 || !(JANUARY..=DECEMBER).contains(&month) {
            return Err(invalid);
        }
        if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
            return Err(invalid);
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Zero-based day of the year
    fn ordinal0(&self) -> u16 {
        let before: u16 = (JANUARY..self.month)
            .map(|m| u16::from(days_in_month(self.year, m)))
            .sum();
        before + u16::from(self.day - MIN_DAY)
    }

    /// Number of days from [`Self::EPOCH`] to this date, `None` for dates
    /// before the epoch
    pub fn days_since_epoch(&self) -> Option<u32> {
        if *self < Self::EPOCH {
            return None;
        }
        let full_years: u32 = (Self::EPOCH.year..self.year)
            .map(|y| u32::from(days_in_year(y)))
            .sum();
        Some(full_years + u32::from(self.ordinal0()) - u32::from(Self::EPOCH.ordinal0()))
    }

    /// Date `offset` days after [`Self::EPOCH`].
    ///
    /// Callers pass offsets taken from the lunar table, which end in year 2100.
    pub(crate) fn from_epoch_offset(offset: u32) -> Self {
        let mut year = Self::EPOCH.year;
        let mut remaining = offset + u32::from(Self::EPOCH.ordinal0());
        while remaining >= u32::from(days_in_year(year)) {
            remaining -= u32::from(days_in_year(year));
            year += 1;
        }

        let mut month = JANUARY;
        while remaining >= u32::from(days_in_month(year, month)) {
            remaining -= u32::from(days_in_month(year, month));
            month += 1;
        }

        // remaining < 31 here
        let day = MIN_DAY + remaining as u8;
        Self { year, month, day }
    }
}

impl FromStr for SolarDate {
    type Err = LunarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(LunarError::InvalidFormat(s.to_owned()));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| LunarError::InvalidFormat(s.to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| LunarError::InvalidFormat(s.to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| LunarError::InvalidFormat(s.to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for SolarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for SolarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) { LEAP_YEAR_DAYS } else { COMMON_YEAR_DAYS }
}
