//! Chinese lunar calendar dates for lunar years 1900-2099.
//!
//! A [`LunarDate`] is validated against a compiled-in table of month lengths
//! and leap months, converts to its Gregorian [`SolarDate`], and renders in
//! Chinese numerals.
//!
//! ```
//! use lunar_date::{FormatOptions, LunarDate};
//!
//! let date = LunarDate::new(2017, 6, 6, true).unwrap();
//! assert_eq!(date.to_solar().to_string(), "2017-07-28");
//! assert_eq!(date.to_chinese(FormatOptions::default().with_year(true)), "二〇一七年闰六月初六");
//! ```

mod consts;
mod error;
pub mod fmt;
mod prelude;
mod solar;
pub mod table;
#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use error::LunarError;
pub use fmt::FormatOptions;
pub use solar::{SolarDate, days_in_month, days_in_year, is_leap_year};
pub use table::LunarYearInfo;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// A validated date in the Chinese lunar calendar.
///
/// `leap` selects the repeated instance of `month` in years that have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year:   u16,
    month:  u8,
    day:    u8,
    leap:   bool,
    /// Days since lunar 1900-01-01
    offset: u32,
}

/// Unvalidated wire form of [`LunarDate`].
#[derive(Serialize, Deserialize)]
struct RawLunarDate {
    year:  u16,
    month: u8,
    day:   u8,
    #[serde(default)]
    leap:  bool,
}

impl LunarDate {
    /// Creates a lunar date, validating it against the calendar table.
    ///
    /// The year is checked before any other field.
    ///
    /// # Errors
    /// - `LunarError::OutOfRange` if `year` is outside `MIN_YEAR..=MAX_YEAR`.
    /// - `LunarError::InvalidMonth` if `month` is outside `1..=12`.
    /// - `LunarError::NoLeapMonth` if `leap` is set and the year does not
    ///   repeat `month`.
    /// - `LunarError::InvalidDay` if `day` is 0 or past the end of the month.
    pub fn new(year: u16, month: u8, day: u8, leap: bool) -> Result<Self, LunarError> {
        let info = table::lookup(year)?;
        if !(FIRST_MONTH..=MAX_MONTH).contains(&month) {
            return Err(LunarError::InvalidMonth(month));
        }
        let Some(days_before_month) = info.days_before_month(month, leap) else {
            return Err(LunarError::NoLeapMonth { year, month });
        };
        let month_days = info.days_in_month(month, leap).unwrap_or_default();
        if !(MIN_DAY..=month_days).contains(&day) {
            return Err(LunarError::InvalidDay {
                year,
                month,
                day,
                leap,
            });
        }

        let offset = table::days_before_year(year)?
            + u32::from(days_before_month)
            + u32::from(day - MIN_DAY);

        Ok(Self {
            year,
            month,
            day,
            leap,
            offset,
        })
    }

    /// Creates a lunar date in a regular (non-leap) month
    ///
    /// # Errors
    /// Same as [`LunarDate::new`].
    pub fn common(year: u16, month: u8, day: u8) -> Result<Self, LunarError> {
        Self::new(year, month, day, false)
    }

    /// Returns the lunar year as supplied
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the lunar month ordinal as supplied
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the lunar month as supplied
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns whether this date falls in the leap instance of its month
    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.leap
    }

    /// Converts to the Gregorian calendar.
    pub fn to_solar(&self) -> SolarDate {
        let solar = SolarDate::from_epoch_offset(self.offset);
        debug!(
            year = self.year,
            month = self.month,
            day = self.day,
            leap = self.leap,
            offset = self.offset,
            %solar,
            "converted lunar date to solar"
        );
        solar
    }

    /// Converts to the Gregorian calendar formatted as `YYYY-MM-DD`.
    pub fn to_solar_string(&self) -> String {
        self.to_solar().to_string()
    }

    /// Converts a Gregorian date to the lunar calendar.
    ///
    /// # Errors
    /// Returns `LunarError::SolarOutOfRange` for dates before
    /// [`SolarDate::EPOCH`] or after [`SolarDate::LAST`].
    pub fn from_solar(date: SolarDate) -> Result<Self, LunarError> {
        let offset = date
            .days_since_epoch()
            .ok_or(LunarError::SolarOutOfRange(date))?;
        let (info, mut rest) =
            table::year_containing(offset).ok_or(LunarError::SolarOutOfRange(date))?;

        for (month, leap, length) in info.months() {
            let length = u32::from(length);
            if rest < length {
                // rest < 30 here
                let day = MIN_DAY + rest as u8;
                debug!(%date, year = info.year(), month, day, leap, "converted solar date to lunar");
                return Ok(Self {
                    year: info.year(),
                    month,
                    day,
                    leap,
                    offset,
                });
            }
            rest -= length;
        }

        Err(LunarError::SolarOutOfRange(date))
    }

    /// Renders the date in Chinese numerals, e.g. `五月初五` or, with the
    /// year, `一九八三年五月初五`.
    pub fn to_chinese(&self, options: FormatOptions) -> String {
        let mut rt = String::new();
        if options.with_year {
            rt += &fmt::year(self.year);
        }
        rt += &fmt::month(self.month, self.leap);
        rt += fmt::day(self.day);
        rt
    }

    /// Stem-branch name of the lunar year, e.g. `丁酉`
    pub fn sexagenary_year(&self) -> String {
        fmt::sexagenary(self.year)
    }

    /// Zodiac animal of the lunar year, e.g. `鸡`
    pub fn zodiac(&self) -> &'static str {
        fmt::zodiac(self.year)
    }

    /// Table entry for this date's year
    pub fn year_info(&self) -> Result<&'static LunarYearInfo, LunarError> {
        table::lookup(self.year)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_chinese(FormatOptions::default()))
    }
}

impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl TryFrom<(u16, u8, u8)> for LunarDate {
    type Error = LunarError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::common(value.0, value.1, value.2)
    }
}

impl TryFrom<(u16, u8, u8, bool)> for LunarDate {
    type Error = LunarError;

    fn try_from(value: (u16, u8, u8, bool)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

impl Serialize for LunarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RawLunarDate {
            year:  self.year,
            month: self.month,
            day:   self.day,
            leap:  self.leap,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LunarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawLunarDate::deserialize(deserializer)?;
        Self::new(raw.year, raw.month, raw.day, raw.leap).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<SolarDate> for LunarDate {
    type Error = LunarError;

    fn try_from(date: SolarDate) -> Result<Self, Self::Error> {
        Self::from_solar(date)
    }
}

impl From<LunarDate> for SolarDate {
    fn from(date: LunarDate) -> Self {
        date.to_solar()
    }
}
