//! Lunar calendar reference data for lunar years 1900-2099.
//!
//! Each year is packed into one word of the published ephemeris table:
//!
//! | bits    | meaning                                                  |
//! |---------|----------------------------------------------------------|
//! | `0..4`  | leap month ordinal, 0 when the year has none             |
//! | `4..16` | month size flags, bit 15 is month 1 and bit 4 month 12   |
//! | `16`    | size flag of the leap month                              |
//!
//! A set size flag means a big month of 30 days, a clear one a small month of
//! 29 days. The words are decoded at compile time into [`LunarYearInfo`]
//! values; nothing here is computed at runtime beyond indexing.

use crate::{
    BIG_MONTH_DAYS, FIRST_MONTH, LunarError, MAX_MONTH, MAX_YEAR, MIN_YEAR, SMALL_MONTH_DAYS,
};

/// Number of lunar years covered by the table
pub const YEARS: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

const LEAP_MONTH_MASK: u32 = 0xf;
const LEAP_SIZE_BIT: u32 = 0x1_0000;

#[rustfmt::skip]
const LUNAR_INFO: [u32; YEARS] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910-1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920-1929
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940-1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960-1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020-2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040-2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050-2059
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060-2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070-2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080-2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090-2099
];

/// Leap month and month lengths of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarYearInfo {
    year:       u16,
    leap_month: u8,
    lengths:    [u8; 13],
    len:        u8,
}

static TABLE: [LunarYearInfo; YEARS] = build_table();

/// Days from lunar 1900-01-01 to the first day of each year, plus one
/// trailing entry holding the total span of the table.
static DAYS_BEFORE_YEAR: [u32; YEARS + 1] = build_offsets();

const fn month_size(word: u32, bit: u32) -> u8 {
    if word & bit == 0 { SMALL_MONTH_DAYS } else { BIG_MONTH_DAYS }
}

const fn decode(year: u16, word: u32) -> LunarYearInfo {
    let leap_month = (word & LEAP_MONTH_MASK) as u8;
    let mut lengths = [0u8; 13];
    let mut len = 0;
    let mut month = FIRST_MONTH;
    while month <= MAX_MONTH {
        lengths[len] = month_size(word, LEAP_SIZE_BIT >> month);
        len += 1;
        if month == leap_month {
            lengths[len] = month_size(word, LEAP_SIZE_BIT);
            len += 1;
        }
        month += 1;
    }
    LunarYearInfo {
        year,
        leap_month,
        lengths,
        len: len as u8,
    }
}

const fn build_table() -> [LunarYearInfo; YEARS] {
    let mut table = [decode(MIN_YEAR, 0); YEARS];
    let mut i = 0;
    while i < YEARS {
        table[i] = decode(MIN_YEAR + i as u16, LUNAR_INFO[i]);
        i += 1;
    }
    table
}

const fn build_offsets() -> [u32; YEARS + 1] {
    let table = build_table();
    let mut offsets = [0u32; YEARS + 1];
    let mut i = 0;
    while i < YEARS {
        offsets[i + 1] = offsets[i] + table[i].total_days() as u32;
        i += 1;
    }
    offsets
}

impl LunarYearInfo {
    /// Returns the lunar year this entry describes
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the ordinal of the repeated month, if the year has one
    #[inline]
    pub const fn leap_month(&self) -> Option<u8> {
        if self.leap_month == 0 { None } else { Some(self.leap_month) }
    }

    /// Returns the length of every month in calendar order, the leap month
    /// directly after its base month
    pub fn month_lengths(&self) -> &[u8] {
        &self.lengths[..self.len as usize]
    }

    /// Returns the number of days in the year
    pub const fn total_days(&self) -> u16 {
        let mut total = 0u16;
        let mut i = 0;
        while i < self.len as usize {
            total += self.lengths[i] as u16;
            i += 1;
        }
        total
    }

    /// Position of `month` in [`Self::month_lengths`], `None` when the month
    /// ordinal is out of range or `leap` names a month this year does not
    /// repeat.
    pub const fn month_index(&self, month: u8, leap: bool) -> Option<usize> {
        if month < FIRST_MONTH || month > MAX_MONTH {
            return None;
        }
        if leap && month != self.leap_month {
            return None;
        }
        let mut index = (month - FIRST_MONTH) as usize;
        if self.leap_month != 0 && (month > self.leap_month || leap) {
            index += 1;
        }
        Some(index)
    }

    /// Returns the length of the given month
    pub const fn days_in_month(&self, month: u8, leap: bool) -> Option<u8> {
        match self.month_index(month, leap) {
            Some(index) => Some(self.lengths[index]),
            None => None,
        }
    }

    /// Returns the number of days in this year before the first day of the
    /// given month. A leap month counts its base month as preceding it.
    pub fn days_before_month(&self, month: u8, leap: bool) -> Option<u16> {
        let index = self.month_index(month, leap)?;
        Some(self.lengths[..index].iter().map(|&d| u16::from(d)).sum())
    }

    /// Iterates over `(month, leap, length)` for every month of the year
    pub fn months(&self) -> impl Iterator<Item = (u8, bool, u8)> + '_ {
        let leap_month = self.leap_month;
        let mut month = 0;
        let mut pending_leap = false;
        self.month_lengths().iter().map(move |&length| {
            if pending_leap {
                pending_leap = false;
                (month, true, length)
            } else {
                month += 1;
                pending_leap = month == leap_month;
                (month, false, length)
            }
        })
    }
}

/// Looks up the table entry for a lunar year.
///
/// # Errors
/// Returns `LunarError::OutOfRange` if `year` is outside `MIN_YEAR..=MAX_YEAR`.
pub fn lookup(year: u16) -> Result<&'static LunarYearInfo, LunarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(LunarError::OutOfRange { year });
    }
    Ok(&TABLE[usize::from(year - MIN_YEAR)])
}

/// Returns the number of days from lunar 1900-01-01 to the first day of `year`.
///
/// # Errors
/// Returns `LunarError::OutOfRange` if `year` is outside `MIN_YEAR..=MAX_YEAR`.
pub fn days_before_year(year: u16) -> Result<u32, LunarError> {
    lookup(year)?;
    Ok(DAYS_BEFORE_YEAR[usize::from(year - MIN_YEAR)])
}

/// Total number of days covered by the table
pub fn total_days() -> u32 {
    DAYS_BEFORE_YEAR[YEARS]
}

/// Finds the lunar year containing the given day offset from the epoch,
/// returning the year and the offset from its first day.
pub(crate) fn year_containing(offset: u32) -> Option<(&'static LunarYearInfo, u32)> {
    if offset >= total_days() {
        return None;
    }
    let index = DAYS_BEFORE_YEAR.partition_point(|&start| start <= offset) - 1;
    Some((&TABLE[index], offset - DAYS_BEFORE_YEAR[index]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_YEAR_DAYS, MIN_YEAR_DAYS};

    #[test]
    fn test_every_year_within_day_envelope() {
        for year in MIN_YEAR..=MAX_YEAR {
            let info = lookup(year).expect("year in table range");
            let total = info.total_days();
            assert!(
                (MIN_YEAR_DAYS..=MAX_YEAR_DAYS).contains(&total),
                "Year {year} has {total} days"
            );
            let expected_months = if info.leap_month().is_some() { 13 } else { 12 };
            assert_eq!(info.month_lengths().len(), expected_months, "Year {year}");
            assert!(
                info.month_lengths()
                    .iter()
                    .all(|&d| d == SMALL_MONTH_DAYS || d == BIG_MONTH_DAYS),
                "Year {year} has a month that is neither 29 nor 30 days"
            );
        }
    }

    #[test]
    fn test_leap_size_bit_only_with_leap_month() {
        for (i, word) in LUNAR_INFO.iter().enumerate() {
            if word & LEAP_MONTH_MASK == 0 {
                assert_eq!(word & LEAP_SIZE_BIT, 0, "Year {}", MIN_YEAR as usize + i);
            }
        }
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert!(matches!(lookup(1899), Err(LunarError::OutOfRange { year: 1899 })));
        assert!(matches!(lookup(2100), Err(LunarError::OutOfRange { year: 2100 })));
        assert!(lookup(1900).is_ok());
        assert!(lookup(2099).is_ok());
    }

    #[test]
    fn test_known_years() {
        struct TestCase {
            year:       u16,
            leap_month: Option<u8>,
            total_days: u16,
        }

        let cases = [
            TestCase {
                year:       1900,
                leap_month: Some(8),
                total_days: 384,
            },
            TestCase {
                year:       2000,
                leap_month: None,
                total_days: 354,
            },
            TestCase {
                year:       2017,
                leap_month: Some(6),
                total_days: 384,
            },
            TestCase {
                year:       2020,
                leap_month: Some(4),
                total_days: 384,
            },
            TestCase {
                year:       2033,
                leap_month: Some(11),
                total_days: 384,
            },
        ];

        for case in &cases {
            let info = lookup(case.year).expect("year in table range");
            assert_eq!(info.year(), case.year);
            assert_eq!(info.leap_month(), case.leap_month, "Year {}", case.year);
            assert_eq!(info.total_days(), case.total_days, "Year {}", case.year);
        }
    }

    #[test]
    fn test_month_index_and_lengths_2017() {
        let info = lookup(2017).expect("2017 in table range");
        assert_eq!(
            info.month_lengths(),
            &[29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30, 30]
        );
        assert_eq!(info.month_index(6, false), Some(5));
        assert_eq!(info.month_index(6, true), Some(6));
        assert_eq!(info.month_index(7, false), Some(7));
        assert_eq!(info.month_index(5, true), None);
        assert_eq!(info.month_index(0, false), None);
        assert_eq!(info.month_index(13, false), None);

        assert_eq!(info.days_in_month(6, false), Some(29));
        assert_eq!(info.days_in_month(6, true), Some(30));
        assert_eq!(info.days_before_month(1, false), Some(0));
        assert_eq!(info.days_before_month(6, true), Some(176));
        assert_eq!(info.days_before_month(7, false), Some(206));
    }

    #[test]
    fn test_months_iterator_marks_leap() {
        let info = lookup(2017).expect("2017 in table range");
        let months: Vec<(u8, bool)> = info.months().map(|(m, leap, _)| (m, leap)).collect();
        assert_eq!(months.len(), 13);
        assert_eq!(months[5], (6, false));
        assert_eq!(months[6], (6, true));
        assert_eq!(months[7], (7, false));
        assert_eq!(months[12], (12, false));

        let plain = lookup(2000).expect("2000 in table range");
        assert!(plain.months().all(|(_, leap, _)| !leap));
        assert_eq!(plain.months().last().map(|(m, _, _)| m), Some(12));
    }

    #[test]
    fn test_days_before_year() {
        assert_eq!(days_before_year(1900), Ok(0));
        assert_eq!(days_before_year(1901), Ok(384));
        assert_eq!(total_days(), 73_058);
        assert!(matches!(days_before_year(2100), Err(LunarError::OutOfRange { .. })));
    }

    #[test]
    fn test_year_containing() {
        let (info, rest) = year_containing(0).expect("epoch offset");
        assert_eq!((info.year(), rest), (1900, 0));

        let (info, rest) = year_containing(384).expect("first day of 1901");
        assert_eq!((info.year(), rest), (1901, 0));

        let (info, rest) = year_containing(383).expect("last day of 1900");
        assert_eq!((info.year(), rest), (1900, 383));

        let (info, _) = year_containing(total_days() - 1).expect("last table day");
        assert_eq!(info.year(), MAX_YEAR);
        assert!(year_containing(total_days()).is_none());
    }
}
