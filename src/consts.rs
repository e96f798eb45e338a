/// Earliest supported lunar year (inclusive)
pub const MIN_YEAR: u16 = 1900;
/// Latest supported lunar year (inclusive)
pub const MAX_YEAR: u16 = 2099;

/// Maximum valid lunar month ordinal
pub const MAX_MONTH: u8 = 12;
/// Month number of the first lunar month
pub const FIRST_MONTH: u8 = 1;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Length of a small lunar month
pub const SMALL_MONTH_DAYS: u8 = 29;
/// Length of a big lunar month
pub const BIG_MONTH_DAYS: u8 = 30;

/// Shortest possible lunar year (12 months)
pub const MIN_YEAR_DAYS: u16 = 353;
/// Longest possible lunar year (13 months)
pub const MAX_YEAR_DAYS: u16 = 385;

/// Solar date of lunar 1900-01-01, offset 0 of every conversion: (year, month, day)
pub const EPOCH_SOLAR: (u16, u8, u8) = (1900, 1, 31);

/// Solar date of the last day of lunar year 2099: (year, month, day)
pub const LAST_SOLAR: (u16, u8, u8) = (2100, 2, 8);

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common Gregorian year
pub const COMMON_YEAR_DAYS: u16 = 365;
/// Days in a leap Gregorian year
pub const LEAP_YEAR_DAYS: u16 = 366;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
