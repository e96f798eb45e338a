//! Chinese rendering of lunar dates.

use serde::Deserialize;

/// Chinese digits `0..=9`, used digit by digit for years.
pub const DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Month names for ordinals `1..=12`, index 0 unused.
pub const MONTH_NAMES: [&str; 13] = [
    "", "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "腊月",
];

/// Day names for days `1..=30`, index 0 unused.
pub const DAY_NAMES: [&str; 31] = [
    "", "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一",
    "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二",
    "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Prefix of a leap month name
pub const LEAP_PREFIX: &str = "闰";
/// Suffix after the year digits
pub const YEAR_SUFFIX: char = '年';

const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];
/// 甲子 years fall on multiples of 60 counted from year 4.
const SEXAGENARY_BASE: u16 = 4;

/// Options for [`crate::LunarDate::to_chinese`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Prefix the date with the year, e.g. `一九八三年`
    pub with_year: bool,
}

impl FormatOptions {
    /// Sets whether the year is rendered
    #[must_use]
    pub const fn with_year(mut self, with_year: bool) -> Self {
        self.with_year = with_year;
        self
    }
}

/// Renders a year digit by digit followed by 年, e.g. 2017 → `二〇一七年`.
pub fn year(year: u16) -> String {
    let mut rt: String = year
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect();
    rt.push(YEAR_SUFFIX);
    rt
}

/// Month name with the leap prefix when `leap` is set.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn month(month: u8, leap: bool) -> String {
    let name = MONTH_NAMES[usize::from(month)];
    assert!(!name.is_empty(), "month {month} not in 1..=12");
    if leap {
        format!("{LEAP_PREFIX}{name}")
    } else {
        name.to_owned()
    }
}

/// Day name, 初一 through 三十.
///
/// # Panics
///
/// Panics if `day` is not in `1..=30`.
pub fn day(day: u8) -> &'static str {
    let name = DAY_NAMES[usize::from(day)];
    assert!(!name.is_empty(), "day {day} not in 1..=30");
    name
}

/// Stem-branch name of a year, e.g. 2017 → `丁酉`.
pub fn sexagenary(year: u16) -> String {
    let n = usize::from(year.wrapping_sub(SEXAGENARY_BASE));
    STEMS[n % STEMS.len()].to_owned() + BRANCHES[n % BRANCHES.len()]
}

/// Zodiac animal of a year, e.g. 2017 → `鸡`.
pub fn zodiac(year: u16) -> &'static str {
    ZODIAC[usize::from(year.wrapping_sub(SEXAGENARY_BASE)) % ZODIAC.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year() {
        assert_eq!(year(1983), "一九八三年");
        assert_eq!(year(2017), "二〇一七年");
        assert_eq!(year(1900), "一九〇〇年");
    }

    #[test]
    fn test_month() {
        for (std, m, leap) in [
            ("正月", 1, false),
            ("五月", 5, false),
            ("十月", 10, false),
            ("十一月", 11, false),
            ("腊月", 12, false),
            ("闰六月", 6, true),
            ("闰正月", 1, true),
        ] {
            assert_eq!(std, month(m, leap));
        }
    }

    #[test]
    #[should_panic(expected = "month 0 not in 1..=12")]
    fn test_month_zero_panics() {
        let _ = month(0, false);
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初五", 5),
            ("初十", 10),
            ("十一", 11),
            ("十九", 19),
            ("二十", 20),
            ("廿一", 21),
            ("廿八", 28),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    fn test_sexagenary_and_zodiac() {
        for (std, animal, y) in [
            ("甲子", "鼠", 1984),
            ("庚子", "鼠", 1900),
            ("丁酉", "鸡", 2017),
            ("己亥", "猪", 2019),
        ] {
            assert_eq!(std, sexagenary(y));
            assert_eq!(animal, zodiac(y));
        }
    }

    #[test]
    fn test_format_options() {
        assert!(!FormatOptions::default().with_year);
        assert!(FormatOptions::default().with_year(true).with_year);

        let parsed: FormatOptions = serde_json::from_str("{}").expect("empty options");
        assert_eq!(parsed, FormatOptions::default());

        let parsed: FormatOptions =
            serde_json::from_str(r#"{"with_year": true}"#).expect("options with year");
        assert!(parsed.with_year);
    }
}
