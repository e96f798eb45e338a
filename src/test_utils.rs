use crate::{LunarDate, SolarDate};

pub fn lunar(year: u16, month: u8, day: u8) -> LunarDate {
    LunarDate::common(year, month, day).expect("valid lunar date in test")
}

pub fn leap(year: u16, month: u8, day: u8) -> LunarDate {
    LunarDate::new(year, month, day, true).expect("valid leap-month date in test")
}

pub fn solar(year: u16, month: u8, day: u8) -> SolarDate {
    SolarDate::new(year, month, day).expect("valid solar date in test")
}
