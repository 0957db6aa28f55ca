use chrono::NaiveDate;

use crate::{CalendarMonth, Month};

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn ym(year: i32, month: u8) -> CalendarMonth {
    let month = Month::new(month).expect("valid test month");
    CalendarMonth::new(year, month).expect("valid test year")
}
