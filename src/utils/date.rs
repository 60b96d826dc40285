//! Minimal date handling without timezone dependencies.
//!
//! The footer copyright line only needs the current year; deriving it from
//! the unix clock avoids pulling in a calendar crate.

use std::time::SystemTime;

/// Current UTC year.
pub fn current_year() -> u16 {
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_of_unix_day(secs / 86_400)
}

/// Year containing the given day count since 1970-01-01.
fn year_of_unix_day(mut days: u64) -> u16 {
    let mut year: u16 = 1970;
    loop {
        let len = if is_leap_year(year) { 366 } else { 365 };
        if days < len {
            return year;
        }
        days -= len;
        year += 1;
    }
}

#[inline]
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
