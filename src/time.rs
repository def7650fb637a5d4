//! Time-related calculations: the day-number axis and sidereal time.
//!
//! All solar formulas in this crate run on a single real-valued day count,
//! "days since 2000 Jan 0.0 UT". Day 0.0 is 1999-12-31 00:00 UT, so
//! 2000-01-01 00:00 UT is day 1.0 and 2000-01-01 12:00 UT is day 1.5.

#![allow(clippy::unreadable_literal)]

use crate::math::revolution;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Julian Day Number of 1999-12-31, the epoch of the day-number axis.
const EPOCH_JDN: i64 = 2_451_544;

/// Julian Day Number of 0000-03-01 (proleptic Gregorian), the origin used by
/// the inverse conversion.
const MARCH_1_YEAR_0_JDN: i64 = 1_721_120;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Returns the number of days since 2000 Jan 0.0 UT for 0h UT of the given date.
///
/// Uses integer Julian Day Number arithmetic with the proleptic Gregorian
/// leap rule, so century years are handled correctly. Out-of-range month or
/// day values do not panic; they just produce a meaningless day number.
///
/// # Example
/// ```
/// # use sunriset::time::days_since_epoch;
/// assert_eq!(days_since_epoch(2000, 1, 1), 1.0);
/// assert_eq!(days_since_epoch(1999, 12, 31), 0.0);
/// assert_eq!(days_since_epoch(2000, 3, 1), 61.0);
/// ```
#[must_use]
pub fn days_since_epoch(year: i32, month: u32, day: u32) -> f64 {
    (julian_day_number(year, month, day) - EPOCH_JDN) as f64
}

/// Computes the Julian Day Number (noon-based integer day) of a Gregorian date.
fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    // Shift the year to start in March so the leap day falls at its end
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Converts a day number back to the calendar date of the day containing it.
///
/// Inverse of [`days_since_epoch`]: any fractional part is dropped, so every
/// instant within a UT day maps to that day's date.
///
/// # Example
/// ```
/// # use sunriset::time::{calendar_date, days_since_epoch};
/// assert_eq!(calendar_date(days_since_epoch(2024, 2, 29)), (2024, 2, 29));
/// assert_eq!(calendar_date(1.75), (2000, 1, 1));
/// ```
#[must_use]
pub fn calendar_date(day_number: f64) -> (i32, u32, u32) {
    let z = crate::math::floor(day_number) as i64 + EPOCH_JDN - MARCH_1_YEAR_0_JDN;

    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;

    let day = day_of_year - (153 * month_index + 2) / 5 + 1;
    let month = if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);

    (year as i32, month as u32, day as u32)
}

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a month, or `None` for a month outside 1-12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            if is_leap_year(year) {
                Some(29)
            } else {
                Some(28)
            }
        }
        _ => None,
    }
}

/// Validates that year/month/day name a real proleptic Gregorian date.
///
/// # Errors
/// Returns `InvalidDate` for a month outside 1-12 or a day outside the month.
pub fn check_date(year: i32, month: u32, day: u32) -> Result<()> {
    let Some(last_day) = days_in_month(year, month) else {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    };
    if day == 0 || day > last_day {
        return Err(Error::invalid_date("day is out of range for month"));
    }
    Ok(())
}

/// Day number of 0h UT on a chrono date.
#[cfg(feature = "chrono")]
#[must_use]
pub fn days_since_epoch_for_date(date: chrono::NaiveDate) -> f64 {
    days_since_epoch(date.year(), date.month(), date.day())
}

/// Greenwich Mean Sidereal Time at 0h UT, in degrees [0, 360).
///
/// Taken as the Sun's mean longitude plus 180°, which keeps sidereal time
/// consistent with the simplified solar orbit in [`crate::ephemeris`].
/// Adding `UT × 15°` and the east longitude gives local sidereal time.
#[must_use]
pub fn gmst0(day_number: f64) -> f64 {
    revolution((180.0 + 356.0470 + 282.9404) + (0.9856002585 + 4.70935E-5) * day_number)
}
