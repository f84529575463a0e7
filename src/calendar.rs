//! # Calendar / Julian Day Conversion
//!
//! Bidirectional conversion between proleptic Gregorian calendar dates and
//! Julian Day Numbers, plus the one place the crate reads the host clock.
//!
//! ## Algorithms
//!
//! - **Forward** (`gregorian_to_julian`): the Fliegel & Van Flandern
//!   closed-form integer expression. No iteration, no table lookups.
//! - **Inverse** (`julian_to_gregorian`): Richards' algorithm. Exact
//!   inverse of the forward formula for every JDN it produces.
//!
//! ## Known limitation
//!
//! Calendar fields are not range-validated: an out-of-range day or month
//! (e.g. 32/13/2024) yields a mathematically consistent but semantically
//! meaningless day number. The engine only ever feeds these functions
//! dates obtained from `chrono`, which are valid by construction.

use chrono::{Datelike, Local, NaiveDate};

/// A Gregorian calendar date produced by [`julian_to_gregorian`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GregorianDate {
    /// Day of month (1-31).
    pub day: i64,
    /// Month (1-12).
    pub month: i64,
    /// Astronomical year (1 BC = year 0).
    pub year: i64,
}

/// Convert a Gregorian calendar date to a Julian Day Number.
///
/// Integer divisions deliberately truncate toward zero; the formula
/// depends on it for the January/February year rollover.
pub fn gregorian_to_julian(day: i64, month: i64, year: i64) -> i64 {
    let a = (month - 14) / 12;
    (1461 * (year + 4800 + a)) / 4 + (367 * (month - 2 - 12 * a)) / 12
        - (3 * ((year + 4900 + a) / 100)) / 4
        + day
        - 32075
}

/// Julian Day Number for a `chrono` calendar date.
pub fn date_to_julian(date: NaiveDate) -> i64 {
    gregorian_to_julian(
        i64::from(date.day()),
        i64::from(date.month()),
        i64::from(date.year()),
    )
}

/// Julian Day Number for the host's local calendar date, read once.
pub fn today_julian() -> i64 {
    date_to_julian(Local::now().date_naive())
}

/// Convert a Julian Day Number back to a Gregorian calendar date
/// (Richards' algorithm).
pub fn julian_to_gregorian(jdn: i64) -> GregorianDate {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;

    let day = (h % 153) / 5 + 1;
    let month = ((h / 153 + 2) % 12) + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

    GregorianDate { day, month, year }
}

/// Format a Julian Day Number as a `"D/M/YYYY"` display string.
pub fn format_gregorian(jdn: i64) -> String {
    let date = julian_to_gregorian(jdn);
    format!("{}/{}/{}", date.day, date.month, date.year)
}
