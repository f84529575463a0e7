//! # Upcoming Phase Event Search
//!
//! Locates the synodic month (lunation) that brackets a Julian date and
//! computes the precise Julian dates of the five primary phase events:
//! new Moon, first quarter, full Moon, last quarter, and the following
//! new Moon.
//!
//! ## Algorithm
//!
//! 1. Anchor the search 45 days before "now" — just over one synodic
//!    month — and estimate the lunation index `k` from the anchor's
//!    calendar year and month.
//! 2. Walk forward one lunation at a time comparing *mean* phase times
//!    (a cubic polynomial in Julian centuries plus a periodic term)
//!    until the current Julian date falls inside `[mean(k), mean(k+1))`.
//! 3. For the bracketing `k`, apply the *true* phase correction series
//!    at offsets 0, ¼, ½ and ¾ of the cycle, and at offset 0 of `k + 1`
//!    for the next new Moon. New/full moons and the quarters use
//!    different coefficient tables, and the quarters carry an extra
//!    sign-flipped correction pair.
//!
//! Both the bracketing walk and the correction series fail loudly: the
//! walk has a hard step cap, and a correction request for an offset that
//! is not a quarter multiple is an explicit [`PhaseEventError`], never a
//! silently wrong Julian date.

use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

use crate::calendar;
use crate::constants::SYNODIC_MONTH_DAYS;
use crate::orbit::{dcos, dsin};
use crate::{PhaseEvent, PhaseEventKind};

/// Cycle offsets of the four primary phases within one lunation.
const NEW: f64 = 0.0;
const FIRST_QUARTER: f64 = 0.25;
const FULL: f64 = 0.5;
const LAST_QUARTER: f64 = 0.75;

/// Cap on the bracketing walk. The anchor sits one synodic month back,
/// so one or two steps suffice in practice; hitting the cap means the
/// mean-phase polynomial and the input date disagree wildly.
const MAX_BRACKET_STEPS: usize = 24;

/// Failure modes of the event search.
#[derive(Error, Debug)]
pub enum PhaseEventError {
    /// A correction series was requested for an offset that is not
    /// (approximately) 0, ¼, ½ or ¾ — there is no coefficient table
    /// for anything else.
    #[error("no true-phase correction series for selector {0}; expected 0, 0.25, 0.5 or 0.75")]
    InvalidSelector(f64),

    /// The lunation walk failed to bracket the date within the step cap.
    #[error(
        "failed to bracket Julian date {julian_date} within {MAX_BRACKET_STEPS} synodic months"
    )]
    BracketSearchOverrun { julian_date: i64 },
}

/// Mean time of a phase, as a fractional Julian date.
///
/// `jdn` selects the epoch neighborhood (it only feeds the slow
/// century-scale terms); `k` is the lunation index, where `k = 0` is the
/// first new Moon of 1900.
fn mean_phase(jdn: f64, k: f64) -> f64 {
    // Julian centuries from 1900 January 1, 12:00
    let t = (jdn - calendar::gregorian_to_julian(1, 1, 1900) as f64) / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;

    2_415_020.759_33 + SYNODIC_MONTH_DAYS * k + 0.000_117_8 * t2 - 0.000_000_155 * t3
        + 0.000_33 * dsin(166.56 + 132.87 * t - 0.009_173 * t2)
}

/// True time of a phase, as a fractional Julian date.
///
/// `k` is the lunation index and `selector` the offset of the wanted
/// phase within the cycle (0, ¼, ½ or ¾). The mean time is corrected by
/// a phase-specific periodic series in the Sun's and Moon's anomalies
/// and the Moon's argument of latitude.
pub fn true_phase(k: f64, selector: f64) -> Result<f64, PhaseEventError> {
    let k = k + selector;

    // Time in Julian centuries from 1900 January 0.5
    let t = k / 1_236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    // Mean time of phase
    let mut pt = 2_415_020.759_33 + SYNODIC_MONTH_DAYS * k + 0.000_117_8 * t2
        - 0.000_000_155 * t3
        + 0.000_33 * dsin(166.56 + 132.87 * t - 0.009_173 * t2);

    // Sun's mean anomaly
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    // Moon's mean anomaly
    let mprime = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    // Moon's argument of latitude
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    if (selector - NEW).abs() < 0.01 || (selector - FULL).abs() < 0.01 {
        // Corrections for new and full Moon
        pt += (0.1734 - 0.000_393 * t) * dsin(m) + 0.0021 * dsin(2.0 * m)
            - 0.4068 * dsin(mprime)
            + 0.0161 * dsin(2.0 * mprime)
            - 0.0004 * dsin(3.0 * mprime)
            + 0.0104 * dsin(2.0 * f)
            - 0.0051 * dsin(m + mprime)
            - 0.0074 * dsin(m - mprime)
            + 0.0004 * dsin(2.0 * f + m)
            - 0.0004 * dsin(2.0 * f - m)
            - 0.0006 * dsin(2.0 * f + mprime)
            + 0.0010 * dsin(2.0 * f - mprime)
            + 0.0005 * dsin(m + 2.0 * mprime);
    } else if (selector - FIRST_QUARTER).abs() < 0.01 || (selector - LAST_QUARTER).abs() < 0.01 {
        // Corrections for first and last quarter
        pt += (0.1721 - 0.0004 * t) * dsin(m) + 0.0021 * dsin(2.0 * m)
            - 0.6280 * dsin(mprime)
            + 0.0089 * dsin(2.0 * mprime)
            - 0.0004 * dsin(3.0 * mprime)
            + 0.0079 * dsin(2.0 * f)
            - 0.0119 * dsin(m + mprime)
            - 0.0047 * dsin(m - mprime)
            + 0.0003 * dsin(2.0 * f + m)
            - 0.0004 * dsin(2.0 * f - m)
            - 0.0006 * dsin(2.0 * f + mprime)
            + 0.0021 * dsin(2.0 * f - mprime)
            + 0.0003 * dsin(m + 2.0 * mprime)
            + 0.0004 * dsin(m - 2.0 * mprime)
            - 0.0003 * dsin(2.0 * m + mprime);

        // The quarters carry an extra correction whose sign flips
        // between first and last quarter.
        if selector < FULL {
            pt += 0.0028 - 0.0004 * dcos(m) + 0.0003 * dcos(mprime);
        } else {
            pt += -0.0028 + 0.0004 * dcos(m) - 0.0003 * dcos(mprime);
        }
    } else {
        return Err(PhaseEventError::InvalidSelector(selector));
    }

    Ok(pt)
}

/// Find the five phase events bracketing `current_jd`.
///
/// `now` must be the calendar date `current_jd` was derived from; it
/// seeds the lunation estimate. Events come back in the fixed order
/// new, first quarter, full, last quarter, next new, with
/// chronologically non-decreasing Julian dates.
pub fn find_upcoming(
    current_jd: i64,
    now: NaiveDate,
) -> Result<[PhaseEvent; 5], PhaseEventError> {
    // Anchor the search just over one synodic month back
    let anchor = now - Duration::days(45);
    let year = f64::from(anchor.year());
    let month = f64::from(anchor.month());

    let mut k1 = ((year + (month - 1.0) / 12.0 - 1900.0) * 12.3685).floor();
    let mut adate = calendar::date_to_julian(anchor) as f64;
    let mut nt1 = mean_phase(adate, k1);
    let jd = current_jd as f64;

    let mut bracketed = false;
    for _ in 0..MAX_BRACKET_STEPS {
        adate += SYNODIC_MONTH_DAYS;
        let k2 = k1 + 1.0;
        let nt2 = mean_phase(adate, k2);
        if nt1 <= jd && jd < nt2 {
            bracketed = true;
            break;
        }
        nt1 = nt2;
        k1 = k2;
    }
    if !bracketed {
        return Err(PhaseEventError::BracketSearchOverrun {
            julian_date: current_jd,
        });
    }

    Ok([
        PhaseEvent {
            kind: PhaseEventKind::New,
            julian_date: true_phase(k1, NEW)?,
        },
        PhaseEvent {
            kind: PhaseEventKind::FirstQuarter,
            julian_date: true_phase(k1, FIRST_QUARTER)?,
        },
        PhaseEvent {
            kind: PhaseEventKind::Full,
            julian_date: true_phase(k1, FULL)?,
        },
        PhaseEvent {
            kind: PhaseEventKind::LastQuarter,
            julian_date: true_phase(k1, LAST_QUARTER)?,
        },
        PhaseEvent {
            kind: PhaseEventKind::NextNew,
            julian_date: true_phase(k1 + 1.0, NEW)?,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events_for(day: u32, month: u32, year: i32) -> [PhaseEvent; 5] {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let jd = calendar::date_to_julian(date);
        find_upcoming(jd, date).expect("event search should succeed")
    }

    #[test]
    fn invalid_selector_is_an_explicit_error() {
        for selector in [0.1, 0.3, 0.6, 0.9, -0.25, 1.0] {
            let result = true_phase(1237.0, selector);
            assert!(
                matches!(result, Err(PhaseEventError::InvalidSelector(_))),
                "selector {selector} should have no correction series"
            );
        }
    }

    #[test]
    fn valid_selectors_produce_plausible_julian_dates() {
        // Lunation 1237 lands in early 2000; all four phases must be
        // within the year and in cycle order.
        let new = true_phase(1237.0, 0.0).unwrap();
        let first = true_phase(1237.0, 0.25).unwrap();
        let full = true_phase(1237.0, 0.5).unwrap();
        let last = true_phase(1237.0, 0.75).unwrap();

        assert!(new < first && first < full && full < last);
        assert!(
            (last - new) < SYNODIC_MONTH_DAYS,
            "four quarters should fit inside one synodic month"
        );
    }

    #[test]
    fn mean_phase_advances_one_synodic_month_per_lunation() {
        let jdn = 2_451_550.0;
        let a = mean_phase(jdn, 1237.0);
        let b = mean_phase(jdn, 1238.0);
        assert!(
            (b - a - SYNODIC_MONTH_DAYS).abs() < 1e-6,
            "mean phases should be one synodic month apart, got {}",
            b - a
        );
    }

    #[test]
    fn returns_five_chronological_events() {
        let events = events_for(15, 1, 2000);

        assert_eq!(events.len(), 5);
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PhaseEventKind::New,
                PhaseEventKind::FirstQuarter,
                PhaseEventKind::Full,
                PhaseEventKind::LastQuarter,
                PhaseEventKind::NextNew,
            ]
        );

        for pair in events.windows(2) {
            assert!(
                pair[0].julian_date <= pair[1].julian_date,
                "{} at {} should not follow {} at {}",
                pair[0].kind,
                pair[0].julian_date,
                pair[1].kind,
                pair[1].julian_date
            );
        }
    }

    #[test]
    fn reproduces_the_january_2000_almanac() {
        // Almanac times (UT): new 6 Jan 18:14, first quarter 14 Jan
        // 13:34, full 21 Jan 04:40, last quarter 28 Jan 07:57, and the
        // next new Moon 5 Feb 13:03.
        let events = events_for(15, 1, 2000);
        let formatted: Vec<_> = events
            .iter()
            .map(|e| calendar::format_gregorian(e.julian_date.round() as i64))
            .collect();

        assert_eq!(
            formatted,
            vec!["6/1/2000", "14/1/2000", "21/1/2000", "28/1/2000", "5/2/2000"]
        );
    }

    #[test]
    fn consecutive_new_moons_are_one_synodic_month_apart() {
        let events = events_for(10, 6, 2024);
        let new = events[0].julian_date;
        let next_new = events[4].julian_date;
        assert!(
            (next_new - new - SYNODIC_MONTH_DAYS).abs() < 1.0,
            "lunation length {} strays too far from the mean",
            next_new - new
        );
    }

    #[test]
    fn bracketing_holds_across_year_boundaries() {
        // Dates straddling new year, leap day, and both halves of the
        // 20th/21st centuries.
        for (day, month, year) in [
            (1, 1, 1999),
            (31, 12, 2000),
            (29, 2, 2020),
            (15, 7, 1950),
            (3, 11, 2077),
        ] {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let jd = calendar::date_to_julian(date);
            let events = find_upcoming(jd, date).expect("search should bracket");

            // The current date must lie within the bracketing lunation:
            // after (or at) its start, before the next new Moon.
            assert!(
                (jd as f64) < events[4].julian_date,
                "{day}/{month}/{year}: next new Moon should lie ahead"
            );
            assert!(
                events[0].julian_date - jd as f64 <= SYNODIC_MONTH_DAYS,
                "{day}/{month}/{year}: bracketing new Moon too far away"
            );
        }
    }
}
