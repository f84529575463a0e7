//! # Phase Engine Facade
//!
//! Ties the calendar, orbital model, classifier and event search together
//! into a single immutable snapshot of "the Moon right now".
//!
//! The numeric pipeline runs once, at construction: host date → Julian
//! Day Number → orbital state → phase label → upcoming events. Display
//! strings are derived from the numeric results in the same pass, so
//! every accessor afterwards is a plain read — no recomputation, no
//! drift between calls, no formatting dependencies in the numeric core.
//!
//! A snapshot never changes. To observe a new "now", construct a new
//! [`Engine`].

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::calendar;
use crate::constants::EPOCH;
use crate::events::{self, PhaseEventError};
use crate::kepler::KeplerError;
use crate::orbit;
use crate::phase;
use crate::{MoonState, PhaseEvent, PhaseLabel};

/// Failure modes of snapshot construction.
///
/// There is deliberately no recovery path: a snapshot either computes
/// completely or the constructor fails fast.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The requested calendar date does not exist.
    #[error("{day}/{month}/{year} is not a representable calendar date")]
    InvalidDate { day: u32, month: u32, year: i32 },

    /// The Kepler iteration failed to converge.
    #[error(transparent)]
    Kepler(#[from] KeplerError),

    /// The upcoming-event search failed.
    #[error(transparent)]
    Events(#[from] PhaseEventError),
}

/// Immutable result of one engine run. Plain values only; nothing here
/// is shared or mutated after construction.
#[derive(Clone, Debug)]
struct Snapshot {
    julian_date: i64,
    date_string: String,
    moon: MoonState,
    label: PhaseLabel,
    events: [PhaseEvent; 5],
    event_dates: [String; 5],
}

/// Read-only facade over a single phase computation.
#[derive(Clone, Debug)]
pub struct Engine {
    snapshot: Snapshot,
}

impl Engine {
    /// Compute a snapshot for the host's current local calendar date.
    pub fn new() -> Result<Self, EngineError> {
        Self::for_naive_date(Local::now().date_naive())
    }

    /// Compute a snapshot for a fixed calendar date.
    ///
    /// Fails with [`EngineError::InvalidDate`] if the fields do not name
    /// a real date (e.g. 30/2/2024).
    pub fn for_date(day: u32, month: u32, year: i32) -> Result<Self, EngineError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(EngineError::InvalidDate { day, month, year })?;
        Self::for_naive_date(date)
    }

    fn for_naive_date(date: NaiveDate) -> Result<Self, EngineError> {
        let julian_date = calendar::date_to_julian(date);

        // Numeric pipeline
        let (_sun, moon) = orbit::evaluate(julian_date as f64 - EPOCH)?;
        let label = phase::classify(moon.phase_fraction);
        let events = events::find_upcoming(julian_date, date)?;

        // Presentation pass: event Julian dates round to the nearest
        // whole day before formatting.
        let date_string = calendar::format_gregorian(julian_date);
        let event_dates = events
            .map(|event| calendar::format_gregorian(event.julian_date.round() as i64));

        Ok(Engine {
            snapshot: Snapshot {
                julian_date,
                date_string,
                moon,
                label,
                events,
                event_dates,
            },
        })
    }

    /// Current phase as a fraction of the synodic cycle, in [0, 1).
    pub fn phase_fraction(&self) -> f64 {
        self.snapshot.moon.phase_fraction
    }

    /// Julian Day Number of the snapshot's calendar date.
    pub fn julian_date(&self) -> i64 {
        self.snapshot.julian_date
    }

    /// Snapshot date as a `"D/M/YYYY"` string.
    pub fn date_string(&self) -> &str {
        &self.snapshot.date_string
    }

    /// Named phase for the snapshot date.
    pub fn phase_label(&self) -> PhaseLabel {
        self.snapshot.label
    }

    /// Full lunar state (illumination, age, distance, angular diameter).
    pub fn moon(&self) -> &MoonState {
        &self.snapshot.moon
    }

    /// The five upcoming events with fractional Julian dates, in the
    /// fixed order new, first quarter, full, last quarter, next new.
    pub fn upcoming_events(&self) -> &[PhaseEvent; 5] {
        &self.snapshot.events
    }

    /// The five upcoming event dates as `"D/M/YYYY"` strings, in the
    /// same fixed order.
    pub fn upcoming_phase_dates(&self) -> &[String; 5] {
        &self.snapshot.event_dates
    }
}
