//! # Moon Tracker Core Library
//!
//! This library computes the current phase of the Moon (illumination
//! fraction, age, distance, angular diameter) and the calendar dates of
//! the next five primary phase events, using the classical low-precision
//! analytic model popularized by John Walker's "moontool".
//!
//! ## Design Philosophy
//!
//! ### Pure, one-shot computation
//! Everything is a pure function of a date. The [`engine::Engine`] facade
//! reads the host's local calendar date exactly once at construction and
//! produces an immutable snapshot; observing a new "now" means building a
//! new engine. There is no background state, caching, or mutation.
//!
//! ### Accuracy
//! This is not an ephemeris library. The model is geocentric, ignores
//! topocentric parallax, and carries errors of a few arcminutes in
//! longitude — entirely adequate for naming the phase and dating the
//! quarter events to the day, and nothing more.
//!
//! ### Data Flow
//! 1. **Calendar**: host date → Julian Day Number ([`calendar`])
//! 2. **Orbit**: day offset from epoch → solar + lunar state ([`orbit`],
//!    with the Kepler solve in [`kepler`])
//! 3. **Classify**: phase fraction → one of eight labels ([`phase`])
//! 4. **Events**: bracket the current lunation, date the next five phase
//!    events ([`events`])
//! 5. **Render**: format the snapshot for a terminal ([`renderer`])
//!
//! ## Core Types
//!
//! - [`MoonState`]: the Moon's instantaneous phase and geometry
//! - [`SunState`]: solar distance/size byproduct used by the lunar terms
//! - [`PhaseLabel`]: the eight named phases
//! - [`PhaseEvent`] / [`PhaseEventKind`]: a dated upcoming phase

// Module declarations
pub mod calendar;
pub mod config;
pub mod constants;
pub mod engine;
pub mod events;
pub mod kepler;
pub mod orbit;
pub mod phase;
pub mod renderer;

pub use engine::Engine;

/// The Moon's instantaneous state for a given day offset.
///
/// Produced fresh by [`orbit::evaluate`]; immutable once computed.
#[derive(Clone, Copy, Debug)]
pub struct MoonState {
    /// Phase as a fraction of the synodic cycle, in [0, 1).
    /// 0 = new, 0.5 = full.
    pub phase_fraction: f64,
    /// Illuminated fraction of the disc, in [0, 1].
    pub illuminated_fraction: f64,
    /// Age in days since new Moon, in [0, 29.53058868).
    pub age_days: f64,
    /// Geocentric distance in kilometers.
    pub distance_km: f64,
    /// Apparent angular diameter in degrees.
    pub angular_diameter_deg: f64,
}

/// The Sun's instantaneous state, computed as a byproduct the lunar
/// correction terms need. Not part of the engine's public snapshot.
#[derive(Clone, Copy, Debug)]
pub struct SunState {
    /// Geocentric distance in kilometers.
    pub distance_km: f64,
    /// Apparent angular diameter in degrees.
    pub angular_diameter_deg: f64,
}

/// One of the eight named phases of the Moon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseLabel {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseLabel {
    /// Traditional display name for the phase.
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseLabel::New => "New Moon",
            PhaseLabel::WaxingCrescent => "Waxing Crescent Moon",
            PhaseLabel::FirstQuarter => "First Quarter Moon",
            PhaseLabel::WaxingGibbous => "Waxing Gibbous Moon",
            PhaseLabel::Full => "Full Moon",
            PhaseLabel::WaningGibbous => "Waning Gibbous Moon",
            PhaseLabel::LastQuarter => "Last Quarter Moon",
            PhaseLabel::WaningCrescent => "Waning Crescent Moon",
        }
    }
}

impl std::fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the five upcoming events a [`PhaseEvent`] dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEventKind {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
    NextNew,
}

impl PhaseEventKind {
    /// Display name used by the renderer.
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseEventKind::New => "New Moon",
            PhaseEventKind::FirstQuarter => "First Quarter Moon",
            PhaseEventKind::Full => "Full Moon",
            PhaseEventKind::LastQuarter => "Last Quarter Moon",
            PhaseEventKind::NextNew => "Next New Moon",
        }
    }
}

impl std::fmt::Display for PhaseEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dated upcoming phase event. The Julian date keeps its fractional
/// part; rounding to a calendar day happens only at formatting time.
#[derive(Clone, Copy, Debug)]
pub struct PhaseEvent {
    pub kind: PhaseEventKind,
    pub julian_date: f64,
}
