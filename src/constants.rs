//! # Astronomical Constants
//!
//! Single immutable home for every orbital element and calendar constant
//! used by the phase engine. All values are the classical low-precision
//! elements referenced to the 1980 January 0.0 epoch, in the moontool
//! tradition. Angles are degrees, distances kilometers, durations days.

/// Epoch of the orbital elements: 1980 January 0.0 (JD 2444238.5).
pub const EPOCH: f64 = 2_444_238.5;

// -- Sun's apparent orbit --

/// Ecliptic longitude of the Sun at epoch 1980.0 (degrees).
pub const SUN_ECLIPTIC_LONGITUDE_EPOCH: f64 = 278.833_540;
/// Ecliptic longitude of the Sun at perigee (degrees).
pub const SUN_ECLIPTIC_LONGITUDE_PERIGEE: f64 = 282.596_403;
/// Eccentricity of Earth's orbit.
pub const SUN_ECCENTRICITY: f64 = 0.016_718;
/// Semi-major axis of Earth's orbit (km).
pub const SUN_SEMI_MAJOR_AXIS_KM: f64 = 1.495_85e8;
/// Sun's angular size at semi-major axis distance (degrees).
pub const SUN_ANGULAR_SIZE_DEG: f64 = 0.533_128;

// -- Elements of the Moon's orbit --

/// Moon's mean longitude at the epoch (degrees).
pub const MOON_MEAN_LONGITUDE_EPOCH: f64 = 64.975_464;
/// Mean longitude of the lunar perigee at the epoch (degrees).
pub const MOON_MEAN_LONGITUDE_PERIGEE: f64 = 349.383_063;
/// Eccentricity of the Moon's orbit.
pub const MOON_ECCENTRICITY: f64 = 0.054_900;
/// Moon's angular size at semi-major axis distance (degrees).
pub const MOON_ANGULAR_SIZE_DEG: f64 = 0.5181;
/// Semi-major axis of the Moon's orbit (km).
pub const MOON_SEMI_MAJOR_AXIS_KM: f64 = 384_401.0;

/// Synodic month, new Moon to new Moon (days).
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_68;

/// Half-width of the bands around the quarter phases used by the
/// phase classifier (fraction of a synodic month).
pub const PHASE_PRECISION: f64 = 0.05;
