//! # Solar and Lunar Orbital Model
//!
//! The classical low-precision analytic model behind the phase engine
//! (moontool lineage). Given a day offset from the 1980 January 0.0
//! epoch it produces the Sun's and Moon's instantaneous state:
//!
//! - **Solar branch**: mean anomaly → Kepler solve → true anomaly →
//!   ecliptic longitude and orbital distance factor, from which the
//!   solar distance and apparent angular diameter follow.
//! - **Lunar branch**: mean longitude and anomaly, then four periodic
//!   corrections (evection, annual equation, two smaller terms), the
//!   equation of the center, and the variation, yielding the Moon's
//!   true ecliptic longitude. The Moon's age in degrees is the excess
//!   of true lunar longitude over true solar longitude.
//!
//! Everything is geocentric and referenced to the epoch constants in
//! [`crate::constants`]. Accuracy is in the arcminute range, which is
//! far more than the phase display needs.

use crate::constants::*;
use crate::kepler::{self, KeplerError};
use crate::{MoonState, SunState};

/// Reduce an angle in degrees to the range [0, 360).
///
/// Applied at every longitude/anomaly computation so phase arithmetic
/// never sees a discontinuity at the 0°/360° boundary.
pub(crate) fn fixed_angle(degrees: f64) -> f64 {
    degrees - 360.0 * (degrees / 360.0).floor()
}

/// Sine of an angle given in degrees.
pub(crate) fn dsin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub(crate) fn dcos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Evaluate the orbital model at `day_offset` days after the epoch.
///
/// Fails only if the Kepler iteration refuses to converge, which cannot
/// happen for the solar eccentricity but is surfaced rather than looped
/// on forever.
pub fn evaluate(day_offset: f64) -> Result<(SunState, MoonState), KeplerError> {
    // -- Solar branch --

    // Sun's mean anomaly, converted from perigee to epoch-1980 coordinates
    let n = fixed_angle((360.0 / 365.2422) * day_offset);
    let sun_mean_anomaly =
        fixed_angle(n + SUN_ECLIPTIC_LONGITUDE_EPOCH - SUN_ECLIPTIC_LONGITUDE_PERIGEE);

    // Eccentric anomaly, then true anomaly in degrees
    let eccentric = kepler::solve(sun_mean_anomaly, SUN_ECCENTRICITY)?;
    let tan_half_true =
        ((1.0 + SUN_ECCENTRICITY) / (1.0 - SUN_ECCENTRICITY)).sqrt() * (eccentric / 2.0).tan();
    let true_anomaly = 2.0 * tan_half_true.atan().to_degrees();

    // Sun's geocentric ecliptic longitude
    let lambda_sun = fixed_angle(true_anomaly + SUN_ECLIPTIC_LONGITUDE_PERIGEE);

    // Orbital distance factor and derived distance / angular diameter
    let distance_factor = (1.0 + SUN_ECCENTRICITY * dcos(true_anomaly))
        / (1.0 - SUN_ECCENTRICITY * SUN_ECCENTRICITY);
    let sun = SunState {
        distance_km: SUN_SEMI_MAJOR_AXIS_KM / distance_factor,
        angular_diameter_deg: distance_factor * SUN_ANGULAR_SIZE_DEG,
    };

    // -- Lunar branch --

    // Moon's mean longitude and mean anomaly
    let moon_longitude = fixed_angle(13.176_396_6 * day_offset + MOON_MEAN_LONGITUDE_EPOCH);
    let moon_mean_anomaly =
        fixed_angle(moon_longitude - 0.111_404_1 * day_offset - MOON_MEAN_LONGITUDE_PERIGEE);

    // Periodic corrections to the mean anomaly
    let evection = 1.2739 * dsin(2.0 * (moon_longitude - lambda_sun) - moon_mean_anomaly);
    let annual_equation = 0.1858 * dsin(sun_mean_anomaly);
    let a3 = 0.37 * dsin(sun_mean_anomaly);
    let corrected_anomaly = moon_mean_anomaly + evection - annual_equation - a3;

    // Equation of the center and a further small correction
    let equation_of_center = 6.2886 * dsin(corrected_anomaly);
    let a4 = 0.214 * dsin(2.0 * corrected_anomaly);

    // Corrected longitude, then the variation, giving true longitude
    let corrected_longitude =
        moon_longitude + evection + equation_of_center - annual_equation + a4;
    let variation = 0.6593 * dsin(2.0 * (corrected_longitude - lambda_sun));
    let true_longitude = corrected_longitude + variation;

    // Age of the Moon in degrees past new
    let age_degrees = true_longitude - lambda_sun;
    let phase_fraction = fixed_angle(age_degrees) / 360.0;

    // Keplerian-style distance from the corrected anomaly
    let distance_km = (MOON_SEMI_MAJOR_AXIS_KM * (1.0 - MOON_ECCENTRICITY * MOON_ECCENTRICITY))
        / (1.0 + MOON_ECCENTRICITY * dcos(corrected_anomaly + equation_of_center));
    let angular_diameter_deg = MOON_ANGULAR_SIZE_DEG / (distance_km / MOON_SEMI_MAJOR_AXIS_KM);

    let moon = MoonState {
        phase_fraction,
        illuminated_fraction: (1.0 - dcos(age_degrees)) / 2.0,
        age_days: SYNODIC_MONTH_DAYS * phase_fraction,
        distance_km,
        angular_diameter_deg,
    };

    Ok((sun, moon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar;

    /// Day offset from the orbital epoch for an integer Julian Day Number.
    fn offset_for(day: i64, month: i64, year: i64) -> f64 {
        calendar::gregorian_to_julian(day, month, year) as f64 - EPOCH
    }

    #[test]
    fn fixed_angle_reduces_to_principal_range() {
        assert_eq!(fixed_angle(0.0), 0.0);
        assert_eq!(fixed_angle(360.0), 0.0);
        assert!((fixed_angle(725.0) - 5.0).abs() < 1e-9);
        assert!((fixed_angle(-10.0) - 350.0).abs() < 1e-9);
        for angle in [-1234.5, -0.001, 0.0, 359.999, 7200.25] {
            let reduced = fixed_angle(angle);
            assert!(
                (0.0..360.0).contains(&reduced),
                "fixed_angle({angle}) = {reduced} out of range"
            );
        }
    }

    #[test]
    fn moon_state_invariants_hold_across_a_decade() {
        // Sweep ~10 years of day offsets at an awkward stride so the
        // samples do not line up with the synodic month.
        let mut day = 0.0;
        while day < 3653.0 {
            let (sun, moon) = evaluate(day).expect("model should evaluate");

            assert!(
                (0.0..1.0).contains(&moon.phase_fraction),
                "phase fraction {} out of [0,1) at day {day}",
                moon.phase_fraction
            );
            assert!(
                (0.0..=1.0).contains(&moon.illuminated_fraction),
                "illuminated fraction {} out of [0,1] at day {day}",
                moon.illuminated_fraction
            );
            assert!(
                (0.0..SYNODIC_MONTH_DAYS).contains(&moon.age_days),
                "age {} out of synodic range at day {day}",
                moon.age_days
            );
            assert!(moon.distance_km > 0.0);
            assert!(moon.angular_diameter_deg > 0.0);
            assert!(sun.distance_km > 0.0);
            assert!(sun.angular_diameter_deg > 0.0);

            day += 3.7;
        }
    }

    #[test]
    fn lunar_distance_stays_within_orbital_bounds() {
        // Perigee/apogee of the real orbit are roughly 356 400 / 406 700 km;
        // the low-precision model should stay comfortably inside ±3%.
        let mut day = 0.0;
        while day < 730.0 {
            let (_, moon) = evaluate(day).unwrap();
            assert!(
                (345_000.0..420_000.0).contains(&moon.distance_km),
                "implausible lunar distance {} km at day {day}",
                moon.distance_km
            );
            // Angular diameter scales inversely with distance
            let expected = MOON_ANGULAR_SIZE_DEG * MOON_SEMI_MAJOR_AXIS_KM / moon.distance_km;
            assert!((moon.angular_diameter_deg - expected).abs() < 1e-9);
            day += 1.1;
        }
    }

    #[test]
    fn known_new_moon_reads_as_new() {
        // New moon 6 January 2000, 18:14 UT. Noon on the 7th is less
        // than a day into the cycle.
        let (_, moon) = evaluate(offset_for(7, 1, 2000)).unwrap();
        assert!(
            moon.phase_fraction < 0.05,
            "phase fraction {} should be just past new",
            moon.phase_fraction
        );
        assert!(
            moon.illuminated_fraction < 0.05,
            "a day-old moon is barely illuminated, got {}",
            moon.illuminated_fraction
        );
    }

    #[test]
    fn known_full_moon_reads_as_full() {
        // Full moon 21 January 2000, 04:40 UT (total lunar eclipse).
        let (_, moon) = evaluate(offset_for(21, 1, 2000)).unwrap();
        assert!(
            (moon.phase_fraction - 0.5).abs() < 0.03,
            "phase fraction {} should be near full",
            moon.phase_fraction
        );
        assert!(
            moon.illuminated_fraction > 0.97,
            "full moon should be almost fully lit, got {}",
            moon.illuminated_fraction
        );
    }

    #[test]
    fn phase_repeats_after_one_synodic_month() {
        // One mean synodic month later the phase fraction should come
        // back around. True phase wobbles about the mean by a fraction
        // of a day, hence the loose tolerance.
        for day in [500.0, 5000.0, 12345.0] {
            let (_, a) = evaluate(day).unwrap();
            let (_, b) = evaluate(day + SYNODIC_MONTH_DAYS).unwrap();
            let delta = (a.phase_fraction - b.phase_fraction).abs();
            let wrapped = delta.min(1.0 - delta);
            assert!(
                wrapped < 0.05,
                "phase fraction drifted by {wrapped} over one synodic month at day {day}"
            );
        }
    }
}
