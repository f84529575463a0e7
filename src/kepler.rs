//! # Kepler Equation Solver
//!
//! Newton-Raphson iteration on Kepler's equation `E - e*sin(E) = M`,
//! used by the solar branch of the orbital model. The lunar orbit does
//! not go through this solver; it uses a direct correction series
//! instead (see `orbit`).
//!
//! The iteration is capped so a pathological eccentricity surfaces as an
//! explicit [`KeplerError`] instead of a hang.

use thiserror::Error;

/// Residual tolerance at which the iteration is considered converged.
const EPSILON: f64 = 1e-6;

/// Hard cap on Newton-Raphson steps. Realistic eccentricities converge
/// in a handful of iterations; reaching the cap means the inputs were
/// outside the solver's domain.
const MAX_ITERATIONS: usize = 50;

/// Failure modes of the Kepler solver.
#[derive(Error, Debug)]
pub enum KeplerError {
    /// The iteration failed to reach the residual tolerance.
    #[error(
        "Kepler iteration did not converge within {MAX_ITERATIONS} steps \
         (mean anomaly {mean_anomaly_deg}°, eccentricity {eccentricity})"
    )]
    NonConvergence {
        mean_anomaly_deg: f64,
        eccentricity: f64,
    },
}

/// Solve Kepler's equation for the eccentric anomaly, in radians.
///
/// `mean_anomaly_deg` is the mean anomaly in degrees; the result is the
/// eccentric anomaly `E` in radians satisfying `E - e*sin(E) = M` to
/// within `1e-6`. For zero eccentricity the equation is already solved
/// and the mean anomaly is returned unchanged (converted to radians).
pub fn solve(mean_anomaly_deg: f64, eccentricity: f64) -> Result<f64, KeplerError> {
    let m = mean_anomaly_deg.to_radians();
    let mut e = m;

    for _ in 0..MAX_ITERATIONS {
        let delta = e - eccentricity * e.sin() - m;
        if delta.abs() <= EPSILON {
            return Ok(e);
        }
        e -= delta / (1.0 - eccentricity * e.cos());
    }

    Err(KeplerError::NonConvergence {
        mean_anomaly_deg,
        eccentricity,
    })
}
