//! # Phase Classification
//!
//! Maps a continuous phase fraction in [0, 1) to one of the eight named
//! phases. The quarter fractions (0, ¼, ½, ¾, 1) are each widened by a
//! fixed precision margin into nine breakpoints; the boundary between two
//! adjacent labels is the midpoint of the breakpoint pair, and the
//! classifier returns the label of the first boundary that exceeds the
//! fraction. The trailing band aliases back to New Moon, closing the
//! cycle at 1.0.

use crate::constants::PHASE_PRECISION;
use crate::PhaseLabel;

/// Quarter-phase fractions, each widened by the precision margin.
/// Adjacent pairs delimit the eight labeled bands plus the closing alias.
const BREAKPOINTS: [f64; 9] = [
    0.0 + PHASE_PRECISION,  // New Moon
    0.25 - PHASE_PRECISION, // Waxing Crescent Moon
    0.25 + PHASE_PRECISION, // First Quarter Moon
    0.50 - PHASE_PRECISION, // Waxing Gibbous Moon
    0.50 + PHASE_PRECISION, // Full Moon
    0.75 - PHASE_PRECISION, // Waning Gibbous Moon
    0.75 + PHASE_PRECISION, // Last Quarter Moon
    1.00 - PHASE_PRECISION, // Waning Crescent Moon
    1.00 + PHASE_PRECISION, // New Moon (cycle closes)
];

/// Labels for the bands delimited by [`BREAKPOINTS`]; the ninth entry
/// aliases the wrap-around back to New.
const LABELS: [PhaseLabel; 9] = [
    PhaseLabel::New,
    PhaseLabel::WaxingCrescent,
    PhaseLabel::FirstQuarter,
    PhaseLabel::WaxingGibbous,
    PhaseLabel::Full,
    PhaseLabel::WaningGibbous,
    PhaseLabel::LastQuarter,
    PhaseLabel::WaningCrescent,
    PhaseLabel::New,
];

/// Boundary between two adjacent breakpoints.
fn band_boundary(lower: f64, upper: f64) -> f64 {
    (lower + upper) / 2.0
}

/// Classify a phase fraction in [0, 1) as a named phase.
///
/// Scans the band boundaries in ascending order and returns the label of
/// the first one exceeding the fraction; anything past the last boundary
/// is the closing New Moon band.
pub fn classify(phase_fraction: f64) -> PhaseLabel {
    for (index, pair) in BREAKPOINTS.windows(2).enumerate() {
        if phase_fraction < band_boundary(pair[0], pair[1]) {
            return LABELS[index];
        }
    }
    LABELS[8]
}
