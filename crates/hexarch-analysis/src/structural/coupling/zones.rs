//! Zone classification on the (instability, abstractness) plane.

use hexarch_core::constants::MAIN_SEQUENCE_TOLERANCE;

use super::martin_metrics::main_sequence_distance;
use super::types::ZoneClassification;

/// Which side of the 0.5 midline a coordinate falls on, if any.
fn half(value: f64) -> Option<bool> {
    if value < 0.5 {
        Some(false)
    } else if value > 0.5 {
        Some(true)
    } else {
        None
    }
}

/// Zone for a package at `(instability, abstractness)`.
///
/// Anything within the tolerance band of the main sequence is on it.
/// Off the band, the stable-concrete quadrant is the zone of pain and the
/// unstable-abstract quadrant the zone of uselessness; the two mixed
/// quadrants and the midlines count as main sequence.
pub fn classify_zone(instability: f64, abstractness: f64) -> ZoneClassification {
    if main_sequence_distance(instability, abstractness) <= MAIN_SEQUENCE_TOLERANCE {
        return ZoneClassification::MainSequence;
    }
    match (half(instability), half(abstractness)) {
        (Some(false), Some(false)) => ZoneClassification::ZoneOfPain,
        (Some(true), Some(true)) => ZoneClassification::ZoneOfUselessness,
        _ => ZoneClassification::MainSequence,
    }
}
