//! Rough urban drive-time estimate from a straight-line distance
//!
//! A typical speed tier is picked by distance, then a fluid-traffic and a
//! heavy-traffic speed are derived from it. Both estimates include a fixed
//! overhead for parking and getting out of the neighbourhood.

use serde::{Deserialize, Serialize};

const OVERHEAD_MINUTES: f64 = 5.0;
const FAST_FACTOR: f64 = 1.3;
const SLOW_FACTOR: f64 = 0.6;

/// Estimated range in whole minutes, `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveTimeRange {
    pub min: u32,
    pub max: u32,
}

/// Typical speed in km/h for a trip of this length
fn typical_speed_kmh(km: f64) -> f64 {
    if km <= 3.0 {
        18.0
    } else if km <= 10.0 {
        22.0
    } else {
        35.0
    }
}

fn minutes_at(km: f64, speed_kmh: f64) -> u32 {
    let minutes = (OVERHEAD_MINUTES + (km / speed_kmh) * 60.0).round();
    minutes.max(1.0) as u32
}

/// Estimate the drive time range for a distance in kilometres.
///
/// Returns `None` for a missing or non-finite distance.
pub fn estimate_drive_time_range_minutes(km: Option<f64>) -> Option<DriveTimeRange> {
    let km = km.filter(|km| km.is_finite())?;
    let typical = typical_speed_kmh(km);

    let fast = minutes_at(km, typical * FAST_FACTOR);
    let slow = minutes_at(km, typical * SLOW_FACTOR);

    Some(DriveTimeRange { min: fast.min(slow), max: fast.max(slow) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_missing_or_non_finite_is_none() {
        assert_eq!(estimate_drive_time_range_minutes(None), None);
        assert_eq!(estimate_drive_time_range_minutes(Some(f64::NAN)), None);
        assert_eq!(estimate_drive_time_range_minutes(Some(f64::INFINITY)), None);
        assert_eq!(estimate_drive_time_range_minutes(Some(f64::NEG_INFINITY)), None);
    }

    #[test]
    fn test_speed_tiers() {
        // 3 km at 23.4 and 10.8 km/h
        assert_eq!(
            estimate_drive_time_range_minutes(Some(3.0)),
            Some(DriveTimeRange { min: 13, max: 22 })
        );
        // 5 km at 28.6 and 13.2 km/h
        assert_eq!(
            estimate_drive_time_range_minutes(Some(5.0)),
            Some(DriveTimeRange { min: 15, max: 28 })
        );
        // 25.4 km at 45.5 and 21 km/h
        assert_eq!(
            estimate_drive_time_range_minutes(Some(25.4)),
            Some(DriveTimeRange { min: 38, max: 78 })
        );
    }

    #[test]
    fn test_zero_distance_is_overhead_only() {
        assert_eq!(
            estimate_drive_time_range_minutes(Some(0.0)),
            Some(DriveTimeRange { min: 5, max: 5 })
        );
    }

    proptest! {
        #[test]
        fn prop_range_is_ordered_and_positive(km in 0.0f64..20_000.0) {
            let range = estimate_drive_time_range_minutes(Some(km)).unwrap();
            prop_assert!(range.min >= 1);
            prop_assert!(range.min <= range.max);
        }
    }
}
