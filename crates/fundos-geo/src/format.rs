//! Display helpers for distances and durations

use crate::drive_time::DriveTimeRange;

/// "850 m" below one kilometre, "12.3 km" otherwise; `None` if not finite
pub fn format_distance_km(km: f64) -> Option<String> {
    if !km.is_finite() {
        return None;
    }
    if km < 1.0 {
        Some(format!("{} m", (km * 1000.0).round() as i64))
    } else {
        Some(format!("{:.1} km", km))
    }
}

/// "45 min" below an hour, "1 h 5 min" otherwise
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{} h {} min", minutes / 60, minutes % 60)
    }
}

/// "13 min–22 min"
pub fn format_drive_range(range: &DriveTimeRange) -> String {
    format!("{}–{}", format_minutes(range.min), format_minutes(range.max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_formatting() {
        assert_eq!(format_distance_km(0.4567).as_deref(), Some("457 m"));
        assert_eq!(format_distance_km(0.0).as_deref(), Some("0 m"));
        assert_eq!(format_distance_km(1.0).as_deref(), Some("1.0 km"));
        assert_eq!(format_distance_km(25.44).as_deref(), Some("25.4 km"));
        assert_eq!(format_distance_km(f64::NAN), None);
    }

    #[test]
    fn test_minutes_formatting() {
        assert_eq!(format_minutes(1), "1 min");
        assert_eq!(format_minutes(59), "59 min");
        assert_eq!(format_minutes(60), "1 h 0 min");
        assert_eq!(format_minutes(135), "2 h 15 min");
    }

    #[test]
    fn test_range_formatting() {
        let range = DriveTimeRange { min: 38, max: 78 };
        assert_eq!(format_drive_range(&range), "38 min–1 h 18 min");
    }
}
