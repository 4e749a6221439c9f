// SPDX-License-Identifier: MPL-2.0
//! Time display formatting for the seek bar and clip details.

/// Formats a position in seconds for display.
///
/// Negative input renders as the placeholder `--:--` so an unknown
/// position never shows up as a bogus time. Durations of an hour or
/// more use `H:MM:SS`, everything shorter uses `M:SS`.
pub fn format_time_from_secs(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "--:--".to_string();
    }
    let total_secs = seconds as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_time_from_secs(0.0), "0:00");
    }

    #[test]
    fn formats_seconds_and_minutes() {
        assert_eq!(format_time_from_secs(45.0), "0:45");
        assert_eq!(format_time_from_secs(125.0), "2:05");
        assert_eq!(format_time_from_secs(600.0), "10:00");
    }

    #[test]
    fn formats_hours_without_padding_the_hour() {
        assert_eq!(format_time_from_secs(3600.0), "1:00:00");
        assert_eq!(format_time_from_secs(3665.0), "1:01:05");
        assert_eq!(format_time_from_secs(36_000.0), "10:00:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_time_from_secs(59.999), "0:59");
    }

    #[test]
    fn negative_renders_placeholder() {
        assert_eq!(format_time_from_secs(-1.0), "--:--");
        assert_eq!(format_time_from_secs(-0.001), "--:--");
    }

    #[test]
    fn non_finite_renders_placeholder() {
        assert_eq!(format_time_from_secs(f64::NAN), "--:--");
        assert_eq!(format_time_from_secs(f64::INFINITY), "--:--");
    }
}
