//! Clock-text conversions shared by the timeline labels and the fact
//! timestamp format.

/// `M:SS` — timeline label form, minutes unpadded.
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Zero-padded `HH:MM:SS` — the fact timestamp wire form.
pub fn format_hhmmss(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Parses `HH:MM:SS` or `MM:SS` into seconds. Any non-numeric or empty
/// field, or an unexpected field count, yields 0.0 rather than an error.
pub fn parse_timestamp(timestamp: &str) -> f64 {
    let mut parts = Vec::with_capacity(3);
    for field in timestamp.trim().split(':') {
        match field.trim().parse::<u64>() {
            Ok(value) => parts.push(value),
            Err(_) => return 0.0,
        }
    }

    match parts.as_slice() {
        [minutes, seconds] => (minutes * 60 + seconds) as f64,
        [hours, minutes, seconds] => (hours * 3600 + minutes * 60 + seconds) as f64,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_form_is_unpadded_minutes() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(61.9), "1:01");
        assert_eq!(format_clock(600.0), "10:00");
    }

    #[test]
    fn hhmmss_is_zero_padded() {
        assert_eq!(format_hhmmss(0.0), "00:00:00");
        assert_eq!(format_hhmmss(252.0), "00:04:12");
        assert_eq!(format_hhmmss(3661.0), "01:01:01");
    }

    #[test]
    fn parses_both_accepted_forms() {
        assert_eq!(parse_timestamp("00:04:12"), 252.0);
        assert_eq!(parse_timestamp("4:12"), 252.0);
        assert_eq!(parse_timestamp(" 01:00:00 "), 3600.0);
    }

    #[test]
    fn malformed_timestamps_yield_zero() {
        assert_eq!(parse_timestamp(""), 0.0);
        assert_eq!(parse_timestamp("abc"), 0.0);
        assert_eq!(parse_timestamp("1:2:3:4"), 0.0);
        assert_eq!(parse_timestamp("12"), 0.0);
        assert_eq!(parse_timestamp("12:"), 0.0);
        assert_eq!(parse_timestamp("1x:00"), 0.0);
    }

    #[quickcheck_macros::quickcheck]
    fn round_trips_through_hhmmss(seconds: u32) -> bool {
        let seconds = seconds as f64;
        parse_timestamp(&format_hhmmss(seconds)) == seconds
    }
}
