//! Zoom-aware timeline coordinates: marker interval selection, marker
//! offsets, and the time <-> axis-percentage mapping.
//!
//! Zoom is a percentage (100 = natural scale, UI range 50-200). Marker
//! offsets are whole seconds; positions are percentages of a horizontal
//! axis spanning `duration` seconds.

/// Hard ceiling on labeled markers regardless of duration, so very long
/// media never produces unbounded marker counts.
pub const MAX_MAJOR_MARKERS: u64 = 200;

const NICE_INTERVALS: [u64; 8] = [5, 10, 15, 30, 60, 120, 300, 600];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineMarkers {
    pub major_interval: u64,
    pub minor_interval: u64,
    /// Offsets carrying a time label.
    pub major: Vec<u64>,
    /// Unlabeled tick offsets; never coincides with a major offset.
    pub minor: Vec<u64>,
}

/// Labeled-marker interval in seconds for the given duration and zoom.
///
/// The base interval comes from the zoom tier; when that would put more than
/// [`MAX_MAJOR_MARKERS`] labels on the axis, the interval is rescaled upward
/// and snapped to the nearest "nice" value (whole multiples of 600s once the
/// nice set runs out) so the ceiling holds for any duration.
pub fn major_interval(duration: f64, zoom: u32) -> u64 {
    let duration = duration.max(0.0);
    let base = base_interval(zoom);

    if marker_count(duration, base) <= MAX_MAJOR_MARKERS {
        return base;
    }

    let needed = (duration / MAX_MAJOR_MARKERS as f64).floor() as u64 + 1;
    for nice in NICE_INTERVALS {
        if nice >= needed {
            return nice;
        }
    }
    needed.div_ceil(600) * 600
}

/// Unlabeled-tick interval derived from the major interval via a fixed
/// table; unlisted majors fall back to half the major interval.
pub fn minor_interval(major: u64) -> u64 {
    match major {
        10 => 2,
        15 | 20 => 5,
        30 => 10,
        60 => 15,
        120 => 30,
        other => (other / 2).max(1),
    }
}

/// Major marker offsets: every multiple of `interval` in `0..=duration`.
pub fn major_markers(duration: f64, interval: u64) -> Vec<u64> {
    offsets(duration, interval).collect()
}

/// Minor marker offsets, excluding any offset that coincides with a major
/// marker so nothing renders twice.
pub fn minor_markers(duration: f64, major: u64, minor: u64) -> Vec<u64> {
    let major = major.max(1);
    offsets(duration, minor).filter(|m| m % major != 0).collect()
}

/// Full marker configuration for one duration/zoom pair.
pub fn markers(duration: f64, zoom: u32) -> TimelineMarkers {
    let major_interval = major_interval(duration, zoom);
    let minor_interval = minor_interval(major_interval);

    TimelineMarkers {
        major_interval,
        minor_interval,
        major: major_markers(duration, major_interval),
        minor: minor_markers(duration, major_interval, minor_interval),
    }
}

/// Axis position for a time, as a percentage clamped to `[0, 100]`.
/// A zero duration maps every time to 0 (no division by zero).
pub fn position_percent(time: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    (time / duration * 100.0).clamp(0.0, 100.0)
}

/// Inverse mapping for click-to-seek: percentage of the axis back to a time
/// clamped to `[0, duration]`.
pub fn time_at_percent(percent: f64, duration: f64) -> f64 {
    let duration = duration.max(0.0);
    (percent / 100.0 * duration).clamp(0.0, duration)
}

fn base_interval(zoom: u32) -> u64 {
    if zoom >= 200 {
        10
    } else if zoom >= 150 {
        15
    } else if zoom >= 120 {
        20
    } else if zoom >= 100 {
        30
    } else if zoom >= 75 {
        60
    } else {
        120
    }
}

fn marker_count(duration: f64, interval: u64) -> u64 {
    (duration / interval as f64).floor() as u64 + 1
}

fn offsets(duration: f64, interval: u64) -> impl Iterator<Item = u64> {
    let limit = duration.max(0.0).floor() as u64;
    (0..=limit).step_by(interval.max(1) as usize)
}
