//! Ascendant resampling across a window, coalesced into per-rashi segments.

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use phala_ephemeris::{Moment, compute_positions};
use phala_vedic_base::{Graha, Rashi, rashi_from_longitude};

use crate::error::ChartError;

pub const DEFAULT_DURATION_MINUTES: i64 = 240;
pub const DEFAULT_RESOLUTION_MINUTES: i64 = 10;
/// Upper bound on ascendant samples per timeline.
pub const MAX_TIMELINE_SAMPLES: i64 = 10_000;

/// One stretch of the window during which the ascendant stays in `rashi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagnaTimelineSegment {
    pub rashi: Rashi,
    pub lord: Graha,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

fn minutes(n: i64) -> Result<TimeDelta, ChartError> {
    TimeDelta::try_minutes(n)
        .ok_or_else(|| ChartError::InvalidWindow(format!("{n} minutes out of range")))
}

/// Sample the ascendant at `start + k * resolution` for every
/// `k * resolution < duration` and merge consecutive equal signs.
///
/// Segments are contiguous: the first starts at the window start, each
/// later one starts where the previous ended, and the last ends at
/// `start + duration`.
pub fn compute_lagna_timeline(
    moment: &Moment,
    duration_minutes: i64,
    resolution_minutes: i64,
) -> Result<Vec<LagnaTimelineSegment>, ChartError> {
    if duration_minutes <= 0 {
        return Err(ChartError::InvalidWindow(format!(
            "duration {duration_minutes} must be positive"
        )));
    }
    if resolution_minutes <= 0 {
        return Err(ChartError::InvalidWindow(format!(
            "resolution {resolution_minutes} must be positive"
        )));
    }
    let samples = (duration_minutes + resolution_minutes - 1) / resolution_minutes;
    if samples > MAX_TIMELINE_SAMPLES {
        return Err(ChartError::InvalidWindow(format!(
            "{samples} samples exceeds limit of {MAX_TIMELINE_SAMPLES}"
        )));
    }

    let window_start = moment.local_datetime()?;
    let window_end = window_start
        .checked_add_signed(minutes(duration_minutes)?)
        .ok_or_else(|| ChartError::InvalidWindow("window end out of range".to_string()))?;

    let mut segments: Vec<LagnaTimelineSegment> = Vec::new();
    for k in 0..samples {
        let offset = k * resolution_minutes;
        let sample = moment.plus_minutes(offset)?;
        let ascendant = compute_positions(&sample)?.ascendant;
        let rashi = rashi_from_longitude(ascendant).rashi;
        trace!(offset, ascendant, ?rashi, "lagna sample");

        if segments.last().is_some_and(|s| s.rashi == rashi) {
            continue;
        }
        let at = sample.local_datetime()?;
        if let Some(prev) = segments.last_mut() {
            prev.end = at;
        }
        segments.push(LagnaTimelineSegment {
            rashi,
            lord: rashi.lord(),
            start: at,
            end: window_end,
        });
    }

    for s in &segments {
        debug!(rashi = s.rashi.name(), start = %s.start, end = %s.end, "lagna segment");
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phala_ephemeris::GeoLocation;

    fn start() -> Moment {
        Moment::new(2024, 4, 12, 18, 0, 5.5, GeoLocation::new(19.076, 72.8777)).unwrap()
    }

    #[test]
    fn default_window_contiguous() {
        let m = start();
        let segs =
            compute_lagna_timeline(&m, DEFAULT_DURATION_MINUTES, DEFAULT_RESOLUTION_MINUTES)
                .unwrap();
        assert!(!segs.is_empty());
        let t0 = m.local_datetime().unwrap();
        assert_eq!(segs[0].start, t0);
        assert_eq!(segs[segs.len() - 1].end, t0 + TimeDelta::minutes(240));
        for pair in segs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_ne!(pair[0].rashi, pair[1].rashi);
        }
        for s in &segs {
            assert!(s.start < s.end);
            assert_eq!(s.lord, s.rashi.lord());
        }
    }

    #[test]
    fn four_hours_spans_several_signs() {
        // The ascendant crosses a sign roughly every two hours.
        let segs = compute_lagna_timeline(&start(), 240, 10).unwrap();
        assert!(segs.len() >= 2, "got {} segments", segs.len());
    }

    #[test]
    fn rejects_empty_window() {
        assert!(matches!(
            compute_lagna_timeline(&start(), 0, 10),
            Err(ChartError::InvalidWindow(_))
        ));
        assert!(matches!(
            compute_lagna_timeline(&start(), 240, -5),
            Err(ChartError::InvalidWindow(_))
        ));
    }

    #[test]
    fn rejects_too_many_samples() {
        assert!(matches!(
            compute_lagna_timeline(&start(), 20_001, 2),
            Err(ChartError::InvalidWindow(_))
        ));
    }

    #[test]
    fn resolution_coarser_than_duration() {
        let segs = compute_lagna_timeline(&start(), 5, 60).unwrap();
        assert_eq!(segs.len(), 1);
        let t0 = start().local_datetime().unwrap();
        assert_eq!(segs[0].end, t0 + TimeDelta::minutes(5));
    }
}
