use chrono::{DateTime, DurationRound, TimeDelta, Utc};

use crate::request::MonitoringType;

/// Query time range computed from a single captured instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub period_seconds: i32,
}

impl TimeWindow {
    /// Computes the window for the given granularity ending now
    pub fn compute(monitoring_type: MonitoringType) -> TimeWindow {
        TimeWindow::compute_at(monitoring_type, Utc::now())
    }

    /// Both bounds derive from the one `now` so the span is exact
    /// regardless of how long this call takes
    pub fn compute_at(monitoring_type: MonitoringType, now: DateTime<Utc>) -> TimeWindow {
        let now = now
            .duration_trunc(TimeDelta::seconds(1))
            .unwrap_or(now);
        // Lookback is longer than one period to absorb Cloudwatch
        // publishing lag
        let (lookback, period_seconds) = match monitoring_type {
            MonitoringType::Detailed => (TimeDelta::seconds(90), 60),
            MonitoringType::Basic => (TimeDelta::seconds(450), 360),
        };
        TimeWindow {
            start: now - lookback,
            end: now,
            period_seconds,
        }
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::*;

    #[test]
    fn test_basic_window_is_450_seconds() {
        let window = TimeWindow::compute(MonitoringType::Basic);
        assert_eq!((window.end - window.start).num_seconds(), 450);
        assert_eq!(window.period_seconds, 360);
    }

    #[test]
    fn test_detailed_window_is_90_seconds() {
        let window = TimeWindow::compute(MonitoringType::Detailed);
        assert_eq!((window.end - window.start).num_seconds(), 90);
        assert_eq!(window.period_seconds, 60);
    }

    #[test]
    fn test_window_has_second_precision() {
        let window = TimeWindow::compute(MonitoringType::Basic);
        assert_eq!(window.end.timestamp_subsec_nanos(), 0);
        assert_eq!(window.start.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_same_instant_yields_identical_windows() {
        let now = Utc::now();
        let first = TimeWindow::compute_at(MonitoringType::Detailed, now);
        let second = TimeWindow::compute_at(MonitoringType::Detailed, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_windows_advance_with_wall_clock() {
        let earlier = TimeWindow::compute_at(MonitoringType::Basic, Utc::now());
        let later =
            TimeWindow::compute_at(MonitoringType::Basic, Utc::now() + TimeDelta::seconds(2));
        assert_gt!(later.start, earlier.start);
        assert_gt!(later.end, earlier.end);
    }
}
