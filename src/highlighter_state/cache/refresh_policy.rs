//! When to rescan.
//!
//! A scan is due when more than `interval_ticks` have passed since the last one, or when the
//! observer has moved further than the threshold from where the last scan was centred. Both
//! comparisons are strict. A few host events also force a scan: the very first step, a
//! dimension change and the world clock running backwards.

use std::fmt;

use cgmath::{MetricSpace, Point3};

use crate::config::HighlighterConfig;
use crate::highlighter_state::voxels::position::DimensionId;

/// Where and when the cache was last rebuilt.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshStamp {
    /// Host tick of the refresh.
    pub tick: u64,
    /// Observer position at the refresh.
    pub position: Point3<f64>,
    /// Observer dimension at the refresh.
    pub dimension: DimensionId,
}

/// Why a refresh was triggered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RefreshReason {
    /// Nothing has been scanned yet.
    Initial,
    /// The refresh interval elapsed.
    Interval,
    /// The observer moved past the threshold.
    Moved,
    /// The observer is in a different dimension.
    DimensionChanged,
    /// The host clock is behind the last refresh.
    TickRewound,
}

impl fmt::Display for RefreshReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RefreshReason::Initial => "initial scan",
            RefreshReason::Interval => "interval elapsed",
            RefreshReason::Moved => "observer moved",
            RefreshReason::DimensionChanged => "dimension changed",
            RefreshReason::TickRewound => "world clock rewound",
        };
        f.write_str(reason)
    }
}

/// Staleness thresholds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RefreshPolicy {
    /// A refresh is due once strictly more ticks than this have passed.
    pub interval_ticks: u64,
    /// A refresh is due once the squared displacement strictly exceeds this.
    pub move_threshold_squared: f64,
}

impl RefreshPolicy {
    /// Extracts the refresh settings from the config.
    pub fn from_config(config: &HighlighterConfig) -> Self {
        RefreshPolicy {
            interval_ticks: config.refresh_interval_ticks,
            move_threshold_squared: config.move_threshold_squared,
        }
    }

    /// Decides whether a refresh is due.
    ///
    /// # Arguments
    /// * `last` - The previous refresh, if any
    /// * `tick` - The current host tick
    /// * `position` - The observer's current position
    /// * `dimension` - The observer's current dimension
    ///
    /// # Returns
    /// The first matching reason, or `None` if the cache is still fresh.
    pub fn due(
        &self,
        last: Option<&RefreshStamp>,
        tick: u64,
        position: Point3<f64>,
        dimension: &DimensionId,
    ) -> Option<RefreshReason> {
        let Some(last) = last else {
            return Some(RefreshReason::Initial);
        };

        if last.dimension != *dimension {
            return Some(RefreshReason::DimensionChanged);
        }
        if tick < last.tick {
            return Some(RefreshReason::TickRewound);
        }
        if tick - last.tick > self.interval_ticks {
            return Some(RefreshReason::Interval);
        }
        if position.distance2(last.position) > self.move_threshold_squared {
            return Some(RefreshReason::Moved);
        }
        None
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::from_config(&HighlighterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(tick: u64, position: Point3<f64>) -> RefreshStamp {
        RefreshStamp {
            tick,
            position,
            dimension: DimensionId::nether(),
        }
    }

    fn origin() -> Point3<f64> {
        Point3::new(0.0, 64.0, 0.0)
    }

    #[test]
    fn first_step_always_refreshes() {
        let policy = RefreshPolicy::default();
        assert_eq!(
            policy.due(None, 0, origin(), &DimensionId::nether()),
            Some(RefreshReason::Initial)
        );
    }

    #[test]
    fn interval_boundary_is_strict() {
        let policy = RefreshPolicy::default();
        let last = stamp(100, origin());
        let nether = DimensionId::nether();

        assert_eq!(policy.due(Some(&last), 120, origin(), &nether), None);
        assert_eq!(
            policy.due(Some(&last), 121, origin(), &nether),
            Some(RefreshReason::Interval)
        );
    }

    #[test]
    fn movement_boundary_is_strict() {
        let policy = RefreshPolicy::default();
        let last = stamp(100, origin());
        let nether = DimensionId::nether();

        let exactly_eight = Point3::new(8.0, 64.0, 0.0);
        assert_eq!(policy.due(Some(&last), 101, exactly_eight, &nether), None);

        let just_past = Point3::new(0.0, 64.0, -8.01);
        assert_eq!(
            policy.due(Some(&last), 101, just_past, &nether),
            Some(RefreshReason::Moved)
        );
    }

    #[test]
    fn diagonal_movement_uses_squared_length() {
        let policy = RefreshPolicy::default();
        let last = stamp(0, origin());
        let nether = DimensionId::nether();

        // 5^2 + 5^2 + 3^2 = 59
        assert_eq!(policy.due(Some(&last), 1, Point3::new(5.0, 69.0, 3.0), &nether), None);
        // 5^2 + 5^2 + 4^2 = 66
        assert_eq!(
            policy.due(Some(&last), 1, Point3::new(5.0, 69.0, 4.0), &nether),
            Some(RefreshReason::Moved)
        );
    }

    #[test]
    fn dimension_change_forces_refresh() {
        let policy = RefreshPolicy::default();
        let last = stamp(100, origin());
        assert_eq!(
            policy.due(Some(&last), 101, origin(), &DimensionId::overworld()),
            Some(RefreshReason::DimensionChanged)
        );
    }

    #[test]
    fn rewound_clock_forces_refresh() {
        let policy = RefreshPolicy::default();
        let last = stamp(100, origin());
        assert_eq!(
            policy.due(Some(&last), 5, origin(), &DimensionId::nether()),
            Some(RefreshReason::TickRewound)
        );
    }
}
