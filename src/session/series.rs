//! Bounded estimate time series.
//!
//! Drivers chart `(total, estimate)` points as sampling progresses; the
//! series holds at most `max_points` of them, evicting the oldest first.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One charted point: cumulative sample count and the estimate at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Cumulative sample count when the point was recorded.
    pub total: u64,
    /// π estimate at that sample count.
    pub estimate: f64,
}

/// Bounded FIFO of estimate points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateSeries {
    points: VecDeque<SeriesPoint>,
    max_points: usize,
}

impl EstimateSeries {
    /// Create a series holding at most `max_points` entries.
    ///
    /// # Panics
    ///
    /// Panics if `max_points` is zero.
    #[must_use]
    pub fn new(max_points: usize) -> Self {
        assert!(max_points > 0, "Series capacity must be positive");
        Self {
            points: VecDeque::with_capacity(max_points),
            max_points,
        }
    }

    /// Append a point, evicting the oldest once past capacity.
    pub fn push(&mut self, point: SeriesPoint) {
        self.points.push_back(point);
        while self.points.len() > self.max_points {
            self.points.pop_front();
        }
    }

    /// Number of retained points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Configured capacity.
    #[must_use]
    pub const fn max_points(&self) -> usize {
        self.max_points
    }

    /// Most recently appended point.
    #[must_use]
    pub fn latest(&self) -> Option<SeriesPoint> {
        self.points.back().copied()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    /// Drop all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
