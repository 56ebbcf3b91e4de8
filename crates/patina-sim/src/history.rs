//! Bounded history of recorded environment/degradation samples.

use std::collections::VecDeque;

use patina_core::EnvironmentState;
use patina_kinetics::DegradationSample;

/// Default number of points retained before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// One recorded sample: the environment at record time plus the degradation
/// level it had produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryPoint {
    /// Normalized exposure at record time, in days.
    pub time_days:           f64,
    pub temperature_c:       f64,
    pub humidity_pct:        f64,
    pub light_klux:          f64,
    /// Scientific degradation at record time, as a percentage.  The
    /// amplified visual fraction is never recorded here.
    pub degradation_percent: f64,
}

impl HistoryPoint {
    pub fn capture(env: &EnvironmentState, sample: &DegradationSample) -> Self {
        Self {
            time_days:           sample.total_days,
            temperature_c:       env.temperature_c(),
            humidity_pct:        env.humidity_pct(),
            light_klux:          env.light_klux(),
            degradation_percent: sample.degradation_percent(),
        }
    }
}

/// Fixed-capacity FIFO ring of [`HistoryPoint`]s.
///
/// Pushing beyond capacity evicts the oldest point, so the buffer always
/// holds the most recent window. Iteration runs oldest to newest.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    points:   VecDeque<HistoryPoint>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A capacity of zero is treated as one; an empty window would make every
    /// push a silent no-op.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { points: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, evicting the oldest if the buffer is full.
    pub fn push(&mut self, point: HistoryPoint) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points in recording order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryPoint> {
        self.points.iter()
    }

    pub fn oldest(&self) -> Option<&HistoryPoint> {
        self.points.front()
    }

    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.points.back()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a HistoryBuffer {
    type Item = &'a HistoryPoint;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
