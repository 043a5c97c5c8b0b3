//! `CongestionPredictor` — forecast blending and bottleneck classification.

use dln_core::{Road, Timestamp};
use rustc_hash::FxHashMap;

use crate::TrafficHistory;

/// Weight of the road's live congestion reading in the forecast.
pub const LIVE_WEIGHT: f64 = 0.7;
/// Weight of the historical hourly average in the forecast.
pub const HISTORY_WEIGHT: f64 = 0.3;

/// Bottleneck threshold applied when a class has no entry in the table.
pub const DEFAULT_THRESHOLD: f64 = 1.5;

// ── RoadClass ─────────────────────────────────────────────────────────────────

/// Coarse road classification, derived from average speed.
///
/// Faster roads tolerate more congestion before they become the constraining
/// leg of a route, so each class carries its own bottleneck threshold.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadClass {
    /// Average speed above 80 km/h.
    Main,
    /// Average speed above 50 km/h.
    Secondary,
    /// Everything else.
    Local,
}

impl RoadClass {
    /// Classify a road by its average speed.
    pub fn of(road: &Road) -> RoadClass {
        if road.avg_speed > 80.0 {
            RoadClass::Main
        } else if road.avg_speed > 50.0 {
            RoadClass::Secondary
        } else {
            RoadClass::Local
        }
    }
}

// ── CongestionPredictor ───────────────────────────────────────────────────────

/// Forecasts road congestion and classifies likely bottlenecks.
///
/// Owns a [`TrafficHistory`]; callers feed observations through
/// [`history_mut`](Self::history_mut) and query forecasts with
/// [`predict`](Self::predict).
#[derive(Debug, Clone)]
pub struct CongestionPredictor {
    history: TrafficHistory,
    /// Per-class bottleneck thresholds.  Classes without an entry fall back
    /// to [`DEFAULT_THRESHOLD`].
    thresholds: FxHashMap<RoadClass, f64>,
}

impl CongestionPredictor {
    pub fn new() -> Self {
        let mut thresholds = FxHashMap::default();
        thresholds.insert(RoadClass::Main, 2.0);
        thresholds.insert(RoadClass::Secondary, 1.5);
        thresholds.insert(RoadClass::Local, 1.2);
        Self { history: TrafficHistory::new(), thresholds }
    }

    /// Wrap an already-populated history.
    pub fn with_history(history: TrafficHistory) -> Self {
        Self { history, ..Self::new() }
    }

    pub fn history(&self) -> &TrafficHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut TrafficHistory {
        &mut self.history
    }

    /// Override the bottleneck threshold for one road class.
    pub fn set_threshold(&mut self, class: RoadClass, threshold: f64) {
        self.thresholds.insert(class, threshold);
    }

    /// Forecast congestion on `road` at `time`.
    ///
    /// Blend of the road's live reading and the historical average for the
    /// hour: `0.7 × live + 0.3 × historical`.  Live conditions dominate; the
    /// history term pulls the forecast toward the hour's typical pattern.
    pub fn predict(&self, road: &Road, time: Timestamp) -> f64 {
        let historical = self.history.historical_average(&road.id, time.hour_of_day());
        road.congestion * LIVE_WEIGHT + historical * HISTORY_WEIGHT
    }

    /// `true` when the forecast for `road` at `time` exceeds the bottleneck
    /// threshold of the road's class.
    pub fn is_likely_bottleneck(&self, road: &Road, time: Timestamp) -> bool {
        let threshold = self
            .thresholds
            .get(&RoadClass::of(road))
            .copied()
            .unwrap_or(DEFAULT_THRESHOLD);
        self.predict(road, time) > threshold
    }
}

impl Default for CongestionPredictor {
    fn default() -> Self {
        Self::new()
    }
}
