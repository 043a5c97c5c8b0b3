//! `TrafficHistory` — accumulated congestion observations.
//!
//! Samples are bucketed by hour-of-day (0–23) so the predictor can ask
//! "how congested is road R around 08:00, historically?".  The store grows
//! monotonically: there is no eviction, and every recording also refreshes
//! the road's most recent ("live") value.

use dln_core::{RoadId, Timestamp};
use rustc_hash::FxHashMap;

/// Historical congestion if no samples exist for a road/hour.
pub const DEFAULT_CONGESTION: f64 = 1.0;

/// Per-road, per-hour congestion sample store.
#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficHistory {
    /// road → hour-of-day → recorded samples, in recording order.
    samples: FxHashMap<RoadId, FxHashMap<u8, Vec<f64>>>,
    /// road → most recent sample.
    live: FxHashMap<RoadId, f64>,
}

impl TrafficHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a congestion sample for `road` observed at `timestamp`.
    ///
    /// The sample lands in the bucket for `timestamp.hour_of_day()` and
    /// becomes the road's live value.
    pub fn record(&mut self, road: &RoadId, timestamp: Timestamp, congestion: f64) {
        self.samples
            .entry(road.clone())
            .or_default()
            .entry(timestamp.hour_of_day())
            .or_default()
            .push(congestion);
        self.live.insert(road.clone(), congestion);
    }

    /// Arithmetic mean of all samples recorded for `road` in `hour`.
    ///
    /// Returns [`DEFAULT_CONGESTION`] (1.0) when no samples exist — an
    /// unknown road is assumed to flow freely.
    pub fn historical_average(&self, road: &RoadId, hour: u8) -> f64 {
        let Some(bucket) = self.samples.get(road).and_then(|h| h.get(&hour)) else {
            return DEFAULT_CONGESTION;
        };
        if bucket.is_empty() {
            return DEFAULT_CONGESTION;
        }
        bucket.iter().sum::<f64>() / bucket.len() as f64
    }

    /// The most recently recorded sample for `road`, if any.
    pub fn live(&self, road: &RoadId) -> Option<f64> {
        self.live.get(road).copied()
    }

    /// Number of samples recorded for `road` in `hour`.
    pub fn sample_count(&self, road: &RoadId, hour: u8) -> usize {
        self.samples
            .get(road)
            .and_then(|h| h.get(&hour))
            .map_or(0, Vec::len)
    }
}
