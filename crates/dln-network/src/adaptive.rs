//! Congestion-aware routing.
//!
//! Same relaxation loop as [`crate::path`], but the edge cost is the road's
//! distance scaled by its *predicted* congestion at the travel time, with a
//! further penalty on roads classified as likely bottlenecks.  The result is
//! biased away from roads forecast to jam — at the cost of no longer
//! minimizing the plain distance or current-time metrics.

use dln_core::{LocationId, Timestamp};
use dln_traffic::CongestionPredictor;

use crate::network::LogisticsNetwork;
use crate::path::shortest_path_by;

/// Cost multiplier for roads classified as likely bottlenecks.
pub const BOTTLENECK_PENALTY: f64 = 1.5;

impl LogisticsNetwork {
    /// Route from `start` to `end` minimizing congestion-weighted distance
    /// at `time`.
    ///
    /// Edge cost: `distance × predicted_congestion`, ×[`BOTTLENECK_PENALTY`]
    /// when the predictor flags the road as a likely bottleneck at `time`.
    /// Unknown endpoints or disconnected pairs answer an empty sequence.
    pub fn find_adaptive_route(
        &self,
        predictor: &CongestionPredictor,
        start: &LocationId,
        end: &LocationId,
        time: Timestamp,
    ) -> Vec<LocationId> {
        shortest_path_by(self, start, end, |road| {
            let mut cost = road.distance * predictor.predict(road, time);
            if predictor.is_likely_bottleneck(road, time) {
                cost *= BOTTLENECK_PENALTY;
            }
            cost
        })
    }
}
