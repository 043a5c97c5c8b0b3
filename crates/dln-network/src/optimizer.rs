//! Brute-force multi-stop route optimization.
//!
//! Given one vehicle's start point, a set of destinations with loads and
//! per-stop deadlines, and the vehicle's capacity, find the visiting order of
//! *all* destinations with minimal total travel time that violates no
//! constraint.
//!
//! # Scaling limit (intentional)
//!
//! Every permutation of the destination set is evaluated — factorial cost.
//! This is exact by contract: the true minimal-time feasible order is found,
//! never a heuristic approximation.  Callers must bound the destination count
//! (≈ 8–10 stops at most) to keep the search tractable; larger problems need
//! a different planner, not a bigger timeout.

use rustc_hash::FxHashMap;
use tracing::debug;

use dln_core::LocationId;

use crate::error::{InfeasibleReason, NetworkError, NetworkResult};
use crate::network::LogisticsNetwork;
use crate::path::CostMetric;

/// A feasible stop ordering and its total travel time in hours.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Destinations in visiting order (start point not included).
    pub stops: Vec<LocationId>,
    /// Sum of per-leg fastest-path travel times.
    pub total_time: f64,
}

impl LogisticsNetwork {
    /// Find the minimal-time feasible visiting order over `loads.keys()`.
    ///
    /// - `loads`: destination → load quantity picked up for that stop.
    /// - `deadlines`: destination → time budget (same unit as path travel
    ///   time) by which the stop must be reached.  Stops without an entry
    ///   are unconstrained.
    /// - `capacity`: rejects any ordering once accumulated load exceeds it.
    ///
    /// Legs are evaluated with the travel-time path finder between successive
    /// stops.  An empty destination set is trivially feasible.  When no
    /// permutation is feasible the error reports the first constraint
    /// violation observed.
    pub fn plan_route(
        &self,
        start: &LocationId,
        loads: &FxHashMap<LocationId, f64>,
        deadlines: &FxHashMap<LocationId, f64>,
        capacity: f64,
    ) -> NetworkResult<RoutePlan> {
        let mut destinations: Vec<&LocationId> = loads.keys().collect();
        let mut search = Search {
            network: self,
            start,
            loads,
            deadlines,
            capacity,
            best: None,
            first_failure: None,
        };

        let count = destinations.len();
        permute(&mut destinations, count, &mut |order| search.evaluate(order));

        match search.best {
            Some(plan) => Ok(plan),
            None => {
                let reason = search.first_failure.unwrap_or(InfeasibleReason::Connectivity);
                debug!(%start, stops = count, %reason, "no feasible route");
                Err(NetworkError::Infeasible(reason))
            }
        }
    }
}

struct Search<'a> {
    network: &'a LogisticsNetwork,
    start: &'a LocationId,
    loads: &'a FxHashMap<LocationId, f64>,
    deadlines: &'a FxHashMap<LocationId, f64>,
    capacity: f64,
    best: Option<RoutePlan>,
    first_failure: Option<InfeasibleReason>,
}

impl Search<'_> {
    /// Walk one candidate ordering; keep it if feasible and fastest so far.
    fn evaluate(&mut self, order: &[&LocationId]) {
        let mut load = 0.0;
        let mut time = 0.0;
        let mut at = self.start;

        for &stop in order {
            load += self.loads[stop];
            if load > self.capacity {
                self.reject(InfeasibleReason::Capacity);
                return;
            }

            match self.leg_time(at, stop) {
                Some(t) => time += t,
                None => {
                    self.reject(InfeasibleReason::Connectivity);
                    return;
                }
            }

            if let Some(&deadline) = self.deadlines.get(stop) {
                if time > deadline {
                    self.reject(InfeasibleReason::Deadline);
                    return;
                }
            }
        }

        if self.best.as_ref().is_none_or(|b| time < b.total_time) {
            self.best = Some(RoutePlan {
                stops: order.iter().map(|&id| id.clone()).collect(),
                total_time: time,
            });
        }
    }

    /// Fastest-path time between two stops, `None` when disconnected.
    fn leg_time(&self, from: &LocationId, to: &LocationId) -> Option<f64> {
        if from == to {
            return Some(0.0);
        }
        let path = self.network.find_path(from, to, CostMetric::TravelTime);
        if path.is_empty() {
            None
        } else {
            Some(self.network.path_travel_time(&path))
        }
    }

    fn reject(&mut self, reason: InfeasibleReason) {
        self.first_failure.get_or_insert(reason);
    }
}

/// Heap's algorithm: visit every permutation of `items` in place.
fn permute<T, F: FnMut(&[T])>(items: &mut [T], k: usize, visit: &mut F) {
    if k <= 1 {
        visit(items);
        return;
    }
    for i in 0..k {
        permute(items, k - 1, visit);
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
    }
}
