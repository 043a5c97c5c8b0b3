//! Shortest-path search over the network.
//!
//! # Algorithm
//!
//! Closest-unvisited relaxation (Dijkstra without a decrease-key heap): each
//! round linearly scans the unvisited set for the location with the smallest
//! tentative cost, settles it, and relaxes its outgoing roads.  O(V² + E)
//! overall — fine at logistics-network scale, where V is tens of locations,
//! and it needs no auxiliary heap to stay correct.
//!
//! Ties in the closest-unvisited scan go to the first minimum found.  When
//! several optimal paths exist the one returned depends on map iteration
//! order; callers must not rely on a specific choice among equal-cost optima.
//!
//! # Not-found behavior
//!
//! Unknown endpoints and disconnected pairs answer an empty sequence, never
//! an error.

use rustc_hash::{FxHashMap, FxHashSet};

use dln_core::{LocationId, Road};

use crate::network::LogisticsNetwork;

/// Which road attribute the search minimizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CostMetric {
    /// Raw distance — the physically shortest route.
    Distance,
    /// `distance / avg_speed × congestion` — the currently fastest route.
    TravelTime,
}

impl CostMetric {
    #[inline]
    pub fn cost(self, road: &Road) -> f64 {
        match self {
            CostMetric::Distance => road.distance,
            CostMetric::TravelTime => road.travel_time(),
        }
    }
}

impl LogisticsNetwork {
    /// Least-cost path from `start` to `end` under `metric`, as the ordered
    /// sequence of location ids including both endpoints.
    ///
    /// Empty when either endpoint is unknown or no connecting path exists.
    pub fn find_path(
        &self,
        start: &LocationId,
        end: &LocationId,
        metric: CostMetric,
    ) -> Vec<LocationId> {
        shortest_path_by(self, start, end, |road| metric.cost(road))
    }

    /// Total travel time of an ordered stop sequence, in hours.
    ///
    /// Each leg uses the fastest road directly connecting the pair (parallel
    /// roads may exist).  A leg with no direct road contributes
    /// `f64::INFINITY`, so broken sequences are visible without panicking.
    /// Sequences shorter than two stops cost 0.0.
    pub fn path_travel_time(&self, path: &[LocationId]) -> f64 {
        self.sum_legs(path, |road| road.travel_time())
    }

    /// Total distance of an ordered stop sequence, analogous to
    /// [`path_travel_time`](Self::path_travel_time).
    pub fn path_distance(&self, path: &[LocationId]) -> f64 {
        self.sum_legs(path, |road| road.distance)
    }

    fn sum_legs(&self, path: &[LocationId], leg_cost: impl Fn(&Road) -> f64) -> f64 {
        path.windows(2)
            .map(|pair| {
                self.connected_roads(&pair[0])
                    .iter()
                    .filter(|r| r.destination == pair[1])
                    .map(&leg_cost)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }
}

/// The shared relaxation loop.  `edge_cost` must be non-negative.
///
/// Used by [`CostMetric`]-based search above and by the congestion-aware
/// router, which weights edges by predicted congestion instead.
pub(crate) fn shortest_path_by(
    network: &LogisticsNetwork,
    start: &LocationId,
    end: &LocationId,
    edge_cost: impl Fn(&Road) -> f64,
) -> Vec<LocationId> {
    if !network.contains(start) || !network.contains(end) {
        return Vec::new();
    }

    let mut dist: FxHashMap<&LocationId, f64> = network
        .location_ids()
        .map(|id| (id, f64::INFINITY))
        .collect();
    dist.insert(start, 0.0);

    let mut prev: FxHashMap<&LocationId, &LocationId> = FxHashMap::default();
    let mut unvisited: FxHashSet<&LocationId> = network.location_ids().collect();

    while !unvisited.is_empty() {
        // Linear scan for the closest unvisited location; first-found wins ties.
        let Some(current) = closest_unvisited(&unvisited, &dist) else {
            break; // nothing reachable remains
        };
        if current == end {
            break; // destination settled — its cost can no longer improve
        }
        unvisited.remove(current);

        for road in network.connected_roads(current) {
            let Some(&neighbor) = unvisited.get(&road.destination) else {
                continue;
            };
            let candidate = dist[current] + edge_cost(road);
            if candidate < dist[neighbor] {
                dist.insert(neighbor, candidate);
                prev.insert(neighbor, current);
            }
        }
    }

    build_path(start, end, &prev)
}

fn closest_unvisited<'a>(
    unvisited: &FxHashSet<&'a LocationId>,
    dist: &FxHashMap<&LocationId, f64>,
) -> Option<&'a LocationId> {
    let mut closest = None;
    let mut min = f64::INFINITY;
    for &id in unvisited {
        let d = dist[id];
        if d < min {
            min = d;
            closest = Some(id);
        }
    }
    closest
}

/// Walk the predecessor chain back from `end`; empty if it never reaches
/// `start`.
fn build_path(
    start: &LocationId,
    end: &LocationId,
    prev: &FxHashMap<&LocationId, &LocationId>,
) -> Vec<LocationId> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        match prev.get(current) {
            Some(&p) => {
                path.push(p.clone());
                current = p;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
