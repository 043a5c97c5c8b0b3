//! `LogisticsNetwork` — the graph store.
//!
//! # Data layout
//!
//! Two id-keyed maps: `locations` owns every [`Location`], and `adjacency`
//! holds one bucket of outgoing [`Road`]s per location.  Roads reference
//! their endpoints by [`LocationId`], never by pointer, so removal and
//! in-place updates stay simple.
//!
//! # Reverse-twin invariant
//!
//! For every stored road whose id is not itself a reverse twin, a twin with
//! matching distance/speed/congestion exists in the opposite bucket.
//! `add_road`, `update_road`, and `remove_road` all maintain this invariant
//! by operating on both directions at once.

use rustc_hash::FxHashMap;
use tracing::warn;

use dln_core::{Location, LocationId, Road, RoadId};

use crate::error::{NetworkError, NetworkResult};

/// In-memory graph of locations and bidirectional roads.
#[derive(Default, Debug, Clone)]
pub struct LogisticsNetwork {
    locations: FxHashMap<LocationId, Location>,
    adjacency: FxHashMap<LocationId, Vec<Road>>,
}

impl LogisticsNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Location operations ───────────────────────────────────────────────

    /// Register a location.  Duplicate ids are a warned no-op: the existing
    /// location and its roads are left untouched.
    pub fn add_location(&mut self, location: Location) {
        if self.locations.contains_key(&location.id) {
            warn!(location = %location.id, "location already exists, ignoring");
            return;
        }
        self.adjacency.insert(location.id.clone(), Vec::new());
        self.locations.insert(location.id.clone(), location);
    }

    /// Remove a location and purge every road touching it, from every bucket.
    /// Unknown ids are a warned no-op.
    pub fn remove_location(&mut self, id: &LocationId) {
        if self.locations.remove(id).is_none() {
            warn!(location = %id, "location not found, nothing removed");
            return;
        }
        self.adjacency.remove(id);
        for bucket in self.adjacency.values_mut() {
            bucket.retain(|r| r.source != *id && r.destination != *id);
        }
    }

    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn contains(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    /// All registered locations, in no particular order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// All location ids, in no particular order.
    pub fn location_ids(&self) -> impl Iterator<Item = &LocationId> {
        self.locations.keys()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    // ── Road operations ───────────────────────────────────────────────────

    /// Add a road and its auto-generated reverse twin.
    ///
    /// Both endpoints must already be registered; an unknown endpoint is the
    /// one hard precondition failure in the network and yields
    /// [`NetworkError::UnknownEndpoint`].  Re-adding an existing road id
    /// replaces the stored road (identity is the id).
    pub fn add_road(&mut self, road: Road) -> NetworkResult<()> {
        for endpoint in [&road.source, &road.destination] {
            if !self.locations.contains_key(endpoint) {
                return Err(NetworkError::UnknownEndpoint {
                    road: road.id.clone(),
                    endpoint: endpoint.clone(),
                });
            }
        }

        let twin = road.reversed();
        Self::insert_into_bucket(
            self.adjacency.entry(road.source.clone()).or_default(),
            road,
        );
        Self::insert_into_bucket(
            self.adjacency.entry(twin.source.clone()).or_default(),
            twin,
        );
        Ok(())
    }

    fn insert_into_bucket(bucket: &mut Vec<Road>, road: Road) {
        bucket.retain(|r| r.id != road.id);
        bucket.push(road);
    }

    /// Remove a road and its reverse twin from every bucket.
    ///
    /// Passing a twin id removes just that direction.  Unknown ids remove
    /// nothing (not an error — idempotent cleanup).
    pub fn remove_road(&mut self, id: &RoadId) {
        let twin = id.reverse();
        for bucket in self.adjacency.values_mut() {
            bucket.retain(|r| r.id != *id && r.id != twin);
        }
    }

    /// Update distance/congestion/speed of a road in place, in **both**
    /// directions, keeping the reverse twin in sync.  Warns when the id is
    /// unknown.
    pub fn update_road(&mut self, id: &RoadId, distance: f64, congestion: f64, avg_speed: f64) {
        let twin = id.reverse();
        let mut found = false;
        for bucket in self.adjacency.values_mut() {
            for road in bucket.iter_mut().filter(|r| r.id == *id || r.id == twin) {
                road.distance = distance;
                road.congestion = congestion;
                road.avg_speed = avg_speed;
                found = true;
            }
        }
        if !found {
            warn!(road = %id, "road not found, nothing updated");
        }
    }

    /// Outgoing roads of a location.  Unknown ids answer an empty slice,
    /// never an error.
    pub fn connected_roads(&self, id: &LocationId) -> &[Road] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Find a stored road by id (either direction).
    pub fn road(&self, id: &RoadId) -> Option<&Road> {
        self.adjacency
            .values()
            .flat_map(|bucket| bucket.iter())
            .find(|r| r.id == *id)
    }

    /// Total number of stored directed roads (twins counted separately).
    pub fn road_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
