//! `DeliveryScheduler` — greedy assignment of deliveries to vehicles.
//!
//! # Assignment score
//!
//! For each pending delivery every candidate vehicle (available, with room)
//! is scored; the lowest score wins:
//!
//! ```text
//! score = load_fraction × 100        favor vehicles with spare capacity
//!       + existing_stops × 10        favor vehicles with fewer stops
//!       − hours_to_deadline × 5      favor urgent deliveries (may go negative)
//! ```
//!
//! The urgency term is measured from the `now` passed to
//! [`schedule_deliveries`](DeliveryScheduler::schedule_deliveries), so the
//! same delivery scores lower (more attractive) as its deadline approaches
//! across successive passes.  Callers pass wall-clock now; tests pass a fixed
//! timestamp.
//!
//! # Lifecycle
//!
//! A delivery leaves the queue the moment it is polled.  If no vehicle can
//! take it, it is dropped — reported in the pass's [`ScheduleReport`] and
//! logged, never requeued.  The scheduler is incremental: vehicle loads and
//! the schedule persist across passes, and new deliveries can be enqueued
//! between passes.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use dln_core::{DeliveryId, Timestamp, VehicleId};

use crate::delivery::Delivery;
use crate::queue::DeliveryQueue;
use crate::vehicle::Vehicle;

const LOAD_WEIGHT: f64 = 100.0;
const STOPS_WEIGHT: f64 = 10.0;
const URGENCY_WEIGHT: f64 = 5.0;

/// Outcome of one scheduling pass — the structured reporting channel; the
/// caller decides how (and whether) to render it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScheduleReport {
    /// Deliveries assigned this pass, in assignment order.
    pub assigned: Vec<(DeliveryId, VehicleId)>,
    /// Deliveries dropped this pass because no vehicle could take them.
    pub dropped: Vec<DeliveryId>,
}

/// Live incremental delivery scheduler.
#[derive(Default, Debug)]
pub struct DeliveryScheduler {
    queue: DeliveryQueue,
    fleet: FxHashMap<VehicleId, Vehicle>,
    /// vehicle → deliveries assigned to it, append-only, in assignment order.
    schedule: FxHashMap<VehicleId, Vec<Delivery>>,
}

impl DeliveryScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle and give it an empty schedule row.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.schedule.entry(vehicle.id.clone()).or_default();
        self.fleet.insert(vehicle.id.clone(), vehicle);
    }

    /// Enqueue a delivery for the next scheduling pass.
    pub fn add_delivery(&mut self, delivery: Delivery) {
        self.queue.push(delivery);
    }

    /// Run one scheduling pass: drain the queue in dispatch order, assigning
    /// each delivery to the lowest-scoring candidate vehicle.
    ///
    /// `now` anchors the urgency term of the assignment score.
    pub fn schedule_deliveries(&mut self, now: Timestamp) -> ScheduleReport {
        let mut report = ScheduleReport::default();

        while let Some(delivery) = self.queue.pop() {
            match self.best_vehicle(&delivery, now) {
                Some(vehicle_id) => {
                    let vehicle = self
                        .fleet
                        .get_mut(&vehicle_id)
                        .expect("candidate came from the fleet");
                    vehicle.assign(&delivery);
                    debug!(delivery = %delivery.id, vehicle = %vehicle_id,
                           load = vehicle.current_load(), "assigned");
                    report.assigned.push((delivery.id.clone(), vehicle_id.clone()));
                    self.schedule
                        .entry(vehicle_id)
                        .or_default()
                        .push(delivery);
                }
                None => {
                    warn!(delivery = %delivery.id,
                          "could not assign delivery, no suitable vehicle available");
                    report.dropped.push(delivery.id);
                }
            }
        }

        report
    }

    /// The candidate vehicle with the lowest assignment score, if any.
    /// First-found wins score ties.
    fn best_vehicle(&self, delivery: &Delivery, now: Timestamp) -> Option<VehicleId> {
        let mut best: Option<(&VehicleId, f64)> = None;
        for vehicle in self.fleet.values() {
            if !vehicle.can_accept(delivery) {
                continue;
            }
            let score = self.assignment_score(vehicle, delivery, now);
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((&vehicle.id, score));
            }
        }
        best.map(|(id, _)| id.clone())
    }

    fn assignment_score(&self, vehicle: &Vehicle, delivery: &Delivery, now: Timestamp) -> f64 {
        let stops = self
            .schedule
            .get(&vehicle.id)
            .map_or(0, Vec::len) as f64;
        let hours_to_deadline = now.hours_until(delivery.deadline) as f64;

        vehicle.load_fraction() * LOAD_WEIGHT + stops * STOPS_WEIGHT
            - hours_to_deadline * URGENCY_WEIGHT
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The full vehicle → deliveries mapping, for rendering.
    pub fn schedule(&self) -> &FxHashMap<VehicleId, Vec<Delivery>> {
        &self.schedule
    }

    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.fleet.get(id)
    }

    /// All registered vehicles, in no particular order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.fleet.values()
    }

    /// Deliveries still waiting for a pass.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }
}
