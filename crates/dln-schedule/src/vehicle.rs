//! Fleet vehicles.

use dln_core::{DeliveryId, LocationId, VehicleId};

use crate::Delivery;

/// A delivery vehicle.
///
/// Load and availability are mutated only through [`assign`](Self::assign).
/// Availability is one-way: once the load reaches capacity the vehicle goes
/// unavailable and nothing brings it back — deliveries are never unassigned.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,
    /// Maximum load, > 0.
    pub capacity: f64,
    /// Start/current location of the vehicle.
    pub location: LocationId,
    current_load: f64,
    assigned: Vec<DeliveryId>,
    available: bool,
}

impl Vehicle {
    pub fn new(
        id: impl Into<VehicleId>,
        capacity: f64,
        location: impl Into<LocationId>,
    ) -> Self {
        Self {
            id: id.into(),
            capacity,
            location: location.into(),
            current_load: 0.0,
            assigned: Vec::new(),
            available: true,
        }
    }

    /// `true` if the vehicle is available and has room for `delivery`.
    pub fn can_accept(&self, delivery: &Delivery) -> bool {
        self.available && self.current_load + delivery.load <= self.capacity
    }

    /// Take on `delivery`: grow the load and the assignment list, and go
    /// unavailable exactly when the load reaches capacity.
    ///
    /// Callers must check [`can_accept`](Self::can_accept) first; in debug
    /// builds violating that is caught here.
    pub fn assign(&mut self, delivery: &Delivery) {
        debug_assert!(self.can_accept(delivery));
        self.assigned.push(delivery.id.clone());
        self.current_load += delivery.load;
        if self.current_load >= self.capacity {
            self.available = false;
        }
    }

    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    /// Fraction of capacity in use, in `[0.0, 1.0]`.
    pub fn load_fraction(&self) -> f64 {
        self.current_load / self.capacity
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// IDs of deliveries assigned so far, in assignment order.
    pub fn assigned(&self) -> &[DeliveryId] {
        &self.assigned
    }
}
