//! Delivery orders and their dispatch ordering.

use std::cmp::Ordering;

use dln_core::{DeliveryId, LocationId, Timestamp};

/// Delivery urgency class.  Ordinal comparison: `High > Medium > Low`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// A delivery order.  Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    pub id: DeliveryId,
    pub destination: LocationId,
    /// Load quantity, > 0.
    pub load: f64,
    pub deadline: Timestamp,
    /// Caller-estimated travel time in hours, carried for display.
    pub estimated_time: f64,
    pub priority: Priority,
}

impl Delivery {
    pub fn new(
        id: impl Into<DeliveryId>,
        destination: impl Into<LocationId>,
        load: f64,
        deadline: Timestamp,
        estimated_time: f64,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            destination: destination.into(),
            load,
            deadline,
            estimated_time,
            priority,
        }
    }
}

/// The one encoding of dispatch order: priority descending, then deadline
/// ascending.  `Less` means `a` is dispatched before `b`.
///
/// Ties in both fields compare `Equal` — the rule never falls through to the
/// delivery id.  Every consumer of the ordering (the queue, direct sorting
/// for display) must call this function rather than re-encode the rule.
pub fn dispatch_order(a: &Delivery, b: &Delivery) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.deadline.cmp(&b.deadline))
}
