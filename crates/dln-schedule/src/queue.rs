//! `DeliveryQueue` — pending deliveries in dispatch order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::delivery::{dispatch_order, Delivery};

/// Max-heap wrapper: the delivery dispatched first compares greatest.
#[derive(Debug)]
struct Pending(Delivery);

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // dispatch_order: Less = dispatched earlier, so reverse for max-heap.
        dispatch_order(&self.0, &other.0).reverse()
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// Priority queue over pending deliveries.
///
/// Polling order is [`dispatch_order`]: priority descending, deadline
/// ascending.  Deliveries tying on both fields come out in unspecified
/// relative order.
#[derive(Default, Debug)]
pub struct DeliveryQueue {
    heap: BinaryHeap<Pending>,
}

impl DeliveryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delivery: Delivery) {
        self.heap.push(Pending(delivery));
    }

    /// Remove and return the next delivery to dispatch.
    pub fn pop(&mut self) -> Option<Delivery> {
        self.heap.pop().map(|p| p.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
