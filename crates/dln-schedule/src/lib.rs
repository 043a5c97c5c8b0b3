//! `dln-schedule` — delivery prioritization and fleet assignment.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`delivery`]  | `Delivery`, `Priority`, the `dispatch_order` rule       |
//! | [`vehicle`]   | `Vehicle` (capacity, load, availability)                |
//! | [`queue`]     | `DeliveryQueue` (priority heap over pending deliveries) |
//! | [`scheduler`] | `DeliveryScheduler`, `ScheduleReport`                   |
//!
//! # Scheduling model (summary)
//!
//! Pending deliveries drain in dispatch order (priority descending, deadline
//! ascending).  Each delivery is offered to every vehicle that can still
//! take its load; the vehicle with the lowest assignment score wins:
//!
//! ```text
//! score = load_fraction × 100 + existing_stops × 10 − hours_to_deadline × 5
//! ```
//!
//! A delivery with no candidate vehicle is dropped, reported, and never
//! retried.  Vehicles become permanently unavailable the moment their load
//! reaches capacity.  The scheduler is incremental: repeated passes continue
//! from the current queue and fleet state.

pub mod delivery;
pub mod queue;
pub mod scheduler;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use delivery::{dispatch_order, Delivery, Priority};
pub use queue::DeliveryQueue;
pub use scheduler::{DeliveryScheduler, ScheduleReport};
pub use vehicle::Vehicle;
