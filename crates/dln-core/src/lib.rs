//! `dln-core` — foundational types for the delivery logistics network.
//!
//! This crate is a dependency of every other `dln-*` crate.  It intentionally
//! has no `dln-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`ids`]      | `LocationId`, `RoadId`, `VehicleId`, `DeliveryId`    |
//! | [`time`]     | `Timestamp` (unix seconds, hour-of-day bucketing)    |
//! | [`location`] | `Location` (hub or customer stop)                    |
//! | [`road`]     | `Road` (directed edge with congestion and speed)     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod ids;
pub mod location;
pub mod road;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{DeliveryId, LocationId, RoadId, VehicleId};
pub use location::Location;
pub use road::Road;
pub use time::Timestamp;
