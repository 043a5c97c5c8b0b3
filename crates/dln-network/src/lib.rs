//! `dln-network` — logistics network graph, pathfinding, and route planning.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`network`]   | `LogisticsNetwork` (locations + adjacency buckets)        |
//! | [`path`]      | `CostMetric`, shortest-path search, path time/distance    |
//! | [`adaptive`]  | congestion-aware routing via `CongestionPredictor`        |
//! | [`optimizer`] | `RoutePlan`, brute-force multi-stop route optimization    |
//! | [`error`]     | `NetworkError`, `InfeasibleReason`, `NetworkResult<T>`    |
//!
//! # Graph model (summary)
//!
//! The network is undirected in effect but stored as directed adjacency
//! buckets: every `add_road` inserts the road into its source's bucket and an
//! auto-generated reverse twin (same attributes, swapped endpoints, suffixed
//! id) into the destination's bucket.  All lookups are by stable string id,
//! never by reference, so locations and roads remain plain data.

pub mod adaptive;
pub mod error;
pub mod network;
pub mod optimizer;
pub mod path;


pub use error::{InfeasibleReason, NetworkError, NetworkResult};
pub use network::LogisticsNetwork;
pub use optimizer::RoutePlan;
pub use path::CostMetric;
