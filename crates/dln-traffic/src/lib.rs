//! `dln-traffic` — traffic history and congestion prediction.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`history`]   | `TrafficHistory` (per-road, per-hour congestion samples) |
//! | [`predictor`] | `CongestionPredictor`, `RoadClass`, bottleneck thresholds |
//!
//! # Prediction model (summary)
//!
//! A road's congestion at time `t` is forecast as a weighted blend of the
//! live reading on the road and the historical average for `t`'s hour:
//!
//! ```text
//! predicted = 0.7 × live + 0.3 × mean(samples[road][hour(t)])
//! ```
//!
//! With no recorded samples the historical term defaults to 1.0 (free flow).
//! A road is a likely bottleneck when its prediction exceeds the threshold
//! of its [`RoadClass`], which is derived from average speed.

pub mod history;
pub mod predictor;

#[cfg(test)]
mod tests;

pub use history::TrafficHistory;
pub use predictor::{CongestionPredictor, RoadClass};
