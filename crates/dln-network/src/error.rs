//! Network-subsystem error type.

use thiserror::Error;

use dln_core::{LocationId, RoadId};

/// Errors produced by `dln-network`.
///
/// Not-found conditions (unknown location/road ids on queries and updates)
/// are deliberately NOT errors: they log a warning and answer with a safe
/// empty value.  Errors are reserved for invalid construction and for route
/// planning that has no feasible answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// A road was added whose endpoint is not a registered location.
    #[error("road {road}: endpoint {endpoint} is not a registered location")]
    UnknownEndpoint { road: RoadId, endpoint: LocationId },

    /// No permutation of the requested stops satisfies every constraint.
    /// Carries the first constraint violation observed, for diagnostics.
    #[error("no feasible route: {0}")]
    Infeasible(InfeasibleReason),
}

/// The constraint that first rejected a candidate stop ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// Accumulated load exceeded vehicle capacity.
    Capacity,
    /// Some leg has no connecting path.
    Connectivity,
    /// Accumulated travel time exceeded a stop's deadline.
    Deadline,
}

impl std::fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InfeasibleReason::Capacity => "total load exceeds vehicle capacity",
            InfeasibleReason::Connectivity => "a leg has no connecting path",
            InfeasibleReason::Deadline => "a stop's deadline cannot be met",
        };
        f.write_str(s)
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
