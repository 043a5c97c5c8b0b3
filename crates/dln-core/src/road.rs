//! Roads: directed edges with distance, congestion, and speed.

use crate::{LocationId, RoadId};

/// Default congestion factor: 1.0 = free flow.
pub const DEFAULT_CONGESTION: f64 = 1.0;
/// Default average speed in km/h.
pub const DEFAULT_AVG_SPEED: f64 = 50.0;

/// A directed edge of the network.
///
/// The network stores every road together with an auto-generated reverse
/// twin (see [`Road::reversed`]) so the graph behaves as undirected.  Roads
/// are plain data: distance, congestion, and speed may be updated in place
/// through the network's update operation; identity is the [`RoadId`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub id: RoadId,
    pub source: LocationId,
    pub destination: LocationId,
    /// Physical length, km.  Non-negative.
    pub distance: f64,
    /// Unitless multiplier ≥ 0 applied to nominal travel time; 1.0 = no delay.
    pub congestion: f64,
    /// Average speed, km/h.  Positive.
    pub avg_speed: f64,
}

impl Road {
    /// A road with default congestion (1.0) and speed (50 km/h).
    pub fn new(
        id: impl Into<RoadId>,
        source: impl Into<LocationId>,
        destination: impl Into<LocationId>,
        distance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            destination: destination.into(),
            distance,
            congestion: DEFAULT_CONGESTION,
            avg_speed: DEFAULT_AVG_SPEED,
        }
    }

    /// Builder-style congestion override, used when seeding demo networks.
    pub fn with_congestion(mut self, congestion: f64) -> Self {
        self.congestion = congestion;
        self
    }

    /// Builder-style speed override.
    pub fn with_avg_speed(mut self, avg_speed: f64) -> Self {
        self.avg_speed = avg_speed;
        self
    }

    /// Nominal traversal time in hours: `distance / avg_speed * congestion`.
    #[inline]
    pub fn travel_time(&self) -> f64 {
        self.distance / self.avg_speed * self.congestion
    }

    /// The reverse twin: swapped endpoints, suffixed ID, identical attributes.
    pub fn reversed(&self) -> Road {
        Road {
            id: self.id.reverse(),
            source: self.destination.clone(),
            destination: self.source.clone(),
            distance: self.distance,
            congestion: self.congestion,
            avg_speed: self.avg_speed,
        }
    }
}
