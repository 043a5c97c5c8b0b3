//! Network locations: distribution hubs and customer stops.

use crate::LocationId;

/// A node of the logistics network.
///
/// Immutable once created.  The network owns its locations; roads, vehicles,
/// and deliveries refer to them by [`LocationId`] only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// `true` for distribution hubs, `false` for customer stops.
    pub is_hub: bool,
}

impl Location {
    pub fn hub(id: impl Into<LocationId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), is_hub: true }
    }

    pub fn customer(id: impl Into<LocationId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), is_hub: false }
    }
}
