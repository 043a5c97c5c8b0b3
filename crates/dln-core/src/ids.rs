//! Strongly typed identifier wrappers over shared strings.
//!
//! The network, traffic history, and scheduler all key their state by stable
//! string identifiers ("H1", "R12", "V3") rather than by object references,
//! so entities can be referenced from multiple maps without aliasing issues.
//! Each ID type wraps an `Arc<str>`: clones are a refcount bump, and the same
//! ID can sit as a key in several `FxHashMap`s at once.

use std::fmt;
use std::sync::Arc;

/// Generate a typed ID wrapper around an `Arc<str>`.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(Arc<str>);

        impl $name {
            pub fn new(id: impl Into<Arc<str>>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(Arc::from(s))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(Arc::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                &*self.0 == *other
            }
        }
    };
}

string_id! {
    /// Identifier of a network location (hub or customer stop).
    pub struct LocationId;
}

string_id! {
    /// Identifier of a directed road.  Reverse twins carry a suffixed ID,
    /// see [`RoadId::reverse`].
    pub struct RoadId;
}

string_id! {
    /// Identifier of a fleet vehicle.
    pub struct VehicleId;
}

string_id! {
    /// Identifier of a delivery order.
    pub struct DeliveryId;
}

/// Suffix distinguishing the auto-generated reverse twin of a road.
const REVERSE_SUFFIX: &str = "_reverse";

impl RoadId {
    /// ID of the auto-generated reverse twin of this road.
    pub fn reverse(&self) -> RoadId {
        RoadId::new(format!("{}{REVERSE_SUFFIX}", self.0))
    }

    /// `true` if this ID names a reverse twin rather than an original road.
    pub fn is_reverse(&self) -> bool {
        self.0.ends_with(REVERSE_SUFFIX)
    }
}
