//! Strongly typed string identifiers.
//!
//! Entity ids arrive over the wire as plain strings (`"b1"`, `"v2"`), so the
//! wrappers hold a `String` rather than an index.  Both serialise
//! transparently and implement `Borrow<str>`, which lets maps keyed by an id
//! be queried with a `&str`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed id wrapper around a `String`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

typed_id! {
    /// Identifier of a campus building (`"b1"`, `"b2"`, …).
    pub struct BuildingId;
}

typed_id! {
    /// Identifier of a tracked vehicle (`"v1"`, `"v2"`, …).
    pub struct VehicleId;
}
