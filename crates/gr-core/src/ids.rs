//! Strongly typed identifier wrappers.
//!
//! IDs carry the identifiers of the static road dataset verbatim; they are
//! not dense indexes.  All IDs are `Copy + Ord + Hash` so they can be used as
//! map keys and for deterministic tie-breaking without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw dataset identifier.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a road-network node.
    pub struct NodeId(u64);
}

typed_id! {
    /// Identifier of a directed road segment.
    pub struct SegmentId(u64);
}

typed_id! {
    /// Identifier of a named street (a group of segments).
    pub struct StreetId(u64);
}
