//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` so
//! tables can index by `id.index()` directly.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the agent store.  Restockers and deliverers share
    /// one ID space; processing order within a role follows ascending ID.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a shelf cell in the grid layout's shelf list.
    pub struct ShelfId(u32);
}

typed_id! {
    /// Index of a pickup point in the grid layout.
    pub struct PickupId(u16);
}

typed_id! {
    /// Index of a delivery point in the grid layout.
    pub struct DeliveryId(u16);
}

typed_id! {
    /// Index of a charging station in the grid layout.
    pub struct StationId(u16);
}

typed_id! {
    /// Monotonic identifier of an in-transit package.  Never reused.
    pub struct PackageId(u64);
}
